//! logos-based tokenizer for attribute-string responsive props.
//!
//! The syntax is a whitespace- (or comma-) separated list of items, each
//! either a bare value or `breakpoint:value`:
//!
//! ```text
//! 6 md:4 xl:auto
//! ```
//!
//! Token priority: longest match wins, so `max-content` is one [`Token::Word`]
//! and `-2` one [`Token::Number`].

use logos::Logos;

/// Token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r\f,]+")]
pub enum Token {
    /// Number: integer or float, possibly negative.
    #[regex(r"-?[0-9]+(\.[0-9]+)?")]
    Number,

    /// Word: breakpoint names and keyword values (`auto`, `no-row`, `fluid`).
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_-]*")]
    Word,

    /// Double-quoted string, for values containing spaces.
    #[regex(r#""[^"]*""#)]
    Quoted,

    /// `:`
    #[token(":")]
    Colon,
}

/// A token with its source text and byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned<'a> {
    /// `None` for input the lexer could not match.
    pub token: Option<Token>,
    pub text: &'a str,
    pub position: usize,
}

/// Tokenize `input`, keeping unmatched input as `token: None` entries so the
/// parser can report them.
pub fn tokenize(input: &str) -> Vec<Spanned<'_>> {
    Token::lexer(input)
        .spanned()
        .map(|(result, span)| Spanned {
            token: result.ok(),
            text: &input[span.clone()],
            position: span.start,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Option<Token>> {
        tokenize(input).into_iter().map(|s| s.token).collect()
    }

    #[test]
    fn bare_number() {
        assert_eq!(tokens("6"), vec![Some(Token::Number)]);
        assert_eq!(tokens("-2.5"), vec![Some(Token::Number)]);
    }

    #[test]
    fn breakpoint_pairs() {
        assert_eq!(
            tokens("md:4 xl:auto"),
            vec![
                Some(Token::Word),
                Some(Token::Colon),
                Some(Token::Number),
                Some(Token::Word),
                Some(Token::Colon),
                Some(Token::Word),
            ]
        );
    }

    #[test]
    fn hyphenated_keyword_is_one_word() {
        let spanned = tokenize("max-content");
        assert_eq!(spanned.len(), 1);
        assert_eq!(spanned[0].token, Some(Token::Word));
        assert_eq!(spanned[0].text, "max-content");
    }

    #[test]
    fn commas_and_newlines_separate() {
        assert_eq!(tokens("1,\n2"), vec![Some(Token::Number), Some(Token::Number)]);
    }

    #[test]
    fn quoted_string() {
        let spanned = tokenize(r#"md:"space between""#);
        assert_eq!(spanned[2].token, Some(Token::Quoted));
        assert_eq!(spanned[2].text, r#""space between""#);
    }

    #[test]
    fn positions_are_byte_offsets() {
        let spanned = tokenize("6  md:4");
        let positions: Vec<usize> = spanned.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 3, 5, 6]);
    }

    #[test]
    fn unmatched_input_is_kept() {
        let spanned = tokenize("md:@");
        assert_eq!(spanned.last().map(|s| s.token), Some(None));
        assert_eq!(spanned.last().map(|s| s.text), Some("@"));
    }
}
