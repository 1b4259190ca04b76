//! Parser for attribute-string responsive props (`"6 md:4 xl:auto"`).
//!
//! Hosts that can only hand over strings (HTML attributes, templating
//! languages) use this instead of building [`Responsive`] values directly.

use std::fmt::Display;
use std::str::FromStr;

use super::tokenizer::{tokenize, Spanned, Token};
use super::Responsive;
use crate::screen::ScreenMap;

/// Errors from parsing an attribute string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty responsive value")]
    Empty,
    #[error("unexpected token at position {position}: {text:?}")]
    UnexpectedToken { position: usize, text: String },
    #[error("unexpected end of input: {0}")]
    UnexpectedEnd(String),
    #[error("invalid value at position {position}: {message}")]
    InvalidValue { position: usize, message: String },
}

impl<T> Responsive<T>
where
    T: FromStr,
    T::Err: Display,
{
    /// Parse an attribute string.
    ///
    /// A lone bare value yields [`Responsive::Scalar`]. When `breakpoint:value`
    /// pairs are present the result is a map, and a leading bare value is
    /// stored under `base`. Only the first item may be bare.
    pub fn parse(input: &str, base: &str) -> Result<Self, ParseError> {
        let tokens = tokenize(input);
        let mut bare: Option<T> = None;
        let mut pairs: ScreenMap<T> = ScreenMap::new();
        let mut index = 0;

        while index < tokens.len() {
            let current = &tokens[index];
            let is_pair = current.token == Some(Token::Word)
                && tokens.get(index + 1).and_then(|t| t.token) == Some(Token::Colon);

            if is_pair {
                let value = tokens.get(index + 2).ok_or_else(|| {
                    ParseError::UnexpectedEnd(format!("missing value for `{}`", current.text))
                })?;
                pairs.insert(current.text.to_owned(), parse_value(value)?);
                index += 3;
            } else if index == 0 {
                bare = Some(parse_value(current)?);
                index += 1;
            } else {
                return Err(unexpected(current));
            }
        }

        match (bare, pairs.is_empty()) {
            (None, true) => Err(ParseError::Empty),
            (Some(value), true) => Ok(Responsive::Scalar(value)),
            (bare, false) => {
                if let Some(value) = bare {
                    pairs.entry(base.to_owned()).or_insert(value);
                }
                Ok(Responsive::PerBreakpoint(pairs))
            }
        }
    }
}

fn parse_value<T>(spanned: &Spanned<'_>) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    let text = match spanned.token {
        Some(Token::Number) | Some(Token::Word) => spanned.text,
        Some(Token::Quoted) => spanned.text.trim_matches('"'),
        Some(Token::Colon) | None => return Err(unexpected(spanned)),
    };
    text.parse::<T>().map_err(|err| ParseError::InvalidValue {
        position: spanned.position,
        message: format!("{text:?}: {err}"),
    })
}

fn unexpected(spanned: &Spanned<'_>) -> ParseError {
    ParseError::UnexpectedToken {
        position: spanned.position,
        text: spanned.text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lone_value_is_scalar() {
        assert_eq!(Responsive::<u32>::parse("6", "xs"), Ok(Responsive::Scalar(6)));
    }

    #[test]
    fn pairs_build_a_map() {
        assert_eq!(
            Responsive::<u32>::parse("md:4 xl:8", "xs"),
            Ok(Responsive::per_breakpoint([("md", 4), ("xl", 8)]))
        );
    }

    #[test]
    fn leading_bare_value_goes_to_base() {
        assert_eq!(
            Responsive::<u32>::parse("6 md:4", "xs"),
            Ok(Responsive::per_breakpoint([("xs", 6), ("md", 4)]))
        );
    }

    #[test]
    fn explicit_base_pair_wins_over_bare_value() {
        assert_eq!(
            Responsive::<u32>::parse("6 xs:2", "xs"),
            Ok(Responsive::per_breakpoint([("xs", 2)]))
        );
    }

    #[test]
    fn quoted_strings_are_unwrapped() {
        assert_eq!(
            Responsive::<String>::parse(r#"md:"space between""#, "xs"),
            Ok(Responsive::per_breakpoint([("md", "space between".to_string())]))
        );
    }

    #[test]
    fn floats_parse() {
        assert_eq!(
            Responsive::<f64>::parse("0.5 lg:1.5", "xs"),
            Ok(Responsive::per_breakpoint([("xs", 0.5), ("lg", 1.5)]))
        );
    }

    // ── Errors ───────────────────────────────────────────────────────

    #[test]
    fn empty_input() {
        assert_eq!(Responsive::<u32>::parse("  ", "xs"), Err(ParseError::Empty));
    }

    #[test]
    fn second_bare_value_is_rejected() {
        assert_eq!(
            Responsive::<u32>::parse("6 7", "xs"),
            Err(ParseError::UnexpectedToken {
                position: 2,
                text: "7".into()
            })
        );
    }

    #[test]
    fn missing_value_after_colon() {
        assert!(matches!(
            Responsive::<u32>::parse("md:", "xs"),
            Err(ParseError::UnexpectedEnd(_))
        ));
    }

    #[test]
    fn wrong_typed_value() {
        assert!(matches!(
            Responsive::<u32>::parse("md:auto", "xs"),
            Err(ParseError::InvalidValue { position: 3, .. })
        ));
    }

    #[test]
    fn stray_colon() {
        assert!(matches!(
            Responsive::<u32>::parse(":4", "xs"),
            Err(ParseError::UnexpectedToken { position: 0, .. })
        ));
    }
}
