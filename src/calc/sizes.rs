//! Column sizing: `flex` and `max-width`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{elide, Fragments, GAP};
use crate::config::InternalConfig;
use crate::props::{cascade, Responsive};

/// A column size: a span of columns or a content keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    Span(u32),
    Keyword(SizeKeyword),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeKeyword {
    Auto,
    MaxContent,
    MinContent,
}

impl SizeKeyword {
    pub fn as_str(self) -> &'static str {
        match self {
            SizeKeyword::Auto => "auto",
            SizeKeyword::MaxContent => "max-content",
            SizeKeyword::MinContent => "min-content",
        }
    }
}

impl fmt::Display for SizeKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SizeValue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(SizeValue::Keyword(SizeKeyword::Auto)),
            "max-content" => Ok(SizeValue::Keyword(SizeKeyword::MaxContent)),
            "min-content" => Ok(SizeValue::Keyword(SizeKeyword::MinContent)),
            _ => s
                .parse::<u32>()
                .map(SizeValue::Span)
                .map_err(|_| format!("expected a column span or size keyword, got `{s}`")),
        }
    }
}

impl From<u32> for SizeValue {
    fn from(span: u32) -> Self {
        SizeValue::Span(span)
    }
}

impl From<SizeKeyword> for SizeValue {
    fn from(keyword: SizeKeyword) -> Self {
        SizeValue::Keyword(keyword)
    }
}

/// Props read by [`calc_sizes`].
pub trait SizesProps {
    fn sizes(&self) -> Option<&Responsive<SizeValue>>;
}

/// The span the generated `clamp()` evaluates to.
pub fn effective_span(span: u32, columns: u32) -> u32 {
    span.max(1).min(columns)
}

/// Column width per breakpoint.
///
/// Breakpoints before the first explicit size are `auto`, so the base
/// breakpoint always emits a rule.
pub fn calc_sizes<P: SizesProps + ?Sized>(props: &P, config: &InternalConfig) -> Fragments {
    let sizes = cascade(props.sizes(), &config.breakpoints);

    let computed = sizes
        .into_iter()
        .zip(&config.columns)
        .map(|(size, &columns)| {
            let size = size.copied().unwrap_or(SizeValue::Keyword(SizeKeyword::Auto));
            Some(size_fragment(size, columns))
        });
    elide(computed)
}

fn size_fragment(size: SizeValue, columns: u32) -> String {
    match size {
        SizeValue::Keyword(SizeKeyword::Auto) => "flex: auto; max-width: initial;".to_owned(),
        SizeValue::Keyword(keyword) => format!("flex: 0 0 {keyword}; max-width: {keyword};"),
        SizeValue::Span(span) => {
            let capped = format!("clamp(1, {span}, {columns})");
            let width =
                format!("calc(100% / {columns} * {capped} - {GAP} + {GAP} * {capped} / {columns})");
            format!("flex: 0 0 {width}; max-width: {width};")
        }
    }
}
