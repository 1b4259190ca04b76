//! Column offset: `margin-inline-start`.

use super::{elide, Fragments, GAP};
use crate::config::InternalConfig;
use crate::props::{cascade, Responsive};

/// Props read by [`calc_offset`].
pub trait OffsetProps {
    /// Number of columns to skip.
    fn offset(&self) -> Option<&Responsive<u32>>;
}

/// Offset by `span` columns of `columns`: `calc(100% / c * s + GAP * s / c)`.
///
/// A zero or absent offset emits nothing, never a `margin: 0` rule.
pub fn calc_offset<P: OffsetProps + ?Sized>(props: &P, config: &InternalConfig) -> Fragments {
    let spans = cascade(props.offset(), &config.breakpoints);

    let computed = spans
        .into_iter()
        .zip(&config.columns)
        .map(|(span, &columns)| match span {
            Some(&span) if span > 0 => Some(format!(
                "margin-inline-start: calc(100% / {columns} * {span} + {GAP} * {span} / {columns});"
            )),
            _ => None,
        });
    elide(computed)
}
