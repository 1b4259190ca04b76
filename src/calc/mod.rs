//! Responsive property resolvers.
//!
//! Every resolver takes a component's props and the breakpoint-normalized
//! config and returns [`Fragments`]: one slot per breakpoint, holding a CSS
//! declaration string or `None` when nothing changes at that breakpoint.
//!
//! All resolvers follow the same shape:
//!
//! 1. normalize each responsive prop once with [`crate::props::cascade`]
//!    (mobile-first carry-forward);
//! 2. compute the fragment in effect at every breakpoint;
//! 3. [`elide`] fragments equal to the last one emitted.
//!
//! Skeleton visuals are the exception: they do not vary by breakpoint and
//! return a single value (see [`skeleton`]).

pub mod align;
pub mod container;
pub mod flex;
pub mod gap;
pub mod offset;
pub mod padding;
pub mod sizes;
pub mod skeleton;
pub mod spacer;

use crate::config::InternalConfig;

pub use align::{calc_align, calc_justify, calc_order, AlignProps};
pub use container::{calc_container_padding, calc_container_size, ContainerProps};
pub use flex::{calc_flex, FlexDirection, FlexProps};
pub use gap::{calc_gap, GapAxis, GapMode, GapProps};
pub use offset::{calc_offset, OffsetProps};
pub use padding::{calc_padding, PaddingProps};
pub use sizes::{calc_sizes, effective_span, SizeKeyword, SizeValue, SizesProps};
pub use skeleton::Dimension;
pub use spacer::{calc_spacer_display, calc_spacer_max_values, calc_spacer_measures, SpacerProps};

/// One CSS fragment (or nothing) per breakpoint.
pub type Fragments = Vec<Option<String>>;

/// A resolver over props of type `P`.
pub type Resolver<P> = fn(&P, &InternalConfig) -> Fragments;

/// The `column-gap` custom property with a `0px` fallback.
pub(crate) const GAP: &str = "var(--column-gap, 0px)";

/// Drop every fragment equal to the one computed for the previous
/// breakpoint.
///
/// `None` input means "no rule here" and stays `None`.
pub fn elide(computed: impl IntoIterator<Item = Option<String>>) -> Fragments {
    computed
        .into_iter()
        .scan(None::<String>, |previous, current| {
            let repeated = current.is_some() && *previous == current;
            *previous = current.clone();
            Some(if repeated { None } else { current })
        })
        .collect()
}

/// Format a number the way a JavaScript template literal does: integral
/// values without a decimal point, exponent form below `1e-6` and from `1e21`
/// up (`1e-7`, `1.5e+21`).
pub fn num(value: f64) -> String {
    if value == 0.0 {
        // also covers -0.0
        return "0".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    let magnitude = value.abs();
    if magnitude < 1e-6 || magnitude >= 1e21 {
        let exp = format!("{value:e}");
        return match exp.split_once('e') {
            Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
            _ => exp,
        };
    }
    format!("{value}")
}

/// `units` spacing units in `rem`.
pub(crate) fn rem(units: f64, base_spacing: f64) -> String {
    format!("{}rem", num(units * base_spacing))
}

pub(crate) fn px(value: f64) -> String {
    format!("{}px", num(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn some(s: &str) -> Option<String> {
        Some(s.to_owned())
    }

    #[test]
    fn elide_drops_repeats() {
        let out = elide(vec![some("a"), some("a"), some("b"), some("b"), some("a")]);
        assert_eq!(out, vec![some("a"), None, some("b"), None, some("a")]);
    }

    #[test]
    fn elide_keeps_leading_none() {
        let out = elide(vec![None, None, some("a"), some("a")]);
        assert_eq!(out, vec![None, None, some("a"), None]);
    }

    #[test]
    fn elide_compares_with_previous_breakpoint_only() {
        let out = elide(vec![some("a"), None, some("a")]);
        assert_eq!(out, vec![some("a"), None, some("a")]);
    }

    #[test]
    fn num_formats_like_css() {
        assert_eq!(num(2.0), "2");
        assert_eq!(num(0.5), "0.5");
        assert_eq!(num(1.25), "1.25");
        assert_eq!(num(-0.0), "0");
        assert_eq!(num(-3.0), "-3");
    }

    #[test]
    fn num_switches_to_exponent_at_the_extremes() {
        assert_eq!(num(0.000001), "0.000001");
        assert_eq!(num(1e-7), "1e-7");
        assert_eq!(num(-2.5e-8), "-2.5e-8");
        assert_eq!(num(1e20), "100000000000000000000");
        assert_eq!(num(1e21), "1e+21");
        assert_eq!(num(1.5e22), "1.5e+22");
        assert_eq!(num(f64::INFINITY), "Infinity");
    }

    #[test]
    fn rem_multiplies_by_base_spacing() {
        assert_eq!(rem(4.0, 0.25), "1rem");
        assert_eq!(rem(3.0, 0.25), "0.75rem");
        assert_eq!(px(24.0), "24px");
    }
}
