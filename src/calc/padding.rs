//! Horizontal padding in spacing units.

use super::{elide, rem, Fragments};
use crate::config::InternalConfig;
use crate::props::{cascade, Responsive};

/// Rendered for a side that has no value while the other side does.
const MISSING_SIDE: &str = "undefined";

/// Props read by [`calc_padding`]. Values are spacing units.
pub trait PaddingProps {
    /// Shorthand for both sides.
    fn padding(&self) -> Option<&Responsive<f64>>;
    fn padding_left(&self) -> Option<&Responsive<f64>>;
    fn padding_right(&self) -> Option<&Responsive<f64>>;
}

/// `padding-left` / `padding-right` per breakpoint.
///
/// Each side takes its explicit prop where one is in effect, else the
/// shorthand.
pub fn calc_padding<P: PaddingProps + ?Sized>(props: &P, config: &InternalConfig) -> Fragments {
    let bps = &config.breakpoints;
    let both = cascade(props.padding(), bps);
    let left = cascade(props.padding_left(), bps);
    let right = cascade(props.padding_right(), bps);

    let side = |value: Option<&f64>| match value {
        Some(&units) => rem(units, config.base_spacing),
        None => MISSING_SIDE.to_owned(),
    };

    let computed = (0..bps.len()).map(|i| {
        let l = left[i].or(both[i]);
        let r = right[i].or(both[i]);
        if l.is_none() && r.is_none() {
            return None;
        }
        Some(format!("padding-left: {}; padding-right: {};", side(l), side(r)))
    });
    elide(computed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Props {
        padding: Option<Responsive<f64>>,
        left: Option<Responsive<f64>>,
        right: Option<Responsive<f64>>,
    }

    impl PaddingProps for Props {
        fn padding(&self) -> Option<&Responsive<f64>> {
            self.padding.as_ref()
        }
        fn padding_left(&self) -> Option<&Responsive<f64>> {
            self.left.as_ref()
        }
        fn padding_right(&self) -> Option<&Responsive<f64>> {
            self.right.as_ref()
        }
    }

    fn pad(l: &str, r: &str) -> Option<String> {
        Some(format!("padding-left: {l}; padding-right: {r};"))
    }

    #[test]
    fn nothing_set_is_all_none() {
        let out = calc_padding(&Props::default(), &InternalConfig::default());
        assert_eq!(out, vec![None; 6]);
    }

    #[test]
    fn shorthand_sets_both_sides() {
        let props = Props {
            padding: Some(Responsive::per_breakpoint([("xs", 2.0), ("md", 4.0)])),
            ..Default::default()
        };
        let out = calc_padding(&props, &InternalConfig::default());
        assert_eq!(
            out,
            vec![pad("0.5rem", "0.5rem"), None, pad("1rem", "1rem"), None, None, None]
        );
    }

    #[test]
    fn explicit_side_overrides_shorthand() {
        let props = Props {
            padding: Some(Responsive::Scalar(2.0)),
            left: Some(Responsive::per_breakpoint([("lg", 8.0)])),
            ..Default::default()
        };
        let out = calc_padding(&props, &InternalConfig::default());
        assert_eq!(
            out,
            vec![pad("0.5rem", "0.5rem"), None, None, pad("2rem", "0.5rem"), None, None]
        );
    }

    #[test]
    fn lone_side_renders_undefined_for_the_other() {
        let props = Props {
            right: Some(Responsive::Scalar(1.0)),
            ..Default::default()
        };
        let out = calc_padding(&props, &InternalConfig::default());
        assert_eq!(out[0], pad("undefined", "0.25rem"));
        assert_eq!(&out[1..], &[None, None, None, None, None]);
    }
}
