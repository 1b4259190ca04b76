//! Spacer measures: minimum size, growth, maximum size and display.
//!
//! All measures are spacing units, rendered in `rem`.

use super::{elide, rem, Fragments};
use crate::config::InternalConfig;
use crate::props::{cascade, Responsive, ResponsiveFlag};

/// Props read by the spacer resolvers.
pub trait SpacerProps {
    fn x(&self) -> Option<&Responsive<f64>>;
    fn y(&self) -> Option<&Responsive<f64>>;
    fn max_x(&self) -> Option<&Responsive<f64>>;
    fn max_y(&self) -> Option<&Responsive<f64>>;
    fn is_not_stretching(&self) -> Option<&ResponsiveFlag>;
    fn is_inline(&self) -> bool;
}

fn not_stretching<P: SpacerProps + ?Sized>(props: &P, config: &InternalConfig) -> Vec<bool> {
    match props.is_not_stretching() {
        Some(flag) => flag.per_breakpoint(&config.breakpoints),
        None => vec![false; config.breakpoints.len()],
    }
}

/// `min-width` / `min-height` followed by `flex-grow` per breakpoint.
pub fn calc_spacer_measures<P: SpacerProps + ?Sized>(
    props: &P,
    config: &InternalConfig,
) -> Fragments {
    let bps = &config.breakpoints;
    let xs = cascade(props.x(), bps);
    let ys = cascade(props.y(), bps);
    let fixed = not_stretching(props, config);

    let computed = (0..bps.len()).map(|i| {
        let mut parts = Vec::with_capacity(3);
        if let Some(&x) = xs[i] {
            parts.push(format!("min-width: {};", rem(x, config.base_spacing)));
        }
        if let Some(&y) = ys[i] {
            parts.push(format!("min-height: {};", rem(y, config.base_spacing)));
        }
        parts.push(format!("flex-grow: {};", if fixed[i] { 0 } else { 1 }));
        Some(parts.join(" "))
    });
    elide(computed)
}

/// `max-width` / `max-height` per breakpoint.
///
/// Per axis: an explicit max wins; without one, a non-stretching spacer is
/// capped at its own measure; otherwise an earlier cap is released with
/// `initial`.
pub fn calc_spacer_max_values<P: SpacerProps + ?Sized>(
    props: &P,
    config: &InternalConfig,
) -> Fragments {
    let bps = &config.breakpoints;
    let fixed = not_stretching(props, config);
    let width = axis_max(
        "max-width",
        cascade(props.x(), bps),
        cascade(props.max_x(), bps),
        &fixed,
        config.base_spacing,
    );
    let height = axis_max(
        "max-height",
        cascade(props.y(), bps),
        cascade(props.max_y(), bps),
        &fixed,
        config.base_spacing,
    );

    let computed = width.into_iter().zip(height).map(|(w, h)| match (w, h) {
        (None, None) => None,
        (w, h) => Some(
            [w, h]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" "),
        ),
    });
    elide(computed)
}

fn axis_max(
    property: &str,
    measure: Vec<Option<&f64>>,
    max: Vec<Option<&f64>>,
    fixed: &[bool],
    base_spacing: f64,
) -> Vec<Option<String>> {
    measure
        .into_iter()
        .zip(max)
        .zip(fixed)
        .scan(false, |capped, ((measure, max), &fixed)| {
            let value = match (max, measure) {
                (Some(&max), _) => Some(rem(max, base_spacing)),
                (None, Some(&measure)) if fixed => Some(rem(measure, base_spacing)),
                _ if *capped => Some("initial".to_owned()),
                _ => None,
            };
            if value.is_some() {
                *capped = true;
            }
            Some(value.map(|v| format!("{property}: {v};")))
        })
        .collect()
}

/// `display` at the base breakpoint only.
pub fn calc_spacer_display<P: SpacerProps + ?Sized>(
    props: &P,
    config: &InternalConfig,
) -> Fragments {
    let display = if props.is_inline() {
        "display: inline-block;"
    } else {
        "display: block;"
    };
    (0..config.breakpoints.len())
        .map(|i| (i == 0).then(|| display.to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Props {
        x: Option<Responsive<f64>>,
        y: Option<Responsive<f64>>,
        max_x: Option<Responsive<f64>>,
        max_y: Option<Responsive<f64>>,
        not_stretching: Option<ResponsiveFlag>,
        inline: bool,
    }

    impl SpacerProps for Props {
        fn x(&self) -> Option<&Responsive<f64>> {
            self.x.as_ref()
        }
        fn y(&self) -> Option<&Responsive<f64>> {
            self.y.as_ref()
        }
        fn max_x(&self) -> Option<&Responsive<f64>> {
            self.max_x.as_ref()
        }
        fn max_y(&self) -> Option<&Responsive<f64>> {
            self.max_y.as_ref()
        }
        fn is_not_stretching(&self) -> Option<&ResponsiveFlag> {
            self.not_stretching.as_ref()
        }
        fn is_inline(&self) -> bool {
            self.inline
        }
    }

    fn s(css: &str) -> Option<String> {
        Some(css.to_owned())
    }

    // ── Measures ─────────────────────────────────────────────────────

    #[test]
    fn measures_in_rem_with_growth() {
        let props = Props {
            x: Some(Responsive::per_breakpoint([("xs", 4.0), ("md", 8.0)])),
            y: Some(Responsive::Scalar(2.0)),
            ..Default::default()
        };
        let out = calc_spacer_measures(&props, &InternalConfig::default());
        assert_eq!(
            out,
            vec![
                s("min-width: 1rem; min-height: 0.5rem; flex-grow: 1;"),
                None,
                s("min-width: 2rem; min-height: 0.5rem; flex-grow: 1;"),
                None,
                None,
                None,
            ]
        );
    }

    #[test]
    fn not_stretching_stops_growth() {
        let props = Props {
            not_stretching: Some(ResponsiveFlag::only(["lg"])),
            ..Default::default()
        };
        let out = calc_spacer_measures(&props, &InternalConfig::default());
        assert_eq!(
            out,
            vec![s("flex-grow: 1;"), None, None, s("flex-grow: 0;"), s("flex-grow: 1;"), None]
        );
    }

    // ── Max values ───────────────────────────────────────────────────

    #[test]
    fn nothing_to_cap() {
        let props = Props {
            x: Some(Responsive::Scalar(4.0)),
            ..Default::default()
        };
        let out = calc_spacer_max_values(&props, &InternalConfig::default());
        assert_eq!(out, vec![None; 6]);
    }

    #[test]
    fn explicit_max_wins() {
        let props = Props {
            x: Some(Responsive::Scalar(4.0)),
            max_x: Some(Responsive::per_breakpoint([("md", 12.0)])),
            not_stretching: Some(true.into()),
            ..Default::default()
        };
        let out = calc_spacer_max_values(&props, &InternalConfig::default());
        assert_eq!(
            out,
            vec![s("max-width: 1rem;"), None, s("max-width: 3rem;"), None, None, None]
        );
    }

    #[test]
    fn cap_is_released_with_initial() {
        let props = Props {
            y: Some(Responsive::Scalar(8.0)),
            not_stretching: Some(ResponsiveFlag::only(["xs", "sm"])),
            ..Default::default()
        };
        let out = calc_spacer_max_values(&props, &InternalConfig::default());
        assert_eq!(
            out,
            vec![s("max-height: 2rem;"), None, s("max-height: initial;"), None, None, None]
        );
    }

    #[test]
    fn both_axes_combine() {
        let props = Props {
            max_x: Some(Responsive::Scalar(4.0)),
            max_y: Some(Responsive::per_breakpoint([("sm", 2.0)])),
            ..Default::default()
        };
        let out = calc_spacer_max_values(&props, &InternalConfig::default());
        assert_eq!(
            out,
            vec![
                s("max-width: 1rem;"),
                s("max-width: 1rem; max-height: 0.5rem;"),
                None,
                None,
                None,
                None,
            ]
        );
    }

    // ── Display ──────────────────────────────────────────────────────

    #[test]
    fn display_at_base_only() {
        let config = InternalConfig::default();
        let block = calc_spacer_display(&Props::default(), &config);
        assert_eq!(block, vec![s("display: block;"), None, None, None, None, None]);

        let inline = Props {
            inline: true,
            ..Default::default()
        };
        assert_eq!(calc_spacer_display(&inline, &config)[0], s("display: inline-block;"));
    }
}
