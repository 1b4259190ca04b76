//! Skeleton visuals: lookups into the resolved variant.
//!
//! Skeleton styling does not vary by breakpoint, so these return a single
//! value instead of [`super::Fragments`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{num, px};
use crate::config::{AnimationDirection, SkeletonVariant};

/// A skeleton width or height: a pixel count or any CSS length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    Px(f64),
    Css(String),
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Px(value) => f.write_str(&px(*value)),
            Dimension::Css(value) => f.write_str(value),
        }
    }
}

impl From<f64> for Dimension {
    fn from(value: f64) -> Self {
        Dimension::Px(value)
    }
}

impl From<&str> for Dimension {
    fn from(value: &str) -> Self {
        Dimension::Css(value.to_owned())
    }
}

/// CSS `animation-direction` for the shimmer.
pub fn calc_skeleton_direction(variant: &SkeletonVariant) -> &'static str {
    match variant.animation.direction {
        AnimationDirection::Ltr | AnimationDirection::Normal => "normal",
        AnimationDirection::Rtl | AnimationDirection::Reverse => "reverse",
    }
}

pub fn calc_skeleton_duration(variant: &SkeletonVariant) -> String {
    format!("{}s", num(variant.animation.duration))
}

/// Animation delay for the skeleton at `offset` within its group.
pub fn calc_skeleton_delay(variant: &SkeletonVariant, offset: usize) -> String {
    format!("{}s", num(variant.animation.delay * offset as f64))
}

pub fn calc_skeleton_border_radius(variant: &SkeletonVariant, circle: bool) -> String {
    if circle {
        "50%".to_owned()
    } else {
        variant.border_radius.clone()
    }
}

pub fn calc_skeleton_background(variant: &SkeletonVariant) -> String {
    variant.colors.base.clone()
}

pub fn calc_skeleton_gradient(variant: &SkeletonVariant) -> String {
    let colors = &variant.colors;
    format!(
        "linear-gradient(90deg, {bh} 25%, {h} 50%, {bh} 75%)",
        bh = colors.base_highlight,
        h = colors.highlight
    )
}

/// Width, `100%` when unset.
pub fn calc_skeleton_width(width: Option<&Dimension>) -> String {
    width.map_or_else(|| "100%".to_owned(), ToString::to_string)
}

/// Height, `1em` when unset. A circle without a height takes its width.
pub fn calc_skeleton_height(
    height: Option<&Dimension>,
    width: Option<&Dimension>,
    circle: bool,
) -> String {
    match (height, circle) {
        (Some(height), _) => height.to_string(),
        (None, true) => calc_skeleton_width(width),
        (None, false) => "1em".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults;

    #[test]
    fn direction_maps_to_css() {
        let mut variant = defaults::skeleton_variant();
        assert_eq!(calc_skeleton_direction(&variant), "normal");
        variant.animation.direction = AnimationDirection::Rtl;
        assert_eq!(calc_skeleton_direction(&variant), "reverse");
        variant.animation.direction = AnimationDirection::Reverse;
        assert_eq!(calc_skeleton_direction(&variant), "reverse");
        variant.animation.direction = AnimationDirection::Normal;
        assert_eq!(calc_skeleton_direction(&variant), "normal");
    }

    #[test]
    fn timing_in_seconds() {
        let variant = defaults::skeleton_variant();
        assert_eq!(calc_skeleton_duration(&variant), "1.5s");
        assert_eq!(calc_skeleton_delay(&variant, 0), "0s");
        assert_eq!(calc_skeleton_delay(&variant, 2), "0.1s");
    }

    #[test]
    fn radius_and_colors() {
        let variant = defaults::skeleton_variant();
        assert_eq!(calc_skeleton_border_radius(&variant, false), "4px");
        assert_eq!(calc_skeleton_border_radius(&variant, true), "50%");
        assert_eq!(calc_skeleton_background(&variant), "#e2e5e7");
        assert_eq!(
            calc_skeleton_gradient(&variant),
            "linear-gradient(90deg, #eceff1 25%, #f8f9fa 50%, #eceff1 75%)"
        );
    }

    // ── Dimensions ───────────────────────────────────────────────────

    #[test]
    fn dimensions_normalize_units() {
        assert_eq!(calc_skeleton_width(None), "100%");
        assert_eq!(calc_skeleton_width(Some(&Dimension::Px(120.0))), "120px");
        assert_eq!(calc_skeleton_width(Some(&"50%".into())), "50%");
        assert_eq!(calc_skeleton_height(None, None, false), "1em");
        assert_eq!(calc_skeleton_height(Some(&"2rem".into()), None, false), "2rem");
    }

    #[test]
    fn circle_height_defaults_to_width() {
        let width = Dimension::Px(48.0);
        assert_eq!(calc_skeleton_height(None, Some(&width), true), "48px");
        assert_eq!(calc_skeleton_height(None, None, true), "100%");
    }
}
