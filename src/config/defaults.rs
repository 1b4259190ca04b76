//! System defaults filled in for anything the user config leaves out.

use std::collections::BTreeMap;

use super::types::{
    AnimationDirection, BadgeColors, DebugColor, DebugColors, SkeletonAnimation, SkeletonColors,
    SkeletonVariant,
};
use crate::screen::{DEFAULT_BREAKPOINT_ORDER, DEFAULT_BREAKPOINT_WIDTHS};

/// Spacing unit in `rem`; spacing props are multiples of it.
pub const BASE_SPACING: f64 = 0.25;

/// Grid columns at every breakpoint.
pub const COLUMNS: u32 = 12;

/// Gap between columns, in px.
pub const COLUMN_GAP: f64 = 24.0;

/// Horizontal container padding, in px.
pub const CONTAINER_PADDING: f64 = 12.0;

/// Media type every breakpoint conditional starts with.
pub const MEDIA_QUERY: &str = "only screen";

/// Name of the skeleton variant used when none is requested.
pub const SKELETON_DEFAULT: &str = "light";

/// Prefix of generated CSS custom properties (`--grid-columns`, ...).
pub const CSS_VAR_PREFIX: &str = "grid";

/// Default minimum width for breakpoint `name` at position `index`.
///
/// Known names use the standard table; unknown names fall back to the
/// standard width at the same position (the last one past the end).
pub fn breakpoint_width(index: usize, name: &str) -> i32 {
    let slot = DEFAULT_BREAKPOINT_ORDER
        .iter()
        .position(|known| *known == name)
        .unwrap_or_else(|| index.min(DEFAULT_BREAKPOINT_WIDTHS.len() - 1));
    DEFAULT_BREAKPOINT_WIDTHS[slot]
}

pub fn debug_colors() -> DebugColors {
    fn pair(background: &str, outline: &str) -> DebugColor {
        DebugColor {
            background: Some(background.into()),
            outline: Some(outline.into()),
        }
    }

    DebugColors {
        container: pair("rgba(0, 0, 255, 0.05)", "#5c6bc0"),
        row: pair("rgba(0, 128, 0, 0.05)", "#66bb6a"),
        col: pair("rgba(255, 0, 0, 0.05)", "#ef5350"),
        spacer: pair("rgba(255, 165, 0, 0.15)", "#ffa726"),
        screen_badge: BadgeColors {
            color: Some("#ffffff".into()),
            background: Some("#212121".into()),
        },
    }
}

/// The built-in `light` skeleton variant.
pub fn skeleton_variant() -> SkeletonVariant {
    variant("#e2e5e7", "#eceff1", "#f8f9fa")
}

pub fn skeleton_variants() -> BTreeMap<String, SkeletonVariant> {
    BTreeMap::from([
        (SKELETON_DEFAULT.to_string(), skeleton_variant()),
        ("dark".to_string(), variant("#2a2d31", "#34383d", "#41464c")),
    ])
}

fn variant(base: &str, base_highlight: &str, highlight: &str) -> SkeletonVariant {
    SkeletonVariant {
        animation: SkeletonAnimation {
            delay: 0.05,
            direction: AnimationDirection::Ltr,
            duration: 1.5,
        },
        border_radius: "4px".into(),
        colors: SkeletonColors {
            base: base.into(),
            base_highlight: base_highlight.into(),
            highlight: highlight.into(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_breakpoint_names_use_standard_widths() {
        assert_eq!(breakpoint_width(0, "md"), 768);
        assert_eq!(breakpoint_width(5, "xs"), 0);
    }

    #[test]
    fn unknown_breakpoint_names_fall_back_to_position() {
        assert_eq!(breakpoint_width(1, "phone"), 576);
        assert_eq!(breakpoint_width(40, "wall"), 1400);
    }

    #[test]
    fn default_skeleton_variant_exists() {
        assert!(skeleton_variants().contains_key(SKELETON_DEFAULT));
    }
}
