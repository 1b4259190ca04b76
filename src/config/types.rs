//! Value types shared by the user-facing and merged configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// ContainerWidth
// ---------------------------------------------------------------------------

/// Container width at a breakpoint: a pixel width or the literal `"fluid"`.
///
/// The default is `Fluid`: without a configured width the container spans the
/// available width.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "ContainerRepr", into = "ContainerRepr")]
pub enum ContainerWidth {
    #[default]
    Fluid,
    Px(f64),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ContainerRepr {
    Px(f64),
    Keyword(String),
}

impl TryFrom<ContainerRepr> for ContainerWidth {
    type Error = String;

    fn try_from(repr: ContainerRepr) -> Result<Self, Self::Error> {
        match repr {
            ContainerRepr::Px(px) => Ok(ContainerWidth::Px(px)),
            ContainerRepr::Keyword(word) if word == "fluid" => Ok(ContainerWidth::Fluid),
            ContainerRepr::Keyword(word) => Err(format!("unknown container width `{word}`")),
        }
    }
}

impl From<ContainerWidth> for ContainerRepr {
    fn from(width: ContainerWidth) -> Self {
        match width {
            ContainerWidth::Fluid => ContainerRepr::Keyword("fluid".into()),
            ContainerWidth::Px(px) => ContainerRepr::Px(px),
        }
    }
}

impl FromStr for ContainerWidth {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "fluid" {
            return Ok(ContainerWidth::Fluid);
        }
        s.trim_end_matches("px")
            .parse::<f64>()
            .map(ContainerWidth::Px)
            .map_err(|_| format!("expected a pixel width or `fluid`, got `{s}`"))
    }
}

impl fmt::Display for ContainerWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerWidth::Fluid => f.write_str("fluid"),
            ContainerWidth::Px(px) => write!(f, "{}px", crate::calc::num(*px)),
        }
    }
}

// ---------------------------------------------------------------------------
// Debug colors
// ---------------------------------------------------------------------------

/// Outline colors drawn around grid elements in debug mode.
///
/// Every leaf is optional: a `null` leaf emits no CSS variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugColors {
    pub container: DebugColor,
    pub row: DebugColor,
    pub col: DebugColor,
    pub spacer: DebugColor,
    pub screen_badge: BadgeColors,
}

/// Background and outline for one element kind.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DebugColor {
    pub background: Option<String>,
    pub outline: Option<String>,
}

/// Colors of the screen badge.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BadgeColors {
    pub color: Option<String>,
    pub background: Option<String>,
}

// ---------------------------------------------------------------------------
// Skeleton variants
// ---------------------------------------------------------------------------

/// A named visual theme for loading placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkeletonVariant {
    pub animation: SkeletonAnimation,
    pub border_radius: String,
    pub colors: SkeletonColors,
}

/// Shimmer animation timing. `delay` and `duration` are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkeletonAnimation {
    pub delay: f64,
    pub direction: AnimationDirection,
    pub duration: f64,
}

/// Direction of the shimmer sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationDirection {
    Ltr,
    Rtl,
    Normal,
    Reverse,
}

/// Skeleton fill colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkeletonColors {
    pub base: String,
    pub base_highlight: String,
    pub highlight: String,
}
