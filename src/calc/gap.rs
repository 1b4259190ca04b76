//! Row gaps: the `--column-gap` custom property plus `column-gap` / `row-gap`.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{elide, px, Fragments};
use crate::config::InternalConfig;
use crate::props::{cascade, Responsive};

/// Which gap axes are suppressed.
///
/// `Bool(true)` suppresses both, `Bool(false)` neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GapMode {
    Bool(bool),
    Axis(GapAxis),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GapAxis {
    NoRow,
    NoColumn,
}

impl Default for GapMode {
    fn default() -> Self {
        GapMode::Bool(false)
    }
}

impl FromStr for GapMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(GapMode::Bool(true)),
            "false" => Ok(GapMode::Bool(false)),
            "no-row" => Ok(GapMode::Axis(GapAxis::NoRow)),
            "no-column" => Ok(GapMode::Axis(GapAxis::NoColumn)),
            _ => Err(format!("expected a boolean, `no-row` or `no-column`, got `{s}`")),
        }
    }
}

impl From<bool> for GapMode {
    fn from(on: bool) -> Self {
        GapMode::Bool(on)
    }
}

/// Props read by [`calc_gap`].
pub trait GapProps {
    fn has_no_gap(&self) -> Option<&Responsive<GapMode>>;
}

/// Gap declarations per breakpoint, from the configured column gap.
pub fn calc_gap<P: GapProps + ?Sized>(props: &P, config: &InternalConfig) -> Fragments {
    let modes = cascade(props.has_no_gap(), &config.breakpoints);

    let computed = modes
        .into_iter()
        .zip(&config.column_gap)
        .map(|(mode, &gap)| {
            let zero = px(0.0);
            let gap = px(gap);
            let (column, row) = match mode.copied().unwrap_or_default() {
                GapMode::Bool(false) => (&gap, &gap),
                GapMode::Bool(true) => (&zero, &zero),
                GapMode::Axis(GapAxis::NoColumn) => (&zero, &gap),
                GapMode::Axis(GapAxis::NoRow) => (&gap, &zero),
            };
            Some(format!(
                "--column-gap: {column}; column-gap: {column}; row-gap: {row};"
            ))
        });
    elide(computed)
}
