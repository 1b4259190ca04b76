//! Flex direction, reversal and wrapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{elide, Fragments};
use crate::config::InternalConfig;
use crate::props::{cascade, Responsive, ResponsiveFlag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlexDirection {
    Row,
    Column,
}

impl FlexDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::Column => "column",
        }
    }
}

impl fmt::Display for FlexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlexDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "row" => Ok(FlexDirection::Row),
            "column" => Ok(FlexDirection::Column),
            _ => Err(format!("expected `row` or `column`, got `{s}`")),
        }
    }
}

/// Props read by [`calc_flex`].
pub trait FlexProps {
    /// Direction used where no `direction` prop is in effect.
    const BASE_DIRECTION: FlexDirection;

    fn direction(&self) -> Option<&Responsive<FlexDirection>> {
        None
    }
    fn is_reverse(&self) -> Option<&ResponsiveFlag> {
        None
    }
    fn has_no_wrap(&self) -> Option<&ResponsiveFlag> {
        None
    }
}

/// `flex-direction` / `flex-wrap` per breakpoint.
///
/// A `column` direction never wraps.
pub fn calc_flex<P: FlexProps>(props: &P, config: &InternalConfig) -> Fragments {
    let bps = &config.breakpoints;
    let directions = cascade(props.direction(), bps);
    let flag = |flag: Option<&ResponsiveFlag>| {
        flag.map(|f| f.per_breakpoint(bps))
            .unwrap_or_else(|| vec![false; bps.len()])
    };
    let reverse = flag(props.is_reverse());
    let no_wrap = flag(props.has_no_wrap());

    let computed = (0..bps.len()).map(|i| {
        let direction = directions[i].copied().unwrap_or(P::BASE_DIRECTION);
        let suffix = if reverse[i] { "-reverse" } else { "" };
        let wrap = if direction == FlexDirection::Column || no_wrap[i] {
            "nowrap"
        } else {
            "wrap"
        };
        Some(format!(
            "flex-direction: {direction}{suffix}; flex-wrap: {wrap};"
        ))
    });
    elide(computed)
}
