//! Spacer: flexible empty space between grid items.

use super::{calc_debug_outline, Component, DebugOutline};
use crate::calc::{
    calc_spacer_display, calc_spacer_max_values, calc_spacer_measures, Fragments, Resolver,
    SpacerProps,
};
use crate::config::InternalConfig;
use crate::css::merge_media_queries_scoped;
use crate::props::{Responsive, ResponsiveFlag};

const RESOLVERS: &[Resolver<Spacer>] = &[
    calc_spacer_display,
    calc_spacer_measures,
    calc_spacer_max_values,
    calc_debug_outline,
];

/// Empty space that grows to fill its line unless told not to stretch.
///
/// Measures are in spacing units.
#[derive(Debug, Clone, Default)]
pub struct Spacer {
    selector: Option<String>,
    x: Option<Responsive<f64>>,
    y: Option<Responsive<f64>>,
    max_x: Option<Responsive<f64>>,
    max_y: Option<Responsive<f64>>,
    is_not_stretching: Option<ResponsiveFlag>,
    is_inline: bool,
    debug: bool,
}

impl Spacer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn with_x(mut self, x: impl Into<Responsive<f64>>) -> Self {
        self.x = Some(x.into());
        self
    }

    pub fn with_y(mut self, y: impl Into<Responsive<f64>>) -> Self {
        self.y = Some(y.into());
        self
    }

    pub fn with_max_x(mut self, max_x: impl Into<Responsive<f64>>) -> Self {
        self.max_x = Some(max_x.into());
        self
    }

    pub fn with_max_y(mut self, max_y: impl Into<Responsive<f64>>) -> Self {
        self.max_y = Some(max_y.into());
        self
    }

    pub fn with_not_stretching(mut self, flag: impl Into<ResponsiveFlag>) -> Self {
        self.is_not_stretching = Some(flag.into());
        self
    }

    pub fn with_inline(mut self, inline: bool) -> Self {
        self.is_inline = inline;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl SpacerProps for Spacer {
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
        self.is_not_stretching.as_ref()
    }
    fn is_inline(&self) -> bool {
        self.is_inline
    }
}

impl DebugOutline for Spacer {
    const DEBUG_KEY: &'static str = "spacer";

    fn is_debug(&self) -> bool {
        self.debug
    }
}

impl Component for Spacer {
    fn component_type(&self) -> &str {
        "Spacer"
    }

    fn selector(&self) -> &str {
        self.selector.as_deref().unwrap_or(".spacer")
    }

    fn rules(&self, config: &InternalConfig) -> Fragments {
        merge_media_queries_scoped(RESOLVERS, self, config, self.selector())
    }
}
