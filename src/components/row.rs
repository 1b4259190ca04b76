//! Row: a wrapping flex line of columns with gaps between them.

use super::{calc_debug_outline, Component, DebugOutline};
use crate::calc::{
    calc_align, calc_flex, calc_gap, calc_justify, AlignProps, FlexDirection, FlexProps,
    Fragments, GapMode, GapProps, Resolver,
};
use crate::config::InternalConfig;
use crate::css::merge_media_queries_scoped;
use crate::props::{Responsive, ResponsiveFlag};

const RESOLVERS: &[Resolver<Row>] = &[
    calc_flex,
    calc_gap,
    calc_align,
    calc_justify,
    calc_debug_outline,
];

#[derive(Debug, Clone, Default)]
pub struct Row {
    selector: Option<String>,
    align: Option<Responsive<String>>,
    justify: Option<Responsive<String>>,
    direction: Option<Responsive<FlexDirection>>,
    is_reverse: Option<ResponsiveFlag>,
    has_no_wrap: Option<ResponsiveFlag>,
    has_no_gap: Option<Responsive<GapMode>>,
    debug: bool,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// `align-items` per breakpoint.
    pub fn with_align(mut self, align: impl Into<Responsive<String>>) -> Self {
        self.align = Some(align.into());
        self
    }

    /// `justify-content` per breakpoint.
    pub fn with_justify(mut self, justify: impl Into<Responsive<String>>) -> Self {
        self.justify = Some(justify.into());
        self
    }

    pub fn with_direction(mut self, direction: impl Into<Responsive<FlexDirection>>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    pub fn with_reverse(mut self, reverse: impl Into<ResponsiveFlag>) -> Self {
        self.is_reverse = Some(reverse.into());
        self
    }

    pub fn with_no_wrap(mut self, no_wrap: impl Into<ResponsiveFlag>) -> Self {
        self.has_no_wrap = Some(no_wrap.into());
        self
    }

    /// Suppress gaps: `true` for both axes, or one axis with
    /// [`GapMode::Axis`].
    pub fn with_no_gap(mut self, mode: impl Into<Responsive<GapMode>>) -> Self {
        self.has_no_gap = Some(mode.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl FlexProps for Row {
    const BASE_DIRECTION: FlexDirection = FlexDirection::Row;

    fn direction(&self) -> Option<&Responsive<FlexDirection>> {
        self.direction.as_ref()
    }
    fn is_reverse(&self) -> Option<&ResponsiveFlag> {
        self.is_reverse.as_ref()
    }
    fn has_no_wrap(&self) -> Option<&ResponsiveFlag> {
        self.has_no_wrap.as_ref()
    }
}

impl GapProps for Row {
    fn has_no_gap(&self) -> Option<&Responsive<GapMode>> {
        self.has_no_gap.as_ref()
    }
}

impl AlignProps for Row {
    const ALIGN_PROPERTY: &'static str = "align-items";

    fn align(&self) -> Option<&Responsive<String>> {
        self.align.as_ref()
    }
    fn justify(&self) -> Option<&Responsive<String>> {
        self.justify.as_ref()
    }
}

impl DebugOutline for Row {
    const DEBUG_KEY: &'static str = "row";

    fn is_debug(&self) -> bool {
        self.debug
    }
}

impl Component for Row {
    fn component_type(&self) -> &str {
        "Row"
    }

    fn selector(&self) -> &str {
        self.selector.as_deref().unwrap_or(".row")
    }

    fn rules(&self, config: &InternalConfig) -> Fragments {
        merge_media_queries_scoped(RESOLVERS, self, config, self.selector())
    }
}
