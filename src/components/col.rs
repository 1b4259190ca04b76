//! Col: a grid column.
//!
//! A column sizes itself in grid columns, can be offset and reordered, and
//! lays out its own children top to bottom.

use super::{calc_debug_outline, Component, DebugOutline};
use crate::calc::{
    calc_align, calc_flex, calc_offset, calc_order, calc_padding, calc_sizes, AlignProps,
    FlexDirection, FlexProps, Fragments, OffsetProps, PaddingProps, Resolver, SizeValue,
    SizesProps,
};
use crate::config::InternalConfig;
use crate::css::merge_media_queries_scoped;
use crate::props::{Responsive, ResponsiveFlag};

const RESOLVERS: &[Resolver<Col>] = &[
    calc_sizes,
    calc_offset,
    calc_order,
    calc_align,
    calc_flex,
    calc_padding,
    calc_debug_outline,
];

/// A grid column.
///
/// # Examples
///
/// ```
/// use breakpoint_grid::components::{Col, Component};
/// use breakpoint_grid::config::InternalConfig;
/// use breakpoint_grid::calc::SizeValue;
/// use breakpoint_grid::props::Responsive;
///
/// let col = Col::new().with_sizes(Responsive::per_breakpoint([("md", SizeValue::Span(6))]));
/// let css = col.stylesheet(&InternalConfig::default());
/// assert!(css.starts_with(".col { flex: auto; max-width: initial;"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Col {
    selector: Option<String>,
    sizes: Option<Responsive<SizeValue>>,
    offset: Option<Responsive<u32>>,
    order: Option<Responsive<i32>>,
    align: Option<Responsive<String>>,
    direction: Option<Responsive<FlexDirection>>,
    is_reverse: Option<ResponsiveFlag>,
    padding: Option<Responsive<f64>>,
    padding_left: Option<Responsive<f64>>,
    padding_right: Option<Responsive<f64>>,
    debug: bool,
}

impl Col {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope rules to `selector` instead of `.col` (builder pattern).
    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn with_sizes(mut self, sizes: impl Into<Responsive<SizeValue>>) -> Self {
        self.sizes = Some(sizes.into());
        self
    }

    pub fn with_offset(mut self, offset: impl Into<Responsive<u32>>) -> Self {
        self.offset = Some(offset.into());
        self
    }

    pub fn with_order(mut self, order: impl Into<Responsive<i32>>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// `align-self` per breakpoint.
    pub fn with_align(mut self, align: impl Into<Responsive<String>>) -> Self {
        self.align = Some(align.into());
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

    /// Horizontal padding on both sides, in spacing units.
    pub fn with_padding(mut self, padding: impl Into<Responsive<f64>>) -> Self {
        self.padding = Some(padding.into());
        self
    }

    pub fn with_padding_left(mut self, padding: impl Into<Responsive<f64>>) -> Self {
        self.padding_left = Some(padding.into());
        self
    }

    pub fn with_padding_right(mut self, padding: impl Into<Responsive<f64>>) -> Self {
        self.padding_right = Some(padding.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl SizesProps for Col {
    fn sizes(&self) -> Option<&Responsive<SizeValue>> {
        self.sizes.as_ref()
    }
}

impl OffsetProps for Col {
    fn offset(&self) -> Option<&Responsive<u32>> {
        self.offset.as_ref()
    }
}

impl AlignProps for Col {
    const ALIGN_PROPERTY: &'static str = "align-self";

    fn align(&self) -> Option<&Responsive<String>> {
        self.align.as_ref()
    }
    fn order(&self) -> Option<&Responsive<i32>> {
        self.order.as_ref()
    }
}

impl FlexProps for Col {
    const BASE_DIRECTION: FlexDirection = FlexDirection::Column;

    fn direction(&self) -> Option<&Responsive<FlexDirection>> {
        self.direction.as_ref()
    }
    fn is_reverse(&self) -> Option<&ResponsiveFlag> {
        self.is_reverse.as_ref()
    }
}

impl PaddingProps for Col {
    fn padding(&self) -> Option<&Responsive<f64>> {
        self.padding.as_ref()
    }
    fn padding_left(&self) -> Option<&Responsive<f64>> {
        self.padding_left.as_ref()
    }
    fn padding_right(&self) -> Option<&Responsive<f64>> {
        self.padding_right.as_ref()
    }
}

impl DebugOutline for Col {
    const DEBUG_KEY: &'static str = "col";

    fn is_debug(&self) -> bool {
        self.debug
    }
}

impl Component for Col {
    fn component_type(&self) -> &str {
        "Col"
    }

    fn selector(&self) -> &str {
        self.selector.as_deref().unwrap_or(".col")
    }

    fn rules(&self, config: &InternalConfig) -> Fragments {
        merge_media_queries_scoped(RESOLVERS, self, config, self.selector())
    }
}
