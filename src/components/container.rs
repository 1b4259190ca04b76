//! Container: centers content at the configured width per breakpoint.

use super::{calc_debug_outline, Component, DebugOutline};
use crate::calc::{calc_container_padding, calc_container_size, ContainerProps, Fragments, Resolver};
use crate::config::InternalConfig;
use crate::css::merge_media_queries_scoped;
use crate::props::{Responsive, ResponsiveFlag};

const RESOLVERS: &[Resolver<Container>] = &[
    calc_container_size,
    calc_container_padding,
    calc_debug_outline,
];

#[derive(Debug, Clone, Default)]
pub struct Container {
    selector: Option<String>,
    is_fluid: Option<ResponsiveFlag>,
    max_width: Option<Responsive<f64>>,
    has_no_padding: Option<ResponsiveFlag>,
    debug: bool,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Span the full width everywhere (`true`) or at the listed breakpoints.
    pub fn with_fluid(mut self, fluid: impl Into<ResponsiveFlag>) -> Self {
        self.is_fluid = Some(fluid.into());
        self
    }

    /// Pixel width that replaces the configured container width.
    pub fn with_max_width(mut self, max_width: impl Into<Responsive<f64>>) -> Self {
        self.max_width = Some(max_width.into());
        self
    }

    pub fn with_no_padding(mut self, no_padding: impl Into<ResponsiveFlag>) -> Self {
        self.has_no_padding = Some(no_padding.into());
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

impl ContainerProps for Container {
    fn is_fluid(&self) -> Option<&ResponsiveFlag> {
        self.is_fluid.as_ref()
    }
    fn max_width(&self) -> Option<&Responsive<f64>> {
        self.max_width.as_ref()
    }
    fn has_no_padding(&self) -> Option<&ResponsiveFlag> {
        self.has_no_padding.as_ref()
    }
}

impl DebugOutline for Container {
    const DEBUG_KEY: &'static str = "container";

    fn is_debug(&self) -> bool {
        self.debug
    }
}

impl Component for Container {
    fn component_type(&self) -> &str {
        "Container"
    }

    fn selector(&self) -> &str {
        self.selector.as_deref().unwrap_or(".container")
    }

    fn rules(&self, config: &InternalConfig) -> Fragments {
        merge_media_queries_scoped(RESOLVERS, self, config, self.selector())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::grid::create_config;
    use crate::config::UserConfig;
    use crate::screen::default_order;

    #[test]
    fn bare_container_is_fluid_with_padding() {
        let css = Container::new().stylesheet(&InternalConfig::default());
        assert_eq!(css, ".container { width: 100%; padding-inline: 12px; }");
    }

    #[test]
    fn fixed_widths_with_fluid_phone() {
        let user = UserConfig::from_json(r#"{ "container": { "sm": 540, "md": 720, "lg": 960 } }"#)
            .unwrap();
        let config = create_config(&default_order(), &user, "grid")
            .unwrap()
            .config
            .to_internal();
        let container = Container::new()
            .with_fluid(ResponsiveFlag::only(["xs", "sm"]))
            .with_no_padding(ResponsiveFlag::only(["xs"]));
        insta::assert_snapshot!(container.stylesheet(&config), @r"
        .container { width: 100%; padding-inline: 0px; }
        @media only screen and (min-width: 576px) { .container { padding-inline: 12px; } }
        @media only screen and (min-width: 768px) { .container { width: 720px; } }
        @media only screen and (min-width: 992px) { .container { width: 960px; } }
        ");
    }
}
