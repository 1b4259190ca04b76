//! ScreenBadge: a debug label showing the active breakpoint.
//!
//! The label text comes from the `--{prefix}-screen-size` variable emitted by
//! [`generate_screen_size_vars`](crate::css::generate_screen_size_vars), so the
//! badge itself has a single base rule.

use super::Component;
use crate::calc::Fragments;
use crate::config::InternalConfig;
use crate::css::media::wrap;
use crate::screen::ScreenObserver;

#[derive(Debug, Clone, Default)]
pub struct ScreenBadge {
    selector: Option<String>,
    prefix: Option<String>,
}

impl ScreenBadge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    /// Variable prefix to read instead of the config's own.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Text the badge shows for the observer's viewport.
    pub fn label<'a>(&self, observer: &'a ScreenObserver) -> Option<&'a str> {
        observer.current()
    }

    fn declarations(&self, config: &InternalConfig) -> String {
        let prefix = self.prefix.as_deref().unwrap_or(&config.prefix);
        let colors = &config.debug.screen_badge;
        let mut parts = Vec::with_capacity(3);
        if colors.color.is_some() {
            parts.push(format!("color: var(--{prefix}-debug-screen-badge-color);"));
        }
        if colors.background.is_some() {
            parts.push(format!(
                "background-color: var(--{prefix}-debug-screen-badge-background);"
            ));
        }
        parts.push(format!("content: var(--{prefix}-screen-size);"));
        parts.join(" ")
    }
}

impl Component for ScreenBadge {
    fn component_type(&self) -> &str {
        "ScreenBadge"
    }

    fn selector(&self) -> &str {
        self.selector.as_deref().unwrap_or(".screen-badge::after")
    }

    fn rules(&self, config: &InternalConfig) -> Fragments {
        let mut out = vec![None; config.breakpoints.len()];
        if let Some(first) = out.first_mut() {
            *first = Some(self.declarations(config));
        }
        wrap(out, config, self.selector())
    }
}
