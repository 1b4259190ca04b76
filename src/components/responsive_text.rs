//! ResponsiveText: text that changes with the active breakpoint.
//!
//! The text is rendered through generated `content` rules, so a server-side
//! render shows the right string at every width without an observer.

use super::Component;
use crate::calc::{elide, Fragments, Resolver};
use crate::config::InternalConfig;
use crate::css::merge_media_queries_scoped;
use crate::props::Responsive;
use crate::screen::Breakpoints;

const RESOLVERS: &[Resolver<ResponsiveText>] = &[calc_content];

#[derive(Debug, Clone)]
pub struct ResponsiveText {
    selector: Option<String>,
    texts: Responsive<String>,
}

impl ResponsiveText {
    pub fn new(texts: impl Into<Responsive<String>>) -> Self {
        Self {
            selector: None,
            texts: texts.into(),
        }
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn texts(&self) -> &Responsive<String> {
        &self.texts
    }

    /// Text in effect at `breakpoint`, inherited from smaller breakpoints.
    pub fn text_at(&self, breakpoint: &str, breakpoints: &Breakpoints) -> Option<&str> {
        self.texts.at(breakpoint, breakpoints).map(String::as_str)
    }
}

fn calc_content(props: &ResponsiveText, config: &InternalConfig) -> Fragments {
    let computed = props
        .texts
        .cascade(&config.breakpoints)
        .into_iter()
        .map(|text| text.map(|t| format!("content: \"{}\";", quote(t))));
    elide(computed)
}

fn quote(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

impl Component for ResponsiveText {
    fn component_type(&self) -> &str {
        "ResponsiveText"
    }

    fn selector(&self) -> &str {
        self.selector.as_deref().unwrap_or(".responsive-text::after")
    }

    fn rules(&self, config: &InternalConfig) -> Fragments {
        merge_media_queries_scoped(RESOLVERS, self, config, self.selector())
    }
}
