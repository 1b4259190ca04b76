//! Grid components: prop bags that assemble their resolvers into stylesheets.
//!
//! Every component implements [`Component`]: it names the resolvers that
//! apply to it, and [`Component::stylesheet`] runs them through
//! [`merge_media_queries_scoped`](crate::css::merge_media_queries_scoped)
//! under the component's selector.

pub mod col;
pub mod container;
pub mod responsive_text;
pub mod row;
pub mod screen_badge;
pub mod skeleton;
pub mod spacer;

pub use col::Col;
pub use container::Container;
pub use responsive_text::ResponsiveText;
pub use row::Row;
pub use screen_badge::ScreenBadge;
pub use skeleton::Skeleton;
pub use spacer::Spacer;

use crate::calc::Fragments;
use crate::config::InternalConfig;
use crate::css::to_stylesheet;

// ---------------------------------------------------------------------------
// Component trait
// ---------------------------------------------------------------------------

/// A grid component whose styling is fully determined by its props and the
/// grid configuration.
pub trait Component {
    /// The component name (e.g. "Col", "Row").
    fn component_type(&self) -> &str;

    /// Selector the generated rules are scoped to.
    fn selector(&self) -> &str;

    /// One rule (or nothing) per breakpoint, already wrapped in its media
    /// conditional.
    fn rules(&self, config: &InternalConfig) -> Fragments;

    /// The rules joined into a stylesheet, one per line.
    fn stylesheet(&self, config: &InternalConfig) -> String {
        to_stylesheet(&self.rules(config))
    }
}

// ---------------------------------------------------------------------------
// Debug outlines
// ---------------------------------------------------------------------------

/// Components that can draw their debug outline.
pub trait DebugOutline {
    /// Key under `debug` in the grid config (`container`, `row`, ...).
    const DEBUG_KEY: &'static str;

    fn is_debug(&self) -> bool;
}

/// Outline and tint from the config's `--{prefix}-debug-*` variables, base
/// breakpoint only.
pub fn calc_debug_outline<P: DebugOutline>(props: &P, config: &InternalConfig) -> Fragments {
    let mut out = vec![None; config.breakpoints.len()];
    if props.is_debug() {
        if let Some(first) = out.first_mut() {
            let key = P::DEBUG_KEY;
            let prefix = &config.prefix;
            *first = Some(format!(
                "outline: 1px solid var(--{prefix}-debug-{key}-outline); \
                 background-color: var(--{prefix}-debug-{key}-background);"
            ));
        }
    }
    out
}
