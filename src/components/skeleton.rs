//! Skeleton: a shimmering loading placeholder.
//!
//! Skeleton styling does not change across breakpoints, so its stylesheet is
//! a single base rule. Skeletons in the same group stagger their animation
//! through the [`SkeletonStore`].

use super::Component;
use crate::calc::skeleton::{
    calc_skeleton_background, calc_skeleton_border_radius, calc_skeleton_delay,
    calc_skeleton_direction, calc_skeleton_duration, calc_skeleton_gradient, calc_skeleton_height,
    calc_skeleton_width,
};
use crate::calc::{Dimension, Fragments};
use crate::config::InternalConfig;
use crate::css::media::wrap;
use crate::skeleton::SkeletonStore;

#[derive(Debug, Clone)]
pub struct Skeleton {
    id: String,
    selector: Option<String>,
    width: Option<Dimension>,
    height: Option<Dimension>,
    circle: bool,
    variant: Option<String>,
    group: Option<String>,
    count: usize,
}

impl Skeleton {
    /// A skeleton identified by `id` within its group.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            selector: None,
            width: None,
            height: None,
            circle: false,
            variant: None,
            group: None,
            count: 1,
        }
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }

    pub fn with_width(mut self, width: impl Into<Dimension>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn with_height(mut self, height: impl Into<Dimension>) -> Self {
        self.height = Some(height.into());
        self
    }

    pub fn with_circle(mut self, circle: bool) -> Self {
        self.circle = circle;
        self
    }

    /// Use the named skeleton variant instead of the configured default.
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Stagger with other skeletons in `group`.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Number of placeholders this skeleton draws (default 1).
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn group(&self) -> Option<&str> {
        self.group.as_deref()
    }

    /// Register in the store. Skeletons without a group are not tracked.
    pub fn mount(&self, store: &mut SkeletonStore) {
        if let Some(group) = &self.group {
            store.register(group, &self.id, self.count);
        }
    }

    pub fn unmount(&self, store: &mut SkeletonStore) {
        if let Some(group) = &self.group {
            store.unregister(group, &self.id);
        }
    }

    /// Placeholders registered before this one in its group.
    pub fn offset(&self, store: &SkeletonStore) -> usize {
        self.group
            .as_deref()
            .map_or(0, |group| store.offset_of(group, &self.id))
    }

    /// Declarations for this skeleton at stagger position `offset`.
    pub fn declarations(&self, config: &InternalConfig, offset: usize) -> String {
        let variant = config.skeleton_variant(self.variant.as_deref());
        let width = self.width.as_ref();
        [
            format!("width: {};", calc_skeleton_width(width)),
            format!(
                "height: {};",
                calc_skeleton_height(self.height.as_ref(), width, self.circle)
            ),
            format!(
                "border-radius: {};",
                calc_skeleton_border_radius(&variant, self.circle)
            ),
            format!("background-color: {};", calc_skeleton_background(&variant)),
            format!("background-image: {};", calc_skeleton_gradient(&variant)),
            format!("animation-direction: {};", calc_skeleton_direction(&variant)),
            format!("animation-duration: {};", calc_skeleton_duration(&variant)),
            format!("animation-delay: {};", calc_skeleton_delay(&variant, offset)),
        ]
        .join(" ")
    }

    /// Stylesheet with the animation delay taken from the store.
    pub fn stylesheet_in(&self, config: &InternalConfig, store: &SkeletonStore) -> String {
        let fragments = self.fragments(config, self.offset(store));
        crate::css::to_stylesheet(&wrap(fragments, config, self.selector()))
    }

    fn fragments(&self, config: &InternalConfig, offset: usize) -> Fragments {
        let mut out = vec![None; config.breakpoints.len()];
        if let Some(first) = out.first_mut() {
            *first = Some(self.declarations(config, offset));
        }
        out
    }
}

impl Component for Skeleton {
    fn component_type(&self) -> &str {
        "Skeleton"
    }

    fn selector(&self) -> &str {
        self.selector.as_deref().unwrap_or(".skeleton")
    }

    /// Rules for an ungrouped skeleton (no stagger delay).
    fn rules(&self, config: &InternalConfig) -> Fragments {
        wrap(self.fragments(config, 0), config, self.selector())
    }
}
