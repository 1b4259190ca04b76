//! Merged grid configuration.
//!
//! [`GridConfig`] is the canonical, fully-defaulted configuration with sparse
//! per-breakpoint maps (as produced by [`merge_screens`]). [`InternalConfig`]
//! is the same data expanded to one slot per breakpoint, which is what the
//! resolvers index into.

use std::collections::BTreeMap;

use serde_json::Value;

use super::defaults;
use super::types::{ContainerWidth, DebugColors, SkeletonVariant};
use super::user::{deep_merge_json, UserConfig};
use super::ConfigError;
use crate::css::vars::{generate_grid_vars, generate_skeleton_vars};
use crate::props::Responsive;
use crate::screen::{fill_screens, merge_screens, Breakpoints, ScreenMap};

// ---------------------------------------------------------------------------
// GridConfig
// ---------------------------------------------------------------------------

/// The merged configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    pub breakpoint_order: Vec<String>,
    pub base_spacing: f64,
    pub breakpoints: ScreenMap<i32>,
    pub columns: ScreenMap<u32>,
    pub column_gap: ScreenMap<f64>,
    pub container: ScreenMap<ContainerWidth>,
    pub container_padding: ScreenMap<f64>,
    pub debug: DebugColors,
    pub skeleton: BTreeMap<String, SkeletonVariant>,
    pub skeleton_default: String,
    pub media_query: String,
    /// Prefix of the generated CSS variables (`--{prefix}-columns`, ...).
    pub prefix: String,
}

/// Result of [`create_config`]: the merged config and its CSS variables.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedConfig {
    pub config: GridConfig,
    pub css_vars: String,
}

/// Merge `user` over the system defaults for the breakpoints in `order`.
///
/// - `breakpoints`, `columns`, `columnGap`, `containerPadding`: an absent
///   field is filled with its default at every breakpoint; a present one is
///   used as given (a scalar keys the base breakpoint). Either way the map is
///   then canonicalized with [`merge_screens`].
/// - `container` has no default fill; breakpoints without a width are fluid.
/// - `debug` is deep-merged leaf by leaf over the default colors.
/// - `skeleton` / `skeletonDefault` replace the defaults wholesale.
///
/// CSS variables are generated with the given `prefix`.
pub fn create_config<S: AsRef<str>>(
    order: &[S],
    user: &UserConfig,
    prefix: &str,
) -> Result<CreatedConfig, ConfigError> {
    let order: Vec<String> = order.iter().map(|s| s.as_ref().to_owned()).collect();
    if order.is_empty() {
        return Err(ConfigError::EmptyBreakpointOrder);
    }

    let config = GridConfig {
        base_spacing: user.base_spacing.unwrap_or(defaults::BASE_SPACING),
        breakpoints: resolve_screens(
            "breakpoints",
            user.breakpoints.as_ref(),
            &order,
            defaults::breakpoint_width,
        ),
        columns: resolve_screens("columns", user.columns.as_ref(), &order, |_, _| {
            defaults::COLUMNS
        }),
        column_gap: resolve_screens("columnGap", user.column_gap.as_ref(), &order, |_, _| {
            defaults::COLUMN_GAP
        }),
        container: resolve_container(user.container.as_ref(), &order),
        container_padding: resolve_screens(
            "containerPadding",
            user.container_padding.as_ref(),
            &order,
            |_, _| defaults::CONTAINER_PADDING,
        ),
        debug: resolve_debug(user.debug.as_ref())?,
        skeleton: user.skeleton.clone().unwrap_or_else(defaults::skeleton_variants),
        skeleton_default: user
            .skeleton_default
            .clone()
            .unwrap_or_else(|| defaults::SKELETON_DEFAULT.to_owned()),
        media_query: user
            .media_query
            .clone()
            .unwrap_or_else(|| defaults::MEDIA_QUERY.to_owned()),
        prefix: prefix.to_owned(),
        breakpoint_order: order,
    };

    let internal = config.to_internal();
    let css_vars = format!(
        "{}\n{}",
        generate_grid_vars(&internal, prefix),
        generate_skeleton_vars(&internal, prefix)
    );

    tracing::debug!(
        breakpoints = config.breakpoint_order.len(),
        prefix,
        "created grid config"
    );
    Ok(CreatedConfig { config, css_vars })
}

fn resolve_screens<T>(
    field: &str,
    user: Option<&Responsive<T>>,
    order: &[String],
    default: impl Fn(usize, &str) -> T,
) -> ScreenMap<T>
where
    T: Clone + PartialEq + Default,
{
    let screens = match user {
        Some(value) => {
            warn_unknown_keys(field, value, order);
            value.to_screens(&order[0])
        }
        None => order
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), default(index, name)))
            .collect(),
    };
    merge_screens(&screens, order)
}

fn resolve_container(
    user: Option<&Responsive<ContainerWidth>>,
    order: &[String],
) -> ScreenMap<ContainerWidth> {
    let screens = match user {
        Some(value) => {
            warn_unknown_keys("container", value, order);
            value.to_screens(&order[0])
        }
        None => ScreenMap::new(),
    };
    merge_screens(&screens, order)
}

fn resolve_debug(user: Option<&Value>) -> Result<DebugColors, ConfigError> {
    let Some(overlay) = user else {
        return Ok(defaults::debug_colors());
    };
    let mut merged = serde_json::to_value(defaults::debug_colors())?;
    deep_merge_json(&mut merged, overlay.clone());
    Ok(serde_json::from_value(merged)?)
}

fn warn_unknown_keys<T>(field: &str, value: &Responsive<T>, order: &[String]) {
    if let Responsive::PerBreakpoint(map) = value {
        for key in map.keys().filter(|key| !order.contains(*key)) {
            tracing::warn!(field, key = key.as_str(), "ignoring unknown breakpoint key");
        }
    }
}

impl GridConfig {
    /// Expand to one slot per breakpoint.
    pub fn to_internal(&self) -> InternalConfig {
        let order = &self.breakpoint_order;
        InternalConfig {
            breakpoints: Breakpoints::from_screens(order, &self.breakpoints),
            base_spacing: self.base_spacing,
            columns: fill_screens(&self.columns, order),
            column_gap: fill_screens(&self.column_gap, order),
            container: fill_screens(&self.container, order),
            container_padding: fill_screens(&self.container_padding, order),
            debug: self.debug.clone(),
            skeleton: self.skeleton.clone(),
            skeleton_default: self.skeleton_default.clone(),
            media_query: self.media_query.clone(),
            prefix: self.prefix.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// InternalConfig
// ---------------------------------------------------------------------------

/// Breakpoint-normalized configuration: every per-breakpoint field holds
/// exactly one value per entry of `breakpoints`.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalConfig {
    pub breakpoints: Breakpoints,
    pub base_spacing: f64,
    pub columns: Vec<u32>,
    pub column_gap: Vec<f64>,
    pub container: Vec<ContainerWidth>,
    pub container_padding: Vec<f64>,
    pub debug: DebugColors,
    pub skeleton: BTreeMap<String, SkeletonVariant>,
    pub skeleton_default: String,
    pub media_query: String,
    pub prefix: String,
}

impl InternalConfig {
    /// The skeleton variant called `name`, falling back to the configured
    /// default variant, then to any configured variant, then to the built-in
    /// default.
    pub fn skeleton_variant(&self, name: Option<&str>) -> SkeletonVariant {
        if let Some(name) = name {
            if let Some(variant) = self.skeleton.get(name) {
                return variant.clone();
            }
            tracing::warn!(variant = name, "unknown skeleton variant, using default");
        }
        self.skeleton
            .get(&self.skeleton_default)
            .or_else(|| self.skeleton.values().next())
            .cloned()
            .unwrap_or_else(defaults::skeleton_variant)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        let order = crate::screen::default_order();
        let breakpoints: ScreenMap<i32> = order
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), defaults::breakpoint_width(index, name)))
            .collect();
        let base = order[0].clone();
        Self {
            base_spacing: defaults::BASE_SPACING,
            breakpoints: merge_screens(&breakpoints, &order),
            columns: ScreenMap::from([(base.clone(), defaults::COLUMNS)]),
            column_gap: ScreenMap::from([(base.clone(), defaults::COLUMN_GAP)]),
            container: ScreenMap::from([(base.clone(), ContainerWidth::Fluid)]),
            container_padding: ScreenMap::from([(base, defaults::CONTAINER_PADDING)]),
            debug: defaults::debug_colors(),
            skeleton: defaults::skeleton_variants(),
            skeleton_default: defaults::SKELETON_DEFAULT.to_owned(),
            media_query: defaults::MEDIA_QUERY.to_owned(),
            prefix: defaults::CSS_VAR_PREFIX.to_owned(),
            breakpoint_order: order,
        }
    }
}

impl Default for InternalConfig {
    fn default() -> Self {
        GridConfig::default().to_internal()
    }
}
