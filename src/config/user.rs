//! User-supplied configuration and the host theme that carries it.
//!
//! Every field is optional; [`super::create_config`] fills the gaps from
//! [`super::defaults`]. Field names follow the host-facing camelCase shape so
//! themes can be shared with JavaScript hosts as JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::types::{ContainerWidth, SkeletonVariant};
use super::ConfigError;
use crate::props::Responsive;

/// Partial grid configuration as written by the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct UserConfig {
    pub base_spacing: Option<f64>,
    pub breakpoints: Option<Responsive<i32>>,
    pub column_gap: Option<Responsive<f64>>,
    pub columns: Option<Responsive<u32>>,
    pub container: Option<Responsive<ContainerWidth>>,
    pub container_padding: Option<Responsive<f64>>,
    /// Partial debug color tree, deep-merged over the defaults.
    pub debug: Option<Value>,
    pub skeleton: Option<BTreeMap<String, SkeletonVariant>>,
    pub skeleton_default: Option<String>,
    pub media_query: Option<String>,
}

impl UserConfig {
    /// Parse a user config from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A host theme object. The grid reads only its `grid` key; everything else
/// belongs to the host and is kept untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid: Option<UserConfig>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

impl Theme {
    /// A theme carrying only a grid config.
    pub fn with_grid(grid: UserConfig) -> Self {
        Self {
            grid: Some(grid),
            other: Map::new(),
        }
    }

    /// Parse a theme from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Deep merge two JSON values, with `overlay` taking precedence.
///
/// Objects merge recursively; any other overlay value (including `null`)
/// replaces the base value.
pub(crate) fn deep_merge_json(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => deep_merge_json(base_value, overlay_value),
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}
