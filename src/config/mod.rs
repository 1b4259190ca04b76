//! Grid configuration: defaults, user input, merging and caching.
//!
//! - [`user`]: the partial, deserializable config a host writes
//! - [`defaults`]: system defaults for every field
//! - [`grid`]: merging into [`GridConfig`] / [`InternalConfig`]
//! - [`resolver`]: [`ConfigResolver`], the cache service hosts hold for the
//!   lifetime of the application

pub mod defaults;
pub mod grid;
pub mod resolver;
pub mod types;
pub mod user;

pub use grid::{create_config, CreatedConfig, GridConfig, InternalConfig};
pub use resolver::{ConfigResolver, ScreenTable};
pub use types::{
    AnimationDirection, BadgeColors, ContainerWidth, DebugColor, DebugColors, SkeletonAnimation,
    SkeletonColors, SkeletonVariant,
};
pub use user::{Theme, UserConfig};

/// Errors from building a grid configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("theme has no `grid` configuration")]
    MissingGridConfig,
    #[error("breakpoint order is empty")]
    EmptyBreakpointOrder,
    #[error("invalid grid configuration: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
