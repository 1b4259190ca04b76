//! # breakpoint-grid
//!
//! Responsive, mobile-first CSS grid style resolution.
//!
//! A theme carries a breakpoint-keyed grid configuration (columns, gaps,
//! container widths, debug colors, skeleton variants). Components carry
//! responsive props. Resolvers combine the two into one CSS fragment (or
//! nothing) per breakpoint: values set at a smaller breakpoint persist until
//! overridden, and a breakpoint whose output equals the previous one is
//! elided.
//!
//! ## Core Systems
//!
//! - **[`screen`]**: breakpoint tables, mobile-first screen merging, the
//!   active-breakpoint observer
//! - **[`props`]**: `Responsive<T>` prop values and attribute-string parsing
//! - **[`config`]**: theme config merging and the cached config resolver
//! - **[`calc`]**: the per-property resolvers
//! - **[`css`]**: media conditionals, fragment merging, CSS variables
//! - **[`components`]**: `Col`, `Row`, `Container`, `Spacer`, `Skeleton`,
//!   `ScreenBadge`, `ResponsiveText`
//! - **[`skeleton`]**: skeleton group registry for staggered animation
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use breakpoint_grid::components::{Col, Component};
//! use breakpoint_grid::config::{ConfigResolver, Theme};
//! use breakpoint_grid::calc::SizeValue;
//!
//! let theme = Rc::new(Theme::from_json(r#"{ "grid": { "columns": 12 } }"#).unwrap());
//! let resolver = ConfigResolver::new();
//! let config = resolver.get_internal_config(&theme).unwrap();
//!
//! let css = Col::new().with_sizes(SizeValue::Span(6)).stylesheet(&config);
//! let width = "calc(100% / 12 * clamp(1, 6, 12) - var(--column-gap, 0px) \
//!              + var(--column-gap, 0px) * clamp(1, 6, 12) / 12)";
//! assert_eq!(
//!     css,
//!     format!(".col {{ flex: 0 0 {width}; max-width: {width}; flex-direction: column; flex-wrap: nowrap; }}")
//! );
//! ```

// Foundation
pub mod props;
pub mod screen;

// Configuration
pub mod config;

// Style resolution
pub mod calc;
pub mod css;

// Components
pub mod components;
pub mod skeleton;

// Proc macros (feature-gated)
#[cfg(feature = "macros")]
pub use breakpoint_grid_macros::responsive;
