//! Stylesheet assembly: media conditionals and CSS custom properties.
//!
//! - [`media`]: wraps per-breakpoint fragments in their conditional blocks
//! - [`vars`]: generates the grid, skeleton and screen-size variables

pub mod media;
pub mod vars;

pub use media::{
    media_conditional, merge_fragments, merge_media_queries, merge_media_queries_scoped,
    to_stylesheet, ROOT_SCOPE,
};
pub use vars::{generate_grid_vars, generate_screen_size_vars, generate_skeleton_vars};
