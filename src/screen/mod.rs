//! Breakpoint model: ordered, named viewport-width thresholds.
//!
//! Every other module indexes by breakpoint position. A [`Breakpoints`] table
//! is dense (one entry per breakpoint, in ascending order); sparse
//! per-breakpoint data lives in [`ScreenMap`]s and is canonicalized with
//! [`merge::merge_screens`].

pub mod merge;
pub mod observer;

use std::collections::BTreeMap;

pub use merge::{fill_screens, merge_screens};
pub use observer::{ListenerId, ScreenObserver};

/// A sparse mapping from breakpoint name to value.
pub type ScreenMap<T> = BTreeMap<String, T>;

/// Breakpoint names in ascending order, as shipped by default.
pub const DEFAULT_BREAKPOINT_ORDER: [&str; 6] = ["xs", "sm", "md", "lg", "xl", "xxl"];

/// Default minimum widths (px) for [`DEFAULT_BREAKPOINT_ORDER`].
pub const DEFAULT_BREAKPOINT_WIDTHS: [i32; 6] = [0, 576, 768, 992, 1200, 1400];

// ---------------------------------------------------------------------------
// Breakpoints
// ---------------------------------------------------------------------------

/// A single breakpoint: a name and its minimum width in pixels.
///
/// A negative width is the "no constraint" sentinel: media conditionals for it
/// carry no `min-width` expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    pub name: String,
    pub min_width: i32,
}

/// The ordered breakpoint table.
///
/// Order comes from configuration, never from sorting names or widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoints {
    entries: Vec<Breakpoint>,
}

impl Breakpoints {
    /// Build a dense table from an order and a sparse width map.
    ///
    /// Breakpoints missing from `widths` inherit the width of the previous
    /// breakpoint (the first one falls back to `0`).
    pub fn from_screens<S: AsRef<str>>(order: &[S], widths: &ScreenMap<i32>) -> Self {
        let dense = fill_screens(widths, order);
        let entries = order
            .iter()
            .zip(dense)
            .map(|(name, min_width)| Breakpoint {
                name: name.as_ref().to_owned(),
                min_width,
            })
            .collect();
        Self { entries }
    }

    /// Build a table from `(name, min_width)` pairs, already in order.
    pub fn from_pairs<S: Into<String>>(pairs: impl IntoIterator<Item = (S, i32)>) -> Self {
        Self {
            entries: pairs
                .into_iter()
                .map(|(name, min_width)| Breakpoint {
                    name: name.into(),
                    min_width,
                })
                .collect(),
        }
    }

    /// Number of breakpoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no breakpoints.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the breakpoints in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.entries.iter()
    }

    /// Iterate over breakpoint names in ascending order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|bp| bp.name.as_str())
    }

    /// Breakpoint at position `index`.
    pub fn get(&self, index: usize) -> Option<&Breakpoint> {
        self.entries.get(index)
    }

    /// Position of the breakpoint called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|bp| bp.name == name)
    }

    /// The base (smallest) breakpoint name.
    pub fn first(&self) -> Option<&str> {
        self.entries.first().map(|bp| bp.name.as_str())
    }

    /// The largest breakpoint name.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(|bp| bp.name.as_str())
    }

    /// The breakpoint in effect for a viewport `width`.
    ///
    /// This is the largest breakpoint whose minimum width is `<= width`. An
    /// unknown width (no viewport, e.g. server-side) resolves to the largest
    /// breakpoint; a width below every threshold resolves to the first one.
    pub fn breakpoint_for_width(&self, width: Option<u32>) -> Option<&str> {
        let Some(width) = width else {
            return self.last();
        };
        let width = i64::from(width);
        self.entries
            .iter()
            .rev()
            .find(|bp| i64::from(bp.min_width) <= width)
            .or_else(|| self.entries.first())
            .map(|bp| bp.name.as_str())
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::from_pairs(
            DEFAULT_BREAKPOINT_ORDER
                .iter()
                .copied()
                .zip(DEFAULT_BREAKPOINT_WIDTHS),
        )
    }
}

/// The default breakpoint order as owned strings.
pub fn default_order() -> Vec<String> {
    DEFAULT_BREAKPOINT_ORDER.iter().map(|s| s.to_string()).collect()
}
