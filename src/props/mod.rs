//! Responsive prop values.
//!
//! A responsive prop is either a scalar (applies from the base breakpoint up)
//! or a sparse per-breakpoint map. Resolvers normalize both shapes once, at
//! entry, into one slot per breakpoint with [`Responsive::explicit`] or
//! [`Responsive::cascade`].
//!
//! Boolean props that can be switched on for specific breakpoints use
//! [`ResponsiveFlag`].

pub mod parse;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

use crate::screen::{Breakpoints, ScreenMap};

pub use parse::ParseError;

// ---------------------------------------------------------------------------
// Responsive<T>
// ---------------------------------------------------------------------------

/// A value that is either a scalar or a sparse per-breakpoint map.
///
/// Deserializes untagged: `3` is a scalar, `{"md": 3}` a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Responsive<T> {
    /// Applies to the base breakpoint and is inherited upward.
    Scalar(T),
    /// Explicit values for some breakpoints; keys need not cover all of them.
    PerBreakpoint(ScreenMap<T>),
}

impl<T> Responsive<T> {
    /// Build a per-breakpoint value from `(breakpoint, value)` pairs.
    pub fn per_breakpoint<K: Into<String>>(entries: impl IntoIterator<Item = (K, T)>) -> Self {
        Responsive::PerBreakpoint(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Explicitly-set value for each breakpoint, in order.
    ///
    /// A scalar occupies the first slot only. Map keys that are not
    /// breakpoints are ignored.
    pub fn explicit(&self, breakpoints: &Breakpoints) -> Vec<Option<&T>> {
        match self {
            Responsive::Scalar(value) => breakpoints
                .names()
                .enumerate()
                .map(|(index, _)| (index == 0).then_some(value))
                .collect(),
            Responsive::PerBreakpoint(map) => breakpoints.names().map(|name| map.get(name)).collect(),
        }
    }

    /// Value in effect at each breakpoint under mobile-first inheritance.
    pub fn cascade(&self, breakpoints: &Breakpoints) -> Vec<Option<&T>> {
        carry_forward(self.explicit(breakpoints))
    }

    /// The value in effect at breakpoint `name`, if any.
    pub fn at(&self, name: &str, breakpoints: &Breakpoints) -> Option<&T> {
        let index = breakpoints.index_of(name)?;
        self.cascade(breakpoints).get(index).copied().flatten()
    }

    /// Convert to a sparse map, keying a scalar by `base`.
    pub fn to_screens(&self, base: &str) -> ScreenMap<T>
    where
        T: Clone,
    {
        match self {
            Responsive::Scalar(value) => [(base.to_owned(), value.clone())].into_iter().collect(),
            Responsive::PerBreakpoint(map) => map.clone(),
        }
    }

    /// Keys of a per-breakpoint map that name no breakpoint.
    pub fn unknown_keys<'a>(&'a self, breakpoints: &Breakpoints) -> Vec<&'a str> {
        match self {
            Responsive::Scalar(_) => Vec::new(),
            Responsive::PerBreakpoint(map) => map
                .keys()
                .filter(|key| breakpoints.index_of(key).is_none())
                .map(String::as_str)
                .collect(),
        }
    }
}

impl<T> From<T> for Responsive<T> {
    fn from(value: T) -> Self {
        Responsive::Scalar(value)
    }
}

/// Cascade an optional responsive prop; an absent prop is unset everywhere.
pub fn cascade<'a, T>(value: Option<&'a Responsive<T>>, breakpoints: &Breakpoints) -> Vec<Option<&'a T>> {
    match value {
        Some(value) => value.cascade(breakpoints),
        None => vec![None; breakpoints.len()],
    }
}

/// Replace every unset slot with the closest set slot before it.
pub fn carry_forward<T: Copy>(explicit: Vec<Option<T>>) -> Vec<Option<T>> {
    explicit
        .into_iter()
        .scan(None, |last, value| {
            if value.is_some() {
                *last = value;
            }
            Some(*last)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// ResponsiveFlag
// ---------------------------------------------------------------------------

/// A boolean prop: on or off everywhere, or on exactly at the listed
/// breakpoints.
///
/// The list form is a membership test, not a cascade: `["md"]` is off again
/// at `lg`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponsiveFlag {
    All(bool),
    Only(Vec<String>),
}

impl ResponsiveFlag {
    /// Build a flag set at the given breakpoints.
    pub fn only<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        ResponsiveFlag::Only(names.into_iter().map(Into::into).collect())
    }

    /// Whether the flag is set at breakpoint `name`.
    pub fn is_set_at(&self, name: &str) -> bool {
        match self {
            ResponsiveFlag::All(on) => *on,
            ResponsiveFlag::Only(names) => names.iter().any(|n| n == name),
        }
    }

    /// Flag state for each breakpoint, in order.
    pub fn per_breakpoint(&self, breakpoints: &Breakpoints) -> Vec<bool> {
        breakpoints.names().map(|name| self.is_set_at(name)).collect()
    }
}

impl Default for ResponsiveFlag {
    fn default() -> Self {
        ResponsiveFlag::All(false)
    }
}

impl From<bool> for ResponsiveFlag {
    fn from(on: bool) -> Self {
        ResponsiveFlag::All(on)
    }
}
