//! Reactive breakpoint observer.
//!
//! The host forwards viewport-size changes to a single [`ScreenObserver`]
//! (one resize subscription per application); the observer maps the width to
//! a breakpoint and fans the change out to every registered listener.

use std::fmt;

use slotmap::{new_key_type, SlotMap};

use super::Breakpoints;
use crate::config::ScreenTable;

new_key_type! {
    /// Handle returned by [`ScreenObserver::subscribe`].
    pub struct ListenerId;
}

type Listener = Box<dyn FnMut(&str)>;

/// Tracks the active breakpoint for the current viewport width.
pub struct ScreenObserver {
    breakpoints: Breakpoints,
    width: Option<u32>,
    current: Option<String>,
    listeners: SlotMap<ListenerId, Listener>,
}

impl ScreenObserver {
    /// Create an observer over `breakpoints` with an unknown viewport width.
    ///
    /// Until the first [`resize`](Self::resize) the active breakpoint is the
    /// largest one.
    pub fn new(breakpoints: Breakpoints) -> Self {
        let current = breakpoints.breakpoint_for_width(None).map(str::to_owned);
        Self {
            breakpoints,
            width: None,
            current,
            listeners: SlotMap::with_key(),
        }
    }

    /// Create an observer from the breakpoint table published by config
    /// creation.
    pub fn from_table(table: &ScreenTable) -> Self {
        Self::new(Breakpoints::from_screens(
            &table.breakpoint_order,
            &table.breakpoints,
        ))
    }

    /// The breakpoint table this observer maps widths against.
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// The active breakpoint name (`None` only for an empty table).
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// The last viewport width reported through [`resize`](Self::resize).
    pub fn viewport_width(&self) -> Option<u32> {
        self.width
    }

    /// Register a listener called with the new breakpoint name on every
    /// breakpoint change.
    pub fn subscribe(&mut self, listener: impl FnMut(&str) + 'static) -> ListenerId {
        self.listeners.insert(Box::new(listener))
    }

    /// Remove a listener. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id).is_some()
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Report a new viewport width (`None` when it cannot be measured).
    ///
    /// Listeners are notified only when the active breakpoint changes.
    /// Returns `true` if it did.
    pub fn resize(&mut self, width: Option<u32>) -> bool {
        self.width = width;
        let next = self.breakpoints.breakpoint_for_width(width).map(str::to_owned);
        if next == self.current {
            return false;
        }

        tracing::debug!(
            from = self.current.as_deref().unwrap_or("-"),
            to = next.as_deref().unwrap_or("-"),
            width = ?width,
            "active breakpoint changed"
        );
        self.current = next;

        if let Some(name) = self.current.as_deref() {
            for listener in self.listeners.values_mut() {
                listener(name);
            }
        }
        true
    }
}

impl fmt::Debug for ScreenObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenObserver")
            .field("breakpoints", &self.breakpoints)
            .field("width", &self.width)
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
