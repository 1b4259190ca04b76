//! Skeleton group registry.
//!
//! Skeletons sharing a group stagger their shimmer: each one's animation
//! delay is the variant delay times the number of placeholders registered
//! before it. Components register on mount, unregister on unmount, and read
//! offsets through [`SkeletonStore::offset_of`] or a subscription.

use std::collections::BTreeMap;
use std::fmt;

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Handle returned by [`SkeletonStore::subscribe`].
    pub struct SubscriberId;
}

/// One mounted skeleton: its id and how many placeholders it draws.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub id: String,
    pub count: usize,
}

/// Registrations per group, in mount order.
pub type SkeletonGroups = BTreeMap<String, Vec<Registration>>;

type Subscriber = Box<dyn FnMut(&SkeletonGroups)>;

#[derive(Default)]
pub struct SkeletonStore {
    groups: SkeletonGroups,
    subscribers: SlotMap<SubscriberId, Subscriber>,
}

impl SkeletonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id` in `group`. Re-registering an id updates its count in
    /// place.
    pub fn register(&mut self, group: &str, id: &str, count: usize) {
        let entries = self.groups.entry(group.to_owned()).or_default();
        match entries.iter_mut().find(|r| r.id == id) {
            Some(existing) => existing.count = count,
            None => entries.push(Registration {
                id: id.to_owned(),
                count,
            }),
        }
        tracing::trace!(group, id, count, "skeleton registered");
        self.notify();
    }

    /// Remove `id` from `group`. Returns `true` if it was registered.
    ///
    /// A group left empty is dropped.
    pub fn unregister(&mut self, group: &str, id: &str) -> bool {
        let Some(entries) = self.groups.get_mut(group) else {
            return false;
        };
        let before = entries.len();
        entries.retain(|r| r.id != id);
        let removed = entries.len() != before;
        if entries.is_empty() {
            self.groups.remove(group);
        }
        if removed {
            tracing::trace!(group, id, "skeleton unregistered");
            self.notify();
        }
        removed
    }

    /// Registrations of `group`, in mount order.
    pub fn get(&self, group: &str) -> &[Registration] {
        self.groups.get(group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// All groups.
    pub fn snapshot(&self) -> &SkeletonGroups {
        &self.groups
    }

    /// Placeholders registered in `group` before `id`.
    ///
    /// An unknown id counts everything in the group.
    pub fn offset_of(&self, group: &str, id: &str) -> usize {
        self.get(group)
            .iter()
            .take_while(|r| r.id != id)
            .map(|r| r.count)
            .sum()
    }

    /// Call `subscriber` with the current groups after every change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&SkeletonGroups) + 'static) -> SubscriberId {
        self.subscribers.insert(Box::new(subscriber))
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.subscribers.remove(id).is_some()
    }

    fn notify(&mut self) {
        for subscriber in self.subscribers.values_mut() {
            subscriber(&self.groups);
        }
    }
}

impl fmt::Debug for SkeletonStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkeletonStore")
            .field("groups", &self.groups)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
