//! Local-only favorite marks keyed by contact identifier.

use std::collections::HashSet;

use crate::types::ContactId;

/// Set of favorited contact identifiers.
///
/// Never sent to the remote service and never persisted; it lives exactly as
/// long as the `ContactBook` mount that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: HashSet<ContactId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` was not already a favorite.
    pub fn add(&mut self, id: ContactId) -> bool {
        self.ids.insert(id)
    }

    /// Returns `true` if `id` was a favorite.
    pub fn remove(&mut self, id: &ContactId) -> bool {
        self.ids.remove(id)
    }

    pub fn contains(&self, id: &ContactId) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership of `id` and return whether it is now a favorite.
    pub fn toggle(&mut self, id: &ContactId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.add(id.clone())
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
