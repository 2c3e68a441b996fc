//! Ordered unread identifier set
//!
//! Identifiers are kept in the order they were flagged. Eviction under the
//! size bound drops from the front, so the most recently flagged survive
//! regardless of how old the underlying item is.

use serde::{Deserialize, Serialize};

use super::UnreadLimit;
use crate::ItemId;

/// Duplicate-free sequence of unread item identifiers, oldest flag first.
///
/// Serialized as a plain JSON array. Deserializing drops repeated entries
/// (first occurrence wins) so hand-edited or legacy state stays valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ItemId>", into = "Vec<ItemId>")]
pub struct UnreadIds(Vec<ItemId>);

impl UnreadIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `id` as the most recently flagged entry.
    ///
    /// Returns `false` and leaves the order untouched if `id` is already present.
    pub fn push(&mut self, id: ItemId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Remove `id`, returning whether it was present.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != id);
        self.0.len() != before
    }

    /// Keep only identifiers matching `keep`, returning the dropped ones in order.
    pub fn retain(&mut self, mut keep: impl FnMut(&ItemId) -> bool) -> Vec<ItemId> {
        let (kept, dropped): (Vec<ItemId>, Vec<ItemId>) = std::mem::take(&mut self.0)
            .into_iter()
            .partition(|id| keep(id));
        self.0 = kept;
        dropped
    }

    /// Keep the `limit` most recently flagged identifiers, returning the evicted ones.
    pub fn trim_to(&mut self, limit: UnreadLimit) -> Vec<ItemId> {
        let excess = self.0.len().saturating_sub(limit.value());
        self.0.drain(..excess).collect()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.0.iter().any(|existing| existing == id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[ItemId] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<ItemId> {
        self.0.clone()
    }
}

impl From<Vec<ItemId>> for UnreadIds {
    fn from(ids: Vec<ItemId>) -> Self {
        let mut set = Self::new();
        for id in ids {
            set.push(id);
        }
        set
    }
}

impl From<UnreadIds> for Vec<ItemId> {
    fn from(ids: UnreadIds) -> Self {
        ids.0
    }
}

impl FromIterator<ItemId> for UnreadIds {
    fn from_iter<I: IntoIterator<Item = ItemId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.push(id);
        }
        set
    }
}

impl<'a> IntoIterator for &'a UnreadIds {
    type Item = &'a ItemId;
    type IntoIter = std::slice::Iter<'a, ItemId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
