//! Guides: ordered multi-step tours of tips.

use super::tip::TipId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Ordered sequence of tip IDs forming a multi-step tour.
///
/// Guides are immutable once built. They serialize as a plain JSON array
/// of strings.
///
/// # Example
///
/// ```rust
/// use tipguide::core::Guide;
///
/// let guide = Guide::from_ids(["test/tip-1", "test/tip-2", "test/tip-3"]);
///
/// assert_eq!(guide.len(), 3);
/// assert!(guide.contains("test/tip-2"));
/// assert_eq!(guide.position("test/tip-3"), Some(2));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Guide {
    tip_ids: Vec<TipId>,
}

impl Guide {
    /// Create a guide from tip IDs, keeping their order.
    pub fn new(tip_ids: Vec<TipId>) -> Self {
        Self { tip_ids }
    }

    /// Create a guide from anything convertible into tip IDs.
    pub fn from_ids<I, T>(ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TipId>,
    {
        Self {
            tip_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// All tips in tour order.
    pub fn tip_ids(&self) -> &[TipId] {
        &self.tip_ids
    }

    pub fn len(&self) -> usize {
        self.tip_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tip_ids.is_empty()
    }

    /// Check whether the guide contains the given tip.
    pub fn contains(&self, tip_id: &str) -> bool {
        self.tip_ids.iter().any(|id| id == tip_id)
    }

    /// Index of the first occurrence of a tip.
    pub fn position(&self, tip_id: &str) -> Option<usize> {
        self.tip_ids.iter().position(|id| id == tip_id)
    }

    /// Index of the first tip that has not been dismissed.
    ///
    /// Returns `None` when every tip in the guide is dismissed, or the
    /// guide is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::HashSet;
    /// use tipguide::core::{Guide, TipId};
    ///
    /// let guide = Guide::from_ids(["a", "b", "c"]);
    /// let dismissed: HashSet<TipId> = [TipId::from("a")].into_iter().collect();
    ///
    /// assert_eq!(guide.first_undismissed(&dismissed), Some(1));
    /// ```
    pub fn first_undismissed(&self, dismissed: &HashSet<TipId>) -> Option<usize> {
        self.tip_ids.iter().position(|id| !dismissed.contains(id))
    }

    /// Tip at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&TipId> {
        self.tip_ids.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TipId> {
        self.tip_ids.iter()
    }
}

impl From<Vec<TipId>> for Guide {
    fn from(tip_ids: Vec<TipId>) -> Self {
        Self::new(tip_ids)
    }
}

impl<'a> IntoIterator for &'a Guide {
    type Item = &'a TipId;
    type IntoIter = std::slice::Iter<'a, TipId>;

    fn into_iter(self) -> Self::IntoIter {
        self.tip_ids.iter()
    }
}
