//! Tip identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Identifier of a single onboarding tip.
///
/// Tip IDs are opaque strings such as `"core/editor.inserter"`. The type
/// borrows as `&str`, so sets keyed by `TipId` can be queried with a plain
/// string slice.
///
/// # Example
///
/// ```rust
/// use std::collections::HashSet;
/// use tipguide::core::TipId;
///
/// let mut dismissed = HashSet::new();
/// dismissed.insert(TipId::from("test/tip-1"));
///
/// assert!(dismissed.contains("test/tip-1"));
/// assert_eq!(TipId::from("test/tip-1").as_str(), "test/tip-1");
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TipId(String);

impl TipId {
    /// Create a tip ID from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TipId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for TipId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for TipId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TipId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for TipId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TipId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn tip_id_compares_with_str() {
        let id = TipId::from("test/tip");
        assert_eq!(id, "test/tip");
        assert_eq!(&id, "test/tip");
    }

    #[test]
    fn set_lookup_by_str() {
        let set: HashSet<TipId> = ["a", "b"].into_iter().map(TipId::from).collect();
        assert!(set.contains("a"));
        assert!(!set.contains("c"));
    }

    #[test]
    fn tip_id_serializes_as_plain_string() {
        let id = TipId::new("test/tip-α");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"test/tip-α\"");

        let back: TipId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn display_matches_inner_string() {
        assert_eq!(TipId::new("x/y").to_string(), "x/y");
    }
}
