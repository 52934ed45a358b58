//! User preferences that affect tip visibility.

use super::tip::TipId;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{HashMap, HashSet};

/// Per-user tip preferences.
///
/// Serializes with camelCase keys. `dismissedTips` accepts either a list
/// of IDs or an object mapping IDs to `true`; entries mapped to `false`
/// are not dismissed.
///
/// # Example
///
/// ```rust
/// use tipguide::core::PreferencesState;
///
/// let prefs: PreferencesState = serde_json::from_str(
///     r#"{ "areTipsDisabled": false, "dismissedTips": { "test/tip": true } }"#,
/// ).unwrap();
///
/// assert!(prefs.is_dismissed("test/tip"));
/// assert!(!prefs.are_tips_disabled);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesState {
    /// Global switch hiding every tip
    pub are_tips_disabled: bool,
    /// Tips the user has closed
    #[serde(deserialize_with = "deserialize_dismissed")]
    pub dismissed_tips: HashSet<TipId>,
}

impl PreferencesState {
    /// Preferences with tips enabled and nothing dismissed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a tip has been dismissed.
    pub fn is_dismissed(&self, tip_id: &str) -> bool {
        self.dismissed_tips.contains(tip_id)
    }

    /// Return preferences with the given tips marked as dismissed.
    pub fn with_dismissed<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TipId>,
    {
        self.dismissed_tips.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Return preferences with the disabled flag set.
    pub fn with_tips_disabled(mut self, disabled: bool) -> Self {
        self.are_tips_disabled = disabled;
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DismissedRepr {
    List(Vec<TipId>),
    Flags(HashMap<TipId, bool>),
}

fn deserialize_dismissed<'de, D>(deserializer: D) -> Result<HashSet<TipId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match DismissedRepr::deserialize(deserializer)? {
        DismissedRepr::List(ids) => ids.into_iter().collect(),
        DismissedRepr::Flags(flags) => flags
            .into_iter()
            .filter_map(|(id, dismissed)| dismissed.then_some(id))
            .collect(),
    })
}
