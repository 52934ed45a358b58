//! Derived view of the guide a tip belongs to.

use super::guide::Guide;
use super::tip::TipId;
use serde::Serialize;

/// The guide containing a tip, with its current and next steps.
///
/// Never stored; derived on demand by
/// [`get_associated_guide`](crate::selectors::get_associated_guide) and
/// borrowed from the state it was derived from.
///
/// `current_tip_id` is the first tip in the guide that has not been
/// dismissed. `next_tip_id` follows it directly, and is `None` when there
/// is no current tip or the current tip is the last one.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
pub struct AssociatedGuide<'a> {
    #[serde(rename = "tipIDs")]
    pub tip_ids: &'a Guide,
    #[serde(rename = "currentTipID")]
    pub current_tip_id: Option<&'a TipId>,
    #[serde(rename = "nextTipID")]
    pub next_tip_id: Option<&'a TipId>,
}

impl<'a> AssociatedGuide<'a> {
    /// Check whether `tip_id` is the guide's active step.
    pub fn is_current(&self, tip_id: &str) -> bool {
        self.current_tip_id.is_some_and(|current| current == tip_id)
    }

    /// True once every tip in the guide has been dismissed.
    pub fn is_complete(&self) -> bool {
        self.current_tip_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_original_key_names() {
        let guide = Guide::from_ids(["a", "b"]);
        let associated = AssociatedGuide {
            tip_ids: &guide,
            current_tip_id: guide.get(1),
            next_tip_id: None,
        };

        let value = serde_json::to_value(associated).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "tipIDs": ["a", "b"],
                "currentTipID": "b",
                "nextTipID": null,
            })
        );
    }

    #[test]
    fn is_current_matches_only_active_step() {
        let guide = Guide::from_ids(["a", "b"]);
        let associated = AssociatedGuide {
            tip_ids: &guide,
            current_tip_id: guide.get(0),
            next_tip_id: guide.get(1),
        };

        assert!(associated.is_current("a"));
        assert!(!associated.is_current("b"));
        assert!(!associated.is_complete());
    }

    #[test]
    fn complete_guide_has_no_current_step() {
        let guide = Guide::from_ids(["a"]);
        let associated = AssociatedGuide {
            tip_ids: &guide,
            current_tip_id: None,
            next_tip_id: None,
        };

        assert!(associated.is_complete());
        assert!(!associated.is_current("a"));
    }
}
