//! Application state read by the tip selectors.

use super::error::StateError;
use super::guide::Guide;
use super::preferences::PreferencesState;
use super::tip::TipId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Registered guides plus user preferences.
///
/// The state is owned by the caller and only ever read by the selectors.
/// Reducers in [`crate::actions`] return a new value instead of mutating.
///
/// # Example
///
/// ```rust
/// use tipguide::core::{AppState, Guide, PreferencesState};
///
/// let state = AppState::new()
///     .with_guide(Guide::from_ids(["t1", "t2", "t3"]))
///     .with_preferences(PreferencesState::new().with_dismissed(["t1"]));
///
/// assert_eq!(state.guides.len(), 1);
/// assert!(state.preferences.is_dismissed("t1"));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    /// Guides in registration order
    pub guides: Vec<Guide>,
    pub preferences: PreferencesState,
}

impl AppState {
    /// Empty state: no guides, tips enabled, nothing dismissed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the state with a guide appended.
    pub fn with_guide(mut self, guide: Guide) -> Self {
        self.guides.push(guide);
        self
    }

    /// Return the state with its preferences replaced.
    pub fn with_preferences(mut self, preferences: PreferencesState) -> Self {
        self.preferences = preferences;
        self
    }

    /// Find the first guide containing `tip_id`, with its index.
    pub fn find_guide(&self, tip_id: &str) -> Option<(usize, &Guide)> {
        self.guides
            .iter()
            .enumerate()
            .find(|(_, guide)| guide.contains(tip_id))
    }

    /// Check the structural assumptions the selectors rely on.
    ///
    /// Guides must be non-empty, and every tip must appear at most once
    /// across all guides. Selectors do not call this; they stay total on
    /// state that fails it. Reports the first problem found.
    pub fn validate(&self) -> Result<(), StateError> {
        let mut seen: HashMap<&TipId, usize> = HashMap::new();

        for (index, guide) in self.guides.iter().enumerate() {
            if guide.is_empty() {
                return Err(StateError::EmptyGuide { index });
            }

            for tip_id in guide {
                match seen.insert(tip_id, index) {
                    None => {}
                    Some(first) if first == index => {
                        return Err(StateError::DuplicateTipInGuide {
                            tip_id: tip_id.clone(),
                            guide: index,
                        });
                    }
                    Some(first) => {
                        return Err(StateError::TipInMultipleGuides {
                            tip_id: tip_id.clone(),
                            first,
                            second: index,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_guide_returns_first_match() {
        let state = AppState::new()
            .with_guide(Guide::from_ids(["a", "b"]))
            .with_guide(Guide::from_ids(["c", "d"]));

        let (index, guide) = state.find_guide("d").unwrap();
        assert_eq!(index, 1);
        assert_eq!(guide, &Guide::from_ids(["c", "d"]));
        assert!(state.find_guide("z").is_none());
    }

    #[test]
    fn validate_accepts_disjoint_guides() {
        let state = AppState::new()
            .with_guide(Guide::from_ids(["a", "b"]))
            .with_guide(Guide::from_ids(["c"]));
        assert_eq!(state.validate(), Ok(()));
        assert_eq!(AppState::new().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_guide() {
        let state = AppState::new()
            .with_guide(Guide::from_ids(["a"]))
            .with_guide(Guide::default());
        assert_eq!(state.validate(), Err(StateError::EmptyGuide { index: 1 }));
    }

    #[test]
    fn validate_rejects_repeat_within_guide() {
        let state = AppState::new().with_guide(Guide::from_ids(["a", "b", "a"]));
        assert_eq!(
            state.validate(),
            Err(StateError::DuplicateTipInGuide {
                tip_id: TipId::from("a"),
                guide: 0,
            })
        );
    }

    #[test]
    fn validate_rejects_tip_shared_between_guides() {
        let state = AppState::new()
            .with_guide(Guide::from_ids(["a", "b"]))
            .with_guide(Guide::from_ids(["c", "b"]));
        assert_eq!(
            state.validate(),
            Err(StateError::TipInMultipleGuides {
                tip_id: TipId::from("b"),
                first: 0,
                second: 1,
            })
        );
    }

    #[test]
    fn state_round_trips_through_json() {
        let state = AppState::new()
            .with_guide(Guide::from_ids(["a", "b"]))
            .with_preferences(PreferencesState::new().with_dismissed(["a"]));

        let json = serde_json::to_string(&state).unwrap();
        let back: AppState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
