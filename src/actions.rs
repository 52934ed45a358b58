//! Actions and the pure reducer that applies them to [`AppState`].
//!
//! The reducer never mutates its input. Each call returns a new state,
//! leaving the previous one available for comparison or undo.

use crate::core::{AppState, Guide, TipId};
use serde::{Deserialize, Serialize};

/// A single change to tip state.
///
/// Serializes as `{"type": "DISMISS_TIP", "tipId": "..."}` and friends.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Register a guide. Equal guides are only registered once.
    TriggerGuide {
        #[serde(rename = "tipIds")]
        tip_ids: Guide,
    },
    /// Mark a tip as dismissed.
    DismissTip {
        #[serde(rename = "tipId")]
        tip_id: TipId,
    },
    /// Hide every tip.
    DisableTips,
    /// Show tips again, forgetting every dismissal.
    EnableTips,
}

impl Action {
    /// Action name as it appears in serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TriggerGuide { .. } => "TRIGGER_GUIDE",
            Self::DismissTip { .. } => "DISMISS_TIP",
            Self::DisableTips => "DISABLE_TIPS",
            Self::EnableTips => "ENABLE_TIPS",
        }
    }

    pub fn trigger_guide<I, T>(tip_ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<TipId>,
    {
        Self::TriggerGuide {
            tip_ids: Guide::from_ids(tip_ids),
        }
    }

    pub fn dismiss_tip(tip_id: impl Into<TipId>) -> Self {
        Self::DismissTip {
            tip_id: tip_id.into(),
        }
    }
}

/// Apply an action, returning the resulting state.
///
/// # Example
///
/// ```rust
/// use tipguide::actions::{reduce, Action};
/// use tipguide::core::AppState;
/// use tipguide::selectors::is_tip_visible;
///
/// let state = reduce(&AppState::new(), Action::trigger_guide(["t1", "t2"]));
/// assert!(is_tip_visible(&state, "t1"));
///
/// let next = reduce(&state, Action::dismiss_tip("t1"));
/// assert!(is_tip_visible(&next, "t2"));
/// assert!(is_tip_visible(&state, "t1")); // Original unchanged
/// ```
pub fn reduce(state: &AppState, action: Action) -> AppState {
    tracing::debug!(action = action.name(), "reducing tip action");

    let mut next = state.clone();
    match action {
        Action::TriggerGuide { tip_ids } => {
            if tip_ids.is_empty() {
                tracing::debug!("ignoring empty guide");
            } else if !next.guides.contains(&tip_ids) {
                next.guides.push(tip_ids);
            }
        }
        Action::DismissTip { tip_id } => {
            next.preferences.dismissed_tips.insert(tip_id);
        }
        Action::DisableTips => {
            next.preferences.are_tips_disabled = true;
        }
        Action::EnableTips => {
            next.preferences.are_tips_disabled = false;
            next.preferences.dismissed_tips.clear();
        }
    }
    next
}

/// Apply actions in order, returning the final state.
pub fn reduce_all<I>(state: &AppState, actions: I) -> AppState
where
    I: IntoIterator<Item = Action>,
{
    actions
        .into_iter()
        .fold(state.clone(), |acc, action| reduce(&acc, action))
}

impl AppState {
    /// Method form of [`reduce`].
    pub fn apply(&self, action: Action) -> AppState {
        reduce(self, action)
    }
}
