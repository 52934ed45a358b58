//! Pure selectors deriving tip visibility from [`AppState`].
//!
//! Selectors never fail and never mutate: unknown tips, empty guide lists
//! and empty dismissal sets all resolve to `None` or `false`.

use crate::core::{AppState, AssociatedGuide};

/// Locate the guide containing `tip_id` and compute its current and next
/// steps.
///
/// The first guide (in registration order) containing the tip is used.
/// Within it, the current step is the first tip that has not been
/// dismissed and the next step is the one directly after it.
///
/// Returns `None` when no guide contains the tip.
///
/// # Example
///
/// ```rust
/// use tipguide::core::{AppState, Guide, PreferencesState};
/// use tipguide::selectors::get_associated_guide;
///
/// let state = AppState::new()
///     .with_guide(Guide::from_ids(["t1", "t2", "t3"]))
///     .with_preferences(PreferencesState::new().with_dismissed(["t1"]));
///
/// let guide = get_associated_guide(&state, "t2").unwrap();
/// assert_eq!(guide.tip_ids.len(), 3);
/// assert_eq!(guide.current_tip_id.unwrap(), "t2");
/// assert_eq!(guide.next_tip_id.unwrap(), "t3");
///
/// assert!(get_associated_guide(&state, "unknown").is_none());
/// ```
pub fn get_associated_guide<'a>(state: &'a AppState, tip_id: &str) -> Option<AssociatedGuide<'a>> {
    let (guide_index, guide) = state.find_guide(tip_id)?;

    let current = guide.first_undismissed(&state.preferences.dismissed_tips);
    let current_tip_id = current.and_then(|index| guide.get(index));
    let next_tip_id = current.and_then(|index| guide.get(index + 1));

    tracing::trace!(
        tip_id,
        guide_index,
        current = ?current_tip_id,
        next = ?next_tip_id,
        "resolved associated guide"
    );

    Some(AssociatedGuide {
        tip_ids: guide,
        current_tip_id,
        next_tip_id,
    })
}

/// Decide whether a tip should be rendered right now.
///
/// A tip is hidden when tips are globally disabled, when it has been
/// dismissed, or when it belongs to a guide whose active step is some
/// other tip. Tips outside any guide are shown otherwise.
///
/// # Example
///
/// ```rust
/// use tipguide::core::{AppState, Guide};
/// use tipguide::selectors::is_tip_visible;
///
/// let state = AppState::new().with_guide(Guide::from_ids(["t1", "t2"]));
///
/// assert!(is_tip_visible(&state, "t1"));
/// assert!(!is_tip_visible(&state, "t2"));
/// assert!(is_tip_visible(&state, "standalone"));
/// ```
pub fn is_tip_visible(state: &AppState, tip_id: &str) -> bool {
    if state.preferences.are_tips_disabled {
        tracing::trace!(tip_id, "tip hidden: tips disabled");
        return false;
    }

    if state.preferences.is_dismissed(tip_id) {
        tracing::trace!(tip_id, "tip hidden: dismissed");
        return false;
    }

    match get_associated_guide(state, tip_id) {
        Some(guide) if !guide.is_current(tip_id) => {
            tracing::trace!(tip_id, "tip hidden: not the active guide step");
            false
        }
        _ => true,
    }
}

/// Check whether tips are globally enabled.
pub fn are_tips_enabled(state: &AppState) -> bool {
    !state.preferences.are_tips_disabled
}
