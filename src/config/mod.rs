//! Loading guides and preferences from JSON.
//!
//! Loaded state is validated with [`AppState::validate`] before it is
//! handed back, so a tip shared between guides is reported at load time
//! rather than silently resolved to the first guide.

use crate::core::AppState;
use std::io::Read;

pub mod error;

pub use error::ConfigError;

/// Parse and validate state from a JSON string.
///
/// # Example
///
/// ```rust
/// use tipguide::config::load_from_str;
/// use tipguide::selectors::is_tip_visible;
///
/// let state = load_from_str(r#"{
///     "guides": [["test/tip-1", "test/tip-2"]],
///     "preferences": { "dismissedTips": { "test/tip-1": true } }
/// }"#).unwrap();
///
/// assert!(is_tip_visible(&state, "test/tip-2"));
/// ```
pub fn load_from_str(json: &str) -> Result<AppState, ConfigError> {
    let state: AppState = serde_json::from_str(json)?;
    validated(state)
}

/// Parse and validate state from a reader.
pub fn load_from_reader<R: Read>(reader: R) -> Result<AppState, ConfigError> {
    let state: AppState = serde_json::from_reader(reader)?;
    validated(state)
}

fn validated(state: AppState) -> Result<AppState, ConfigError> {
    if let Err(err) = state.validate() {
        tracing::warn!(error = %err, "rejecting loaded tip state");
        return Err(err.into());
    }

    tracing::debug!(
        guides = state.guides.len(),
        dismissed = state.preferences.dismissed_tips.len(),
        disabled = state.preferences.are_tips_disabled,
        "loaded tip state"
    );
    Ok(state)
}
