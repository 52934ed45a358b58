//! Tipguide: pure selectors and reducers for guided onboarding tips
//!
//! Tipguide decides which onboarding tips a UI should render. Tips can be
//! grouped into guides (ordered multi-step tours); within a guide only the
//! first tip the user has not dismissed is shown.
//!
//! # Core Concepts
//!
//! - **State**: Guides plus user preferences, held by the caller
//! - **Selectors**: Pure functions deriving visibility from state
//! - **Actions**: Values describing changes, applied by a pure reducer
//! - **Config**: JSON loading with structural validation
//!
//! # Example
//!
//! ```rust
//! use tipguide::core::{AppState, Guide, PreferencesState};
//! use tipguide::selectors::{get_associated_guide, is_tip_visible};
//!
//! let state = AppState::new()
//!     .with_guide(Guide::from_ids(["t1", "t2", "t3"]))
//!     .with_preferences(PreferencesState::new().with_dismissed(["t1"]));
//!
//! let guide = get_associated_guide(&state, "t2").unwrap();
//! assert_eq!(guide.current_tip_id.unwrap(), "t2");
//! assert_eq!(guide.next_tip_id.unwrap(), "t3");
//!
//! assert!(is_tip_visible(&state, "t2"));
//! assert!(!is_tip_visible(&state, "t3"));
//! ```

pub mod actions;
pub mod config;
pub mod core;
pub mod selectors;

// Re-export commonly used types
pub use actions::{reduce, Action};
pub use crate::core::{AppState, AssociatedGuide, Guide, PreferencesState, TipId};
pub use selectors::{are_tips_enabled, get_associated_guide, is_tip_visible};
