//! Core tip types.
//!
//! This module contains the plain data the selectors read:
//! - Tip identifiers and guides (ordered tours of tips)
//! - User preferences (disabled flag, dismissed tips)
//! - The application state tying them together
//! - The derived associated-guide view
//!
//! Everything here is plain data with pure accessors. Nothing in this
//! module mutates shared state or performs I/O.

mod associated;
mod error;
mod guide;
mod preferences;
mod state;
mod tip;

pub use associated::AssociatedGuide;
pub use error::StateError;
pub use guide::Guide;
pub use preferences::PreferencesState;
pub use state::AppState;
pub use tip::TipId;
