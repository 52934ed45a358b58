//! State validation errors.

use super::tip::TipId;
use thiserror::Error;

/// Problems found by [`AppState::validate`](super::AppState::validate).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateError {
    #[error("Guide {index} has no tips")]
    EmptyGuide { index: usize },

    #[error("Tip {tip_id} appears more than once in guide {guide}")]
    DuplicateTipInGuide { tip_id: TipId, guide: usize },

    #[error("Tip {tip_id} appears in guide {first} and guide {second}")]
    TipInMultipleGuides {
        tip_id: TipId,
        first: usize,
        second: usize,
    },
}
