//! Review domain errors

use thiserror::Error;

/// Errors that can occur while mutating a claim under review
#[derive(Debug, Error)]
pub enum ClaimError {
    #[error("Invalid status: {0}")]
    UnknownStatus(String),

    #[error("Invalid estimate source: {0}")]
    UnknownEstimateSource(String),

    #[error("Invalid status transition from {from} to {to}")]
    InvalidStatusTransition { from: String, to: String },

    #[error("Original AI assessment already recorded for claim {0}")]
    BaselineAlreadyRecorded(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ClaimError {
    pub fn validation(message: impl Into<String>) -> Self {
        ClaimError::Validation(message.into())
    }
}
