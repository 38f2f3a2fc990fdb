use crate::types::View;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScorecardError {
    #[error("stroke count cannot go below 0")]
    StrokeUnderflow,

    #[error("stroke count cannot exceed {0}")]
    StrokeOverflow(u32),

    #[error("failed to read saved round: {0}")]
    PersistenceRead(String),

    #[error("failed to save round: {0}")]
    PersistenceWrite(String),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("not on the scoring screen (current view: {view})")]
    NotScoring { view: View },

    #[error("round is complete: select a hole to keep scoring")]
    RoundComplete,

    #[error("invalid hole {0}: must be between 1 and 18")]
    InvalidHole(u8),

    #[error("invalid transition from {from} to {to}: {reason}")]
    InvalidTransition {
        from: String,
        to: String,
        reason: String,
    },

    #[error("a confirmation is pending: confirm or cancel it first")]
    ConfirmationPending,

    #[error("no pending decision with id {0}")]
    UnknownDecision(u64),

    #[error("media error: {0}")]
    Media(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScorecardError>;
