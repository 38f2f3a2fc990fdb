//! Haptic and sound cues fired by round transitions.
//!
//! Feedback is fire-and-forget: sinks never report failure back into the
//! state machine.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    /// Stroke changed.
    Tick,
    /// Score committed.
    Confirm,
    /// Rejected input.
    Error,
}

impl FeedbackKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FeedbackKind::Tick => "tick",
            FeedbackKind::Confirm => "confirm",
            FeedbackKind::Error => "error",
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait FeedbackSink {
    fn emit(&mut self, kind: FeedbackKind);
}

/// Keeps every cue in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    pub events: Vec<FeedbackKind>,
}

impl RecordingFeedback {
    pub fn last(&self) -> Option<FeedbackKind> {
        self.events.last().copied()
    }
}

impl FeedbackSink for RecordingFeedback {
    fn emit(&mut self, kind: FeedbackKind) {
        self.events.push(kind);
    }
}
