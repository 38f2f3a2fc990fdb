//! The round/hole state machine.
//!
//! Every operation that needs the player's consent returns
//! [`Transition::Pending`] with a [`PendingDecision`]. The decision holds the
//! round exclusively until it is resolved with [`RoundController::confirm`] or
//! [`RoundController::cancel`]; any other mutating call in the meantime fails
//! with [`ScorecardError::ConfirmationPending`].
//!
//! The state is saved after every mutation. Storage failures never roll back
//! the in-memory round; they are queued as [`Notice`]s for the UI to show.

use crate::error::{Result, ScorecardError};
use crate::feedback::{FeedbackKind, FeedbackSink};
use crate::media::{Gallery, ImagePicker, ViewExporter};
use crate::round::RoundState;
use crate::snapshot::Snapshot;
use crate::store::SnapshotStore;
use crate::types::{HoleScore, View, FINISHED_HOLE, HOLE_COUNT, MAX_STROKES};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Supporting types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResetStep {
    First,
    Final,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecisionKind {
    CommitAndAdvance,
    CommitInPlace,
    SwitchHole { target: u8 },
    ReturnToResults,
    Reset { step: ResetStep },
}

/// A confirmation dialog waiting for the player's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PendingDecision {
    pub id: u64,
    #[serde(flatten)]
    pub kind: DecisionKind,
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// Nothing to do; state untouched.
    Unchanged,
    Pending(PendingDecision),
}

impl Transition {
    pub fn pending(&self) -> Option<&PendingDecision> {
        match self {
            Transition::Pending(decision) => Some(decision),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    ReadFailed,
    WriteFailed,
    InvalidSnapshot,
}

/// Non-fatal problem to surface to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ---------------------------------------------------------------------------
// RoundController
// ---------------------------------------------------------------------------

pub struct RoundController<S, F> {
    state: RoundState,
    store: S,
    feedback: F,
    pending: Option<PendingDecision>,
    next_decision: u64,
    notices: Vec<Notice>,
}

impl<S: SnapshotStore, F: FeedbackSink> RoundController<S, F> {
    /// Fresh round; the store is not read.
    pub fn new(store: S, feedback: F) -> Self {
        Self {
            state: RoundState::default(),
            store,
            feedback,
            pending: None,
            next_decision: 1,
            notices: Vec::new(),
        }
    }

    /// Resume from the store. Unreadable or invalid records leave a default
    /// round and queue a notice.
    pub fn open(store: S, feedback: F) -> Self {
        let mut controller = Self::new(store, feedback);
        match controller.store.load() {
            Ok(Some(snapshot)) => match snapshot.into_state() {
                Ok(state) => controller.state = state,
                Err(e) => controller.notice(NoticeKind::InvalidSnapshot, &e),
            },
            Ok(None) => {}
            Err(e @ ScorecardError::InvalidSnapshot(_)) => {
                controller.notice(NoticeKind::InvalidSnapshot, &e)
            }
            Err(e) => controller.notice(NoticeKind::ReadFailed, &e),
        }
        controller
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn pending(&self) -> Option<&PendingDecision> {
        self.pending.as_ref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Replace the round with a decoded snapshot.
    pub fn load(&mut self, snapshot: Snapshot) -> Result<()> {
        self.ensure_idle()?;
        self.state = snapshot.into_state()?;
        self.persist();
        Ok(())
    }

    pub fn save(&self) -> Snapshot {
        Snapshot::capture(&self.state)
    }

    fn persist(&mut self) {
        let snapshot = Snapshot::capture(&self.state);
        if let Err(e) = self.store.save(&snapshot) {
            self.notice(NoticeKind::WriteFailed, &e);
        }
    }

    fn notice(&mut self, kind: NoticeKind, err: &ScorecardError) {
        warn!(?kind, error = %err, "storage notice");
        self.notices.push(Notice {
            kind,
            message: err.to_string(),
        });
    }

    // -----------------------------------------------------------------------
    // Strokes
    // -----------------------------------------------------------------------

    pub fn increment_stroke(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_scoring()?;
        let next = match self.state.current_stroke.checked_add(1) {
            Some(next) if next <= MAX_STROKES => next,
            _ => {
                self.feedback.emit(FeedbackKind::Error);
                return Err(ScorecardError::StrokeOverflow(MAX_STROKES));
            }
        };
        self.state.current_stroke = next;
        self.feedback.emit(FeedbackKind::Tick);
        self.persist();
        Ok(())
    }

    pub fn decrement_stroke(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_scoring()?;
        if self.state.current_stroke == 0 {
            self.feedback.emit(FeedbackKind::Error);
            return Err(ScorecardError::StrokeUnderflow);
        }
        self.state.current_stroke -= 1;
        self.feedback.emit(FeedbackKind::Tick);
        self.persist();
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Commits
    // -----------------------------------------------------------------------

    /// Ask to commit the current hole: advance on the frontier, update in
    /// place when revisiting a finalized hole.
    pub fn request_commit_hole(&mut self) -> Result<Transition> {
        self.ensure_idle()?;
        self.ensure_scoring()?;
        let hole = self.state.current_hole;
        let stroke = self.state.current_stroke;
        let (kind, title, message) = if self.state.at_frontier() {
            if hole as usize == HOLE_COUNT {
                (
                    DecisionKind::CommitAndAdvance,
                    "Finish round".to_string(),
                    format!("Hole {hole} score is {stroke}. Finish the round?"),
                )
            } else {
                (
                    DecisionKind::CommitAndAdvance,
                    "Next hole".to_string(),
                    format!("Hole {hole} score is {stroke}. Confirm?"),
                )
            }
        } else {
            (
                DecisionKind::CommitInPlace,
                "Update score".to_string(),
                format!("Change hole {hole} score to {stroke}?"),
            )
        };
        Ok(self.ask(kind, title, message))
    }

    pub fn commit_and_advance(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_scoring()?;
        let hole = self.state.current_hole;
        if !self.state.at_frontier() {
            return Err(ScorecardError::InvalidTransition {
                from: format!("hole {hole}"),
                to: format!("hole {}", hole + 1),
                reason: format!(
                    "hole {hole} is behind hole {}; update it in place",
                    self.state.highest_reached_hole
                ),
            });
        }
        self.write_current_score();
        if (hole as usize) < HOLE_COUNT {
            self.state.current_hole = hole + 1;
            self.state.current_stroke = self.state.score_for(hole + 1).strokes_or_zero();
        } else {
            self.state.current_hole = FINISHED_HOLE;
            self.state.current_stroke = 0;
            self.state.active_view = View::Results;
        }
        debug!(
            hole,
            watermark = self.state.highest_reached_hole,
            "hole committed"
        );
        self.feedback.emit(FeedbackKind::Confirm);
        self.persist();
        Ok(())
    }

    pub fn commit_in_place(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_scoring()?;
        self.write_current_score();
        debug!(hole = self.state.current_hole, "hole score updated");
        self.feedback.emit(FeedbackKind::Confirm);
        self.persist();
        Ok(())
    }

    fn write_current_score(&mut self) {
        let hole = self.state.current_hole;
        self.state.scores[hole as usize - 1] = HoleScore::Played(self.state.current_stroke);
        self.state.highest_reached_hole = self.state.highest_reached_hole.max(hole + 1);
    }

    // -----------------------------------------------------------------------
    // Hole navigation
    // -----------------------------------------------------------------------

    pub fn select_hole(&mut self, target: u8) -> Result<Transition> {
        self.ensure_idle()?;
        if !(1..=HOLE_COUNT as u8).contains(&target) {
            return Err(ScorecardError::InvalidHole(target));
        }
        match self.state.active_view {
            View::Results | View::Preview => {
                self.switch_to_hole(target);
                Ok(Transition::Applied)
            }
            View::Scoring if target == self.state.current_hole => Ok(Transition::Unchanged),
            View::Scoring => {
                let hole = self.state.current_hole;
                let message = if self.state.has_unsaved_stroke() {
                    format!(
                        "Move to hole {target}? The unsaved stroke count on hole {hole} will be discarded."
                    )
                } else {
                    format!("Move to hole {target}?")
                };
                Ok(self.ask(
                    DecisionKind::SwitchHole { target },
                    "Change hole".to_string(),
                    message,
                ))
            }
            View::Details => Err(ScorecardError::InvalidTransition {
                from: View::Details.to_string(),
                to: View::Scoring.to_string(),
                reason: "return to results before selecting a hole".to_string(),
            }),
        }
    }

    fn switch_to_hole(&mut self, target: u8) {
        self.state.active_view = View::Scoring;
        self.state.current_hole = target;
        self.state.current_stroke = self.state.score_for(target).strokes_or_zero();
        debug!(hole = target, "hole selected");
        self.persist();
    }

    pub fn return_to_results(&mut self) -> Result<Transition> {
        self.ensure_idle()?;
        self.ensure_scoring()?;
        if self.state.current_hole == self.state.highest_reached_hole {
            return Err(ScorecardError::InvalidTransition {
                from: View::Scoring.to_string(),
                to: View::Results.to_string(),
                reason: format!(
                    "hole {} is the next hole to play; commit it instead",
                    self.state.current_hole
                ),
            });
        }
        if self.state.has_unsaved_stroke() {
            let hole = self.state.current_hole;
            let stroke = self.state.current_stroke;
            return Ok(self.ask(
                DecisionKind::ReturnToResults,
                "Save changes".to_string(),
                format!("Save hole {hole} score as {stroke} and return to results?"),
            ));
        }
        self.state.active_view = View::Results;
        self.persist();
        Ok(Transition::Applied)
    }

    // -----------------------------------------------------------------------
    // Reset
    // -----------------------------------------------------------------------

    /// First of two confirmations before wiping the round.
    pub fn request_reset(&mut self) -> Result<Transition> {
        self.ensure_idle()?;
        Ok(self.ask(
            DecisionKind::Reset {
                step: ResetStep::First,
            },
            "Reset round".to_string(),
            "Clear all scores and start a new round?".to_string(),
        ))
    }

    fn reset(&mut self) {
        self.state = RoundState::default();
        if let Err(e) = self.store.clear() {
            self.notice(NoticeKind::WriteFailed, &e);
        }
        debug!("round reset");
    }

    // -----------------------------------------------------------------------
    // Decisions
    // -----------------------------------------------------------------------

    fn ask(&mut self, kind: DecisionKind, title: String, message: String) -> Transition {
        let decision = PendingDecision {
            id: self.next_decision,
            kind,
            title,
            message,
        };
        self.next_decision += 1;
        self.pending = Some(decision.clone());
        Transition::Pending(decision)
    }

    fn take_pending(&mut self, id: u64) -> Result<PendingDecision> {
        match self.pending.take() {
            Some(decision) if decision.id == id => Ok(decision),
            other => {
                self.pending = other;
                Err(ScorecardError::UnknownDecision(id))
            }
        }
    }

    pub fn confirm(&mut self, id: u64) -> Result<Transition> {
        let decision = self.take_pending(id)?;
        match decision.kind {
            DecisionKind::CommitAndAdvance => self.commit_and_advance()?,
            DecisionKind::CommitInPlace => self.commit_in_place()?,
            DecisionKind::SwitchHole { target } => self.switch_to_hole(target),
            DecisionKind::ReturnToResults => {
                self.commit_in_place()?;
                self.state.active_view = View::Results;
                self.persist();
            }
            DecisionKind::Reset {
                step: ResetStep::First,
            } => {
                return Ok(self.ask(
                    DecisionKind::Reset {
                        step: ResetStep::Final,
                    },
                    "Are you sure?".to_string(),
                    "Every score on this card will be deleted. This cannot be undone.".to_string(),
                ));
            }
            DecisionKind::Reset {
                step: ResetStep::Final,
            } => self.reset(),
        }
        Ok(Transition::Applied)
    }

    pub fn cancel(&mut self, id: u64) -> Result<()> {
        let decision = self.take_pending(id)?;
        debug!(kind = ?decision.kind, "decision cancelled");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Results / details / preview
    // -----------------------------------------------------------------------

    pub fn navigate(&mut self, to: View) -> Result<()> {
        self.ensure_idle()?;
        let from = self.state.active_view;
        if !from.can_navigate_to(to) {
            return Err(ScorecardError::InvalidTransition {
                from: from.to_string(),
                to: to.to_string(),
                reason: "screens are reached in order results, details, preview".to_string(),
            });
        }
        self.state.active_view = to;
        self.persist();
        Ok(())
    }

    /// Step back from details to results, or from preview to details.
    pub fn back(&mut self) -> Result<()> {
        let from = self.state.active_view;
        match from.back() {
            Some(to) => self.navigate(to),
            None => Err(ScorecardError::InvalidTransition {
                from: from.to_string(),
                to: "back".to_string(),
                reason: "no previous screen".to_string(),
            }),
        }
    }

    /// Blank text clears the memo.
    pub fn set_memo(&mut self, text: &str) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_view(View::Details)?;
        let text = text.trim();
        self.state.memo = (!text.is_empty()).then(|| text.to_string());
        self.persist();
        Ok(())
    }

    pub fn attach_photo(&mut self, picker: &mut impl ImagePicker) -> Result<Transition> {
        self.ensure_idle()?;
        self.ensure_view(View::Details)?;
        let Some(uri) = picker.pick_image()? else {
            return Ok(Transition::Unchanged);
        };
        self.state.photo = Some(uri);
        self.persist();
        Ok(Transition::Applied)
    }

    pub fn clear_photo(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.ensure_view(View::Details)?;
        self.state.photo = None;
        self.persist();
        Ok(())
    }

    /// Render the preview and save it to the gallery. Returns the image URI.
    pub fn export_preview(
        &mut self,
        exporter: &mut impl ViewExporter,
        gallery: &mut impl Gallery,
    ) -> Result<String> {
        self.ensure_idle()?;
        self.ensure_view(View::Preview)?;
        let summary = self.state.summary();
        let uri = exporter.export_view(&summary, self.state.memo.as_deref())?;
        gallery.save_to_gallery(&uri)?;
        debug!(%uri, "preview exported");
        Ok(uri)
    }

    // -----------------------------------------------------------------------
    // Preconditions
    // -----------------------------------------------------------------------

    fn ensure_idle(&self) -> Result<()> {
        if self.pending.is_some() {
            return Err(ScorecardError::ConfirmationPending);
        }
        Ok(())
    }

    fn ensure_scoring(&self) -> Result<()> {
        if self.state.active_view != View::Scoring {
            return Err(ScorecardError::NotScoring {
                view: self.state.active_view,
            });
        }
        if self.state.is_finished() {
            return Err(ScorecardError::RoundComplete);
        }
        Ok(())
    }

    fn ensure_view(&self, view: View) -> Result<()> {
        if self.state.active_view != view {
            return Err(ScorecardError::InvalidTransition {
                from: self.state.active_view.to_string(),
                to: view.to_string(),
                reason: format!("only available on the {view} screen"),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
