use crate::types::{HoleScore, View, FINISHED_HOLE, HOLE_COUNT};
use serde::Serialize;

// ---------------------------------------------------------------------------
// RoundState
// ---------------------------------------------------------------------------

/// Everything the scoring screen needs to render and resume a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    pub current_hole: u8,
    pub current_stroke: u32,
    pub scores: [HoleScore; HOLE_COUNT],
    /// Farthest hole reached; holes below it are finalized.
    pub highest_reached_hole: u8,
    pub active_view: View,
    pub memo: Option<String>,
    pub photo: Option<String>,
}

impl Default for RoundState {
    fn default() -> Self {
        Self {
            current_hole: 1,
            current_stroke: 0,
            scores: [HoleScore::Unplayed; HOLE_COUNT],
            highest_reached_hole: 1,
            active_view: View::Scoring,
            memo: None,
            photo: None,
        }
    }
}

impl RoundState {
    pub fn is_finished(&self) -> bool {
        self.current_hole == FINISHED_HOLE
    }

    /// Stored score for a 1-based hole number. Out-of-range holes read as unplayed.
    pub fn score_for(&self, hole: u8) -> HoleScore {
        hole.checked_sub(1)
            .and_then(|i| self.scores.get(i as usize))
            .copied()
            .unwrap_or_default()
    }

    /// `true` when the current hole is at or past the watermark.
    pub fn at_frontier(&self) -> bool {
        self.current_hole >= self.highest_reached_hole
    }

    /// `true` when the in-progress stroke differs from what is stored for the hole.
    pub fn has_unsaved_stroke(&self) -> bool {
        self.current_stroke != self.score_for(self.current_hole).strokes_or_zero()
    }

    pub fn summary(&self) -> RoundSummary {
        RoundSummary::from_scores(&self.scores)
    }
}

// ---------------------------------------------------------------------------
// RoundSummary
// ---------------------------------------------------------------------------

/// Totals shown on the results and preview screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSummary {
    pub scores: Vec<HoleScore>,
    pub holes_played: usize,
    /// Holes 1-9.
    pub out: u32,
    /// Holes 10-18.
    #[serde(rename = "in")]
    pub inward: u32,
    pub total: u32,
}

impl RoundSummary {
    pub fn from_scores(scores: &[HoleScore]) -> Self {
        let sum = |holes: &[HoleScore]| {
            holes
                .iter()
                .filter_map(|s| s.strokes())
                .fold(0u32, u32::saturating_add)
        };
        let half = scores.len().min(HOLE_COUNT / 2);
        let out = sum(&scores[..half]);
        let inward = sum(&scores[half..]);
        Self {
            scores: scores.to_vec(),
            holes_played: scores.iter().filter(|s| s.is_played()).count(),
            out,
            inward,
            total: out.saturating_add(inward),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_starts_on_hole_one() {
        let state = RoundState::default();
        assert_eq!(state.current_hole, 1);
        assert_eq!(state.current_stroke, 0);
        assert_eq!(state.highest_reached_hole, 1);
        assert_eq!(state.active_view, View::Scoring);
        assert!(state.scores.iter().all(|s| !s.is_played()));
        assert!(state.at_frontier());
    }

    #[test]
    fn score_for_out_of_range_is_unplayed() {
        let state = RoundState::default();
        assert_eq!(state.score_for(0), HoleScore::Unplayed);
        assert_eq!(state.score_for(FINISHED_HOLE), HoleScore::Unplayed);
    }

    #[test]
    fn unsaved_stroke_treats_unplayed_as_zero() {
        let mut state = RoundState::default();
        assert!(!state.has_unsaved_stroke());
        state.current_stroke = 2;
        assert!(state.has_unsaved_stroke());
        state.scores[0] = HoleScore::Played(2);
        assert!(!state.has_unsaved_stroke());
    }

    #[test]
    fn summary_splits_out_and_in() {
        let mut scores = [HoleScore::Unplayed; HOLE_COUNT];
        scores[0] = HoleScore::Played(4);
        scores[8] = HoleScore::Played(5);
        scores[9] = HoleScore::Played(3);
        let summary = RoundSummary::from_scores(&scores);
        assert_eq!(summary.out, 9);
        assert_eq!(summary.inward, 3);
        assert_eq!(summary.total, 12);
        assert_eq!(summary.holes_played, 3);
    }

    #[test]
    fn summary_saturates_instead_of_overflowing() {
        let scores = [HoleScore::Played(u32::MAX); HOLE_COUNT];
        let summary = RoundSummary::from_scores(&scores);
        assert_eq!(summary.out, u32::MAX);
        assert_eq!(summary.total, u32::MAX);
    }
}
