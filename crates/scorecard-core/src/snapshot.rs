//! Persisted form of a [`RoundState`].
//!
//! The record keeps the `saved*` field names used by earlier score card files.
//! Fields added by later app revisions are optional so that older records
//! still load:
//!
//! - no `savedHighestReachedHole` → watermark 1 (19 for a finished round),
//!   and `0` scores decode as unplayed (that revision pre-filled every hole
//!   with `0`);
//! - no `savedView` → `results` if `savedRoundFinished` is set, else `scoring`.

use crate::error::{Result, ScorecardError};
use crate::round::RoundState;
use crate::types::{HoleScore, View, FINISHED_HOLE, HOLE_COUNT, MAX_STROKES};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub saved_hole: u8,
    pub saved_stroke: u32,
    pub saved_scores: Vec<HoleScore>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_highest_reached_hole: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_view: Option<View>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_round_finished: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_memo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_photo_uri: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn capture(state: &RoundState) -> Self {
        Self {
            saved_hole: state.current_hole,
            saved_stroke: state.current_stroke,
            saved_scores: state.scores.to_vec(),
            saved_highest_reached_hole: Some(state.highest_reached_hole),
            saved_view: Some(state.active_view),
            saved_round_finished: Some(state.is_finished()),
            saved_memo: state.memo.clone(),
            saved_photo_uri: state.photo.clone(),
            saved_at: Some(Utc::now()),
        }
    }

    pub fn from_json(data: &str) -> Result<Self> {
        serde_json::from_str(data).map_err(|e| ScorecardError::InvalidSnapshot(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate and convert into a live round.
    pub fn into_state(self) -> Result<RoundState> {
        let invalid = |msg: String| Err(ScorecardError::InvalidSnapshot(msg));

        if !(1..=FINISHED_HOLE).contains(&self.saved_hole) {
            return invalid(format!("hole {} out of range", self.saved_hole));
        }
        let scores: [HoleScore; HOLE_COUNT] = match self.saved_scores.try_into() {
            Ok(scores) => scores,
            Err(v) => return invalid(format!("expected {HOLE_COUNT} scores, got {}", v.len())),
        };

        let legacy = self.saved_highest_reached_hole.is_none();
        let highest_reached_hole = match self.saved_highest_reached_hole {
            Some(hole) => hole,
            None if self.saved_hole == FINISHED_HOLE => FINISHED_HOLE,
            None => 1,
        };
        if !(1..=FINISHED_HOLE).contains(&highest_reached_hole) {
            return invalid(format!("watermark {highest_reached_hole} out of range"));
        }
        if self.saved_stroke > MAX_STROKES {
            return invalid(format!("stroke {} exceeds {MAX_STROKES}", self.saved_stroke));
        }
        if let Some((i, n)) = scores
            .iter()
            .enumerate()
            .find_map(|(i, s)| s.strokes().filter(|&n| n > MAX_STROKES).map(|n| (i, n)))
        {
            return invalid(format!("hole {} score {n} exceeds {MAX_STROKES}", i + 1));
        }
        if !legacy {
            if let Some(i) = scores[highest_reached_hole as usize - 1..]
                .iter()
                .position(|s| s.is_played())
            {
                return invalid(format!(
                    "hole {} is scored beyond watermark {highest_reached_hole}",
                    highest_reached_hole as usize + i
                ));
            }
        }
        if self.saved_hole == FINISHED_HOLE && highest_reached_hole != FINISHED_HOLE {
            return invalid(format!("finished round with watermark {highest_reached_hole}"));
        }

        let scores = if legacy {
            scores.map(|s| match s {
                HoleScore::Played(0) => HoleScore::Unplayed,
                other => other,
            })
        } else {
            scores
        };

        let active_view = match (self.saved_view, self.saved_round_finished) {
            (Some(view), _) => view,
            (None, Some(true)) => View::Results,
            (None, _) => View::Scoring,
        };
        if self.saved_hole == FINISHED_HOLE && active_view == View::Scoring {
            return invalid("finished round cannot be on the scoring view".to_string());
        }

        let current_stroke = if self.saved_hole == FINISHED_HOLE {
            0
        } else {
            self.saved_stroke
        };

        Ok(RoundState {
            current_hole: self.saved_hole,
            current_stroke,
            scores,
            highest_reached_hole,
            active_view,
            memo: self.saved_memo.filter(|m| !m.trim().is_empty()),
            photo: self.saved_photo_uri,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_and_restore_is_identity() {
        let mut state = RoundState::default();
        state.current_hole = 6;
        state.current_stroke = 3;
        state.highest_reached_hole = 8;
        for i in 0..7 {
            state.scores[i] = HoleScore::Played(4 + i as u32 % 2);
        }
        state.memo = Some("windy back nine".to_string());
        state.photo = Some("file:///tmp/card.jpg".to_string());

        let json = Snapshot::capture(&state).to_json().unwrap();
        let restored = Snapshot::from_json(&json).unwrap().into_state().unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn legacy_snapshot_defaults_watermark_and_view() {
        let json = r#"{
            "savedHole": 3,
            "savedStroke": 2,
            "savedScores": [5,4,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0]
        }"#;
        let state = Snapshot::from_json(json).unwrap().into_state().unwrap();
        assert_eq!(state.current_hole, 3);
        assert_eq!(state.current_stroke, 2);
        assert_eq!(state.highest_reached_hole, 1);
        assert_eq!(state.active_view, View::Scoring);
        assert_eq!(state.scores[0], HoleScore::Played(5));
        assert_eq!(state.scores[2], HoleScore::Unplayed);
    }

    #[test]
    fn round_finished_flag_maps_to_results() {
        let json = r#"{
            "savedHole": 19,
            "savedStroke": 0,
            "savedScores": [4,4,4,4,4,4,4,4,4,4,4,4,4,4,4,4,4,4],
            "savedHighestReachedHole": 19,
            "savedRoundFinished": true
        }"#;
        let state = Snapshot::from_json(json).unwrap().into_state().unwrap();
        assert_eq!(state.active_view, View::Results);
        assert!(state.is_finished());
    }

    #[test]
    fn wrong_score_count_is_invalid() {
        let json = r#"{"savedHole": 1, "savedStroke": 0, "savedScores": [null, null]}"#;
        let err = Snapshot::from_json(json).unwrap().into_state().unwrap_err();
        assert!(matches!(err, ScorecardError::InvalidSnapshot(_)));
    }

    #[test]
    fn out_of_range_hole_is_invalid() {
        let mut snap = Snapshot::capture(&RoundState::default());
        snap.saved_hole = 20;
        assert!(matches!(
            snap.into_state(),
            Err(ScorecardError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn finished_hole_on_scoring_view_is_invalid() {
        let mut snap = Snapshot::capture(&RoundState::default());
        snap.saved_hole = FINISHED_HOLE;
        snap.saved_highest_reached_hole = Some(FINISHED_HOLE);
        snap.saved_view = Some(View::Scoring);
        assert!(matches!(
            snap.into_state(),
            Err(ScorecardError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn oversized_stroke_is_invalid() {
        let mut snap = Snapshot::capture(&RoundState::default());
        snap.saved_stroke = u32::MAX;
        assert!(matches!(
            snap.into_state(),
            Err(ScorecardError::InvalidSnapshot(_))
        ));
    }

    #[test]
    fn oversized_score_is_invalid() {
        let mut snap = Snapshot::capture(&RoundState::default());
        snap.saved_hole = 2;
        snap.saved_highest_reached_hole = Some(3);
        snap.saved_scores[0] = HoleScore::Played(4);
        snap.saved_scores[1] = HoleScore::Played(u32::MAX);
        let err = snap.into_state().unwrap_err();
        assert!(err.to_string().contains("hole 2 score"));
    }

    #[test]
    fn finished_round_needs_full_watermark() {
        let json = r#"{
            "savedHole": 19,
            "savedStroke": 0,
            "savedScores": [4,4,null,null,null,null,null,null,null,null,null,null,null,null,null,null,null,null],
            "savedHighestReachedHole": 3,
            "savedView": "results"
        }"#;
        let err = Snapshot::from_json(json).unwrap().into_state().unwrap_err();
        assert!(err.to_string().contains("finished round with watermark 3"));
    }

    #[test]
    fn score_beyond_watermark_is_invalid() {
        let mut snap = Snapshot::capture(&RoundState::default());
        snap.saved_hole = 4;
        snap.saved_highest_reached_hole = Some(3);
        snap.saved_scores[5] = HoleScore::Played(4);
        let err = snap.into_state().unwrap_err();
        assert!(err.to_string().contains("hole 6 is scored beyond watermark 3"));
    }

    #[test]
    fn legacy_finished_round_keeps_full_watermark() {
        let json = r#"{
            "savedHole": 19,
            "savedStroke": 0,
            "savedScores": [4,4,4,4,4,4,4,4,4,4,4,4,4,4,4,4,4,4],
            "savedRoundFinished": true
        }"#;
        let state = Snapshot::from_json(json).unwrap().into_state().unwrap();
        assert_eq!(state.highest_reached_hole, FINISHED_HOLE);
        assert_eq!(state.active_view, View::Results);
    }

    #[test]
    fn garbage_json_is_invalid_snapshot() {
        assert!(matches!(
            Snapshot::from_json("not json"),
            Err(ScorecardError::InvalidSnapshot(_))
        ));
    }
}
