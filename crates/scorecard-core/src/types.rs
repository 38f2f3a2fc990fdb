use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of holes in a round.
pub const HOLE_COUNT: usize = 18;

/// Sentinel value of `current_hole` once the last hole has been committed.
pub const FINISHED_HOLE: u8 = HOLE_COUNT as u8 + 1;

/// Largest stroke count a single hole can carry.
pub const MAX_STROKES: u32 = 999;

// ---------------------------------------------------------------------------
// HoleScore
// ---------------------------------------------------------------------------

/// Committed score for one hole.
///
/// Serialized as a nullable integer so snapshots stay readable by the older
/// `savedScores: [n | null]` layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<u32>", into = "Option<u32>")]
pub enum HoleScore {
    Played(u32),
    #[default]
    Unplayed,
}

impl HoleScore {
    pub fn strokes(self) -> Option<u32> {
        match self {
            HoleScore::Played(n) => Some(n),
            HoleScore::Unplayed => None,
        }
    }

    /// Stroke count to preload when the hole becomes current.
    pub fn strokes_or_zero(self) -> u32 {
        self.strokes().unwrap_or(0)
    }

    pub fn is_played(self) -> bool {
        matches!(self, HoleScore::Played(_))
    }
}

impl From<Option<u32>> for HoleScore {
    fn from(value: Option<u32>) -> Self {
        match value {
            Some(n) => HoleScore::Played(n),
            None => HoleScore::Unplayed,
        }
    }
}

impl From<HoleScore> for Option<u32> {
    fn from(value: HoleScore) -> Self {
        value.strokes()
    }
}

impl fmt::Display for HoleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoleScore::Played(n) => write!(f, "{n}"),
            HoleScore::Unplayed => f.write_str("-"),
        }
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Scoring,
    Results,
    Details,
    Preview,
}

impl View {
    pub fn all() -> &'static [View] {
        &[View::Scoring, View::Results, View::Details, View::Preview]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            View::Scoring => "scoring",
            View::Results => "results",
            View::Details => "details",
            View::Preview => "preview",
        }
    }

    /// Edges reachable by plain navigation along Results ⇄ Details ⇄ Preview.
    ///
    /// Scoring is entered and left only through `select_hole`,
    /// `return_to_results` and the final commit, never through navigation.
    pub fn can_navigate_to(self, target: View) -> bool {
        matches!(
            (self, target),
            (View::Results, View::Details)
                | (View::Details, View::Results)
                | (View::Details, View::Preview)
                | (View::Preview, View::Details)
        )
    }

    /// Screen a "back" gesture leads to, if any.
    pub fn back(self) -> Option<View> {
        match self {
            View::Details => Some(View::Results),
            View::Preview => Some(View::Details),
            View::Scoring | View::Results => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for View {
    type Err = crate::error::ScorecardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scoring" => Ok(View::Scoring),
            "results" => Ok(View::Results),
            "details" => Ok(View::Details),
            "preview" => Ok(View::Preview),
            _ => Err(crate::error::ScorecardError::InvalidSnapshot(format!(
                "unknown view '{s}'"
            ))),
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
    fn hole_score_serializes_as_nullable_int() {
        let scores = vec![HoleScore::Played(4), HoleScore::Unplayed];
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, "[4,null]");
        let back: Vec<HoleScore> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scores);
    }

    #[test]
    fn played_zero_is_distinct_from_unplayed() {
        assert!(HoleScore::Played(0).is_played());
        assert!(!HoleScore::Unplayed.is_played());
        assert_eq!(HoleScore::Unplayed.strokes_or_zero(), 0);
    }

    #[test]
    fn navigation_edges() {
        assert!(View::Results.can_navigate_to(View::Details));
        assert!(View::Preview.can_navigate_to(View::Details));
        assert!(!View::Results.can_navigate_to(View::Preview));
        assert!(!View::Results.can_navigate_to(View::Scoring));
        assert!(!View::Scoring.can_navigate_to(View::Results));
    }

    #[test]
    fn view_from_str_roundtrip() {
        for view in View::all() {
            assert_eq!(view.as_str().parse::<View>().unwrap(), *view);
        }
        assert!("lobby".parse::<View>().is_err());
    }
}
