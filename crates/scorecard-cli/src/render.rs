use crate::output::{format_table, Align};
use scorecard_core::round::{RoundState, RoundSummary};
use scorecard_core::types::{HoleScore, HOLE_COUNT};
use std::fmt::Write;

/// Header and score rows for one nine, with the subtotal column.
fn nine_rows(
    scores: &[HoleScore],
    first_hole: u8,
    label: &str,
    subtotal: u32,
    current: Option<(u8, u32)>,
) -> String {
    let hole_numbers: Vec<String> = (0..scores.len())
        .map(|i| (first_hole + i as u8).to_string())
        .collect();
    let mut headers = vec!["HOLE"];
    headers.extend(hole_numbers.iter().map(String::as_str));
    headers.push(label);

    let mut row = vec!["SCORE".to_string()];
    for (i, score) in scores.iter().enumerate() {
        let hole = first_hole + i as u8;
        row.push(match current {
            Some((h, stroke)) if h == hole => format!("[{stroke}]"),
            _ => score.to_string(),
        });
    }
    row.push(subtotal.to_string());
    format_table(&headers, &[row], Align::Right)
}

/// Both nines as text, highlighting the hole in progress.
pub fn scorecard(summary: &RoundSummary, current: Option<(u8, u32)>) -> String {
    let half = HOLE_COUNT / 2;
    let front = nine_rows(&summary.scores[..half], 1, "OUT", summary.out, current);
    let back = nine_rows(
        &summary.scores[half..],
        half as u8 + 1,
        "IN",
        summary.inward,
        current,
    );
    format!("{front}\n{back}")
}

/// Exported preview card.
pub fn card(summary: &RoundSummary, memo: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Golf score card");
    let _ = writeln!(out);
    out.push_str(&scorecard(summary, None));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Total: {} ({} of {HOLE_COUNT} holes)",
        summary.total, summary.holes_played
    );
    if let Some(memo) = memo {
        let _ = writeln!(out, "Memo: {memo}");
    }
    out
}

/// `(hole, stroke)` of the hole being scored, if any.
pub fn current_marker(state: &RoundState) -> Option<(u8, u32)> {
    (!state.is_finished()).then_some((state.current_hole, state.current_stroke))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_hole_shows_in_progress_stroke() {
        let mut state = RoundState::default();
        state.scores[0] = HoleScore::Played(5);
        state.current_hole = 2;
        state.current_stroke = 3;
        let text = scorecard(&state.summary(), current_marker(&state));
        assert!(text.contains("[3]"));
        assert!(text.contains("OUT"));
        assert!(text.contains("IN"));
    }

    #[test]
    fn card_includes_total_and_memo() {
        let summary = RoundSummary::from_scores(&[HoleScore::Played(5); HOLE_COUNT]);
        let text = card(&summary, Some("rain delay"));
        assert!(text.contains("Total: 90 (18 of 18 holes)"));
        assert!(text.contains("Memo: rain delay"));
    }
}
