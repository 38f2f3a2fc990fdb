use crate::output::print_json;
use crate::render;
use crate::session::Session;
use scorecard_core::round::RoundSummary;
use scorecard_core::types::View;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct StatusOutput<'a> {
    hole: u8,
    stroke: u32,
    highest_reached_hole: u8,
    view: View,
    finished: bool,
    summary: RoundSummary,
    memo: Option<&'a str>,
    photo: Option<&'a str>,
}

pub fn run(root: &Path, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root, false)?;
    print(&mut session, json)
}

/// Print the round as it stands after a command.
pub fn print(session: &mut Session, json: bool) -> anyhow::Result<()> {
    session.report_notices();
    let state = session.controller.state();

    if json {
        return print_json(&StatusOutput {
            hole: state.current_hole,
            stroke: state.current_stroke,
            highest_reached_hole: state.highest_reached_hole,
            view: state.active_view,
            finished: state.is_finished(),
            summary: state.summary(),
            memo: state.memo.as_deref(),
            photo: state.photo.as_deref(),
        });
    }

    let summary = state.summary();
    if state.is_finished() {
        println!("Round complete");
    } else {
        println!("Hole: {}    Stroke: {}", state.current_hole, state.current_stroke);
    }
    println!("Screen: {}", state.active_view);
    println!();
    print!("{}", render::scorecard(&summary, render::current_marker(state)));
    println!();
    println!(
        "Total: {} ({} holes played)",
        summary.total, summary.holes_played
    );

    if matches!(state.active_view, View::Details | View::Preview) {
        println!("Memo:  {}", state.memo.as_deref().unwrap_or("(none)"));
        println!("Photo: {}", state.photo.as_deref().unwrap_or("(none)"));
    }
    Ok(())
}
