use crate::cmd::show;
use crate::session::Session;
use clap::ValueEnum;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SwipeDirection {
    /// Add a stroke
    Right,
    /// Remove a stroke
    Left,
    /// Commit the hole
    Up,
}

// ---------------------------------------------------------------------------
// swipe
// ---------------------------------------------------------------------------

pub fn swipe(
    root: &Path,
    direction: SwipeDirection,
    times: u32,
    yes: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut session = Session::open(root, yes)?;
    for _ in 0..times {
        match direction {
            SwipeDirection::Right => session.controller.increment_stroke()?,
            SwipeDirection::Left => session.controller.decrement_stroke()?,
            SwipeDirection::Up => {
                let transition = session.controller.request_commit_hole()?;
                if !session.resolve(transition)? {
                    break;
                }
            }
        }
    }
    show::print(&mut session, json)
}

// ---------------------------------------------------------------------------
// select
// ---------------------------------------------------------------------------

pub fn select(root: &Path, hole: u8, yes: bool, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root, yes)?;
    let transition = session.controller.select_hole(hole)?;
    session.resolve(transition)?;
    show::print(&mut session, json)
}

// ---------------------------------------------------------------------------
// results
// ---------------------------------------------------------------------------

pub fn results(root: &Path, yes: bool, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root, yes)?;
    let transition = session.controller.return_to_results()?;
    session.resolve(transition)?;
    show::print(&mut session, json)
}
