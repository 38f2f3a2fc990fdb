use crate::cmd::show;
use crate::services::{DirGallery, FilePicker, TextExporter};
use crate::session::Session;
use scorecard_core::paths;
use scorecard_core::types::View;
use scorecard_core::Transition;
use std::path::Path;

// ---------------------------------------------------------------------------
// navigation
// ---------------------------------------------------------------------------

pub fn details(root: &Path, yes: bool, json: bool) -> anyhow::Result<()> {
    navigate(root, View::Details, yes, json)
}

pub fn preview(root: &Path, yes: bool, json: bool) -> anyhow::Result<()> {
    navigate(root, View::Preview, yes, json)
}

fn navigate(root: &Path, to: View, yes: bool, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root, yes)?;
    session.controller.navigate(to)?;
    show::print(&mut session, json)
}

pub fn back(root: &Path, yes: bool, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root, yes)?;
    session.controller.back()?;
    show::print(&mut session, json)
}

// ---------------------------------------------------------------------------
// memo / photo
// ---------------------------------------------------------------------------

pub fn memo(
    root: &Path,
    text: Option<&str>,
    clear: bool,
    yes: bool,
    json: bool,
) -> anyhow::Result<()> {
    let text = match (text, clear) {
        (_, true) => "",
        (Some(text), false) => text,
        (None, false) => anyhow::bail!("give the memo text, or --clear to remove it"),
    };
    let mut session = Session::open(root, yes)?;
    session.controller.set_memo(text)?;
    show::print(&mut session, json)
}

pub fn photo(
    root: &Path,
    path: Option<&Path>,
    clear: bool,
    yes: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut session = Session::open(root, yes)?;
    match (path, clear) {
        (_, true) => session.controller.clear_photo()?,
        (Some(path), false) => {
            let mut picker = FilePicker::new(path);
            if session.controller.attach_photo(&mut picker)? == Transition::Unchanged {
                eprintln!("No photo selected.");
            }
        }
        (None, false) => anyhow::bail!("give a photo path, or --clear to remove it"),
    }
    show::print(&mut session, json)
}

// ---------------------------------------------------------------------------
// export
// ---------------------------------------------------------------------------

pub fn export(root: &Path, yes: bool, json: bool) -> anyhow::Result<()> {
    let mut session = Session::open(root, yes)?;
    let mut exporter = TextExporter::new(paths::exports_dir(root));
    let mut gallery = DirGallery::new(paths::gallery_dir(root));
    let uri = session
        .controller
        .export_preview(&mut exporter, &mut gallery)?;
    session.report_notices();

    if json {
        return crate::output::print_json(&serde_json::json!({ "uri": uri }));
    }
    println!("Saved to gallery: {uri}");
    Ok(())
}
