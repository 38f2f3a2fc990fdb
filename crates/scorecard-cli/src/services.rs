//! Terminal stand-ins for the phone services the round controller consumes.

use crate::render;
use scorecard_core::config::FeedbackConfig;
use scorecard_core::feedback::{FeedbackKind, FeedbackSink};
use scorecard_core::media::{Gallery, ImagePicker, ViewExporter};
use scorecard_core::round::RoundSummary;
use scorecard_core::{io, Result, ScorecardError};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Feedback
// ---------------------------------------------------------------------------

/// Rings the terminal bell on rejected input when sound is enabled.
pub struct TerminalFeedback {
    config: FeedbackConfig,
}

impl TerminalFeedback {
    pub fn new(config: FeedbackConfig) -> Self {
        Self { config }
    }
}

impl FeedbackSink for TerminalFeedback {
    fn emit(&mut self, kind: FeedbackKind) {
        tracing::debug!(%kind, sound = self.config.sound, haptics = self.config.haptics, "feedback");
        if self.config.sound && kind == FeedbackKind::Error {
            eprint!("\x07");
        }
    }
}

// ---------------------------------------------------------------------------
// Confirmation prompts
// ---------------------------------------------------------------------------

pub trait Prompter {
    fn ask(&mut self, title: &str, message: &str) -> bool;
}

/// Accepts every prompt (`--yes`).
pub struct AssumeYes;

impl Prompter for AssumeYes {
    fn ask(&mut self, title: &str, message: &str) -> bool {
        tracing::debug!(title, message, "auto-confirmed");
        true
    }
}

/// Reads `y`/`yes` from stdin. EOF or anything else declines.
pub struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn ask(&mut self, title: &str, message: &str) -> bool {
        eprint!("{title}: {message} [y/N] ");
        let _ = std::io::stderr().flush();
        let mut line = String::new();
        match std::io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => {
                eprintln!();
                false
            }
            Ok(_) => matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

/// "Picks" an image that already exists on disk.
pub struct FilePicker {
    path: PathBuf,
}

impl FilePicker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImagePicker for FilePicker {
    fn pick_image(&mut self) -> Result<Option<String>> {
        if !self.path.is_file() {
            return Err(ScorecardError::Media(format!(
                "no image at {}",
                self.path.display()
            )));
        }
        let path = self.path.canonicalize()?;
        Ok(Some(path.display().to_string()))
    }
}

/// Writes the preview as a plain-text card into `dir`.
pub struct TextExporter {
    dir: PathBuf,
}

impl TextExporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ViewExporter for TextExporter {
    fn export_view(&mut self, summary: &RoundSummary, memo: Option<&str>) -> Result<String> {
        let stamp = chrono::Utc::now().format("%Y%m%d-%H%M%S%3f");
        let path = self.dir.join(format!("scorecard-{stamp}.txt"));
        let text = render::card(summary, memo);
        io::atomic_write(&path, text.as_bytes())?;
        Ok(path.display().to_string())
    }
}

/// Copies exported images into a gallery directory.
pub struct DirGallery {
    dir: PathBuf,
}

impl DirGallery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl Gallery for DirGallery {
    fn save_to_gallery(&mut self, uri: &str) -> Result<()> {
        let source = Path::new(uri);
        let Some(name) = source.file_name() else {
            return Err(ScorecardError::Media(format!("not a file: {uri}")));
        };
        io::ensure_dir(&self.dir)?;
        std::fs::copy(source, self.dir.join(name))
            .map_err(|e| ScorecardError::Media(format!("gallery copy failed: {e}")))?;
        Ok(())
    }
}
