//! Services used by the details and preview screens.

use crate::error::Result;
use crate::round::RoundSummary;

/// Photo library / camera picker.
pub trait ImagePicker {
    /// `Ok(None)` when the player cancels the picker.
    fn pick_image(&mut self) -> Result<Option<String>>;
}

/// Renders the preview screen to an image and returns its URI.
pub trait ViewExporter {
    fn export_view(&mut self, summary: &RoundSummary, memo: Option<&str>) -> Result<String>;
}

pub trait Gallery {
    fn save_to_gallery(&mut self, uri: &str) -> Result<()>;
}
