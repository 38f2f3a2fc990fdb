use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const SCORECARD_DIR: &str = ".scorecard";
pub const EXPORTS_DIR: &str = ".scorecard/exports";
pub const GALLERY_DIR: &str = ".scorecard/gallery";

pub const CONFIG_FILE: &str = ".scorecard/config.yaml";

/// Key the round snapshot is stored under. The default snapshot file is
/// `<key>.json`, overridable through `storage.file`.
pub const STORAGE_KEY: &str = "golf_score_card";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn scorecard_dir(root: &Path) -> PathBuf {
    root.join(SCORECARD_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn default_round_file() -> String {
    format!("{STORAGE_KEY}.json")
}

pub fn round_path(root: &Path, file: &str) -> PathBuf {
    scorecard_dir(root).join(file)
}

pub fn exports_dir(root: &Path) -> PathBuf {
    root.join(EXPORTS_DIR)
}

pub fn gallery_dir(root: &Path) -> PathBuf {
    root.join(GALLERY_DIR)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
