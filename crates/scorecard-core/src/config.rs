use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// FeedbackConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackConfig {
    #[serde(default = "default_true")]
    pub sound: bool,
    #[serde(default = "default_true")]
    pub haptics: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            sound: true,
            haptics: true,
        }
    }
}

// ---------------------------------------------------------------------------
// StorageConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Snapshot file name inside `.scorecard/`.
    #[serde(default = "default_round_file")]
    pub file: String,
}

fn default_round_file() -> String {
    paths::default_round_file()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file: default_round_file(),
        }
    }
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub feedback: FeedbackConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            feedback: FeedbackConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

impl Config {
    /// Load `.scorecard/config.yaml`, falling back to defaults when absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    pub fn round_path(&self, root: &Path) -> PathBuf {
        paths::round_path(root, &self.storage.file)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        let file = self.storage.file.trim();
        if file.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "storage.file is empty".to_string(),
            });
        } else if file.contains('/') || file.contains('\\') || file == "." || file == ".." {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: format!(
                    "storage.file '{}' must be a plain file name inside .scorecard/",
                    self.storage.file
                ),
            });
        }

        if !self.feedback.sound && !self.feedback.haptics {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "feedback.sound and feedback.haptics are both disabled".to_string(),
            });
        }

        if self.version != 1 {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("unknown config version {}", self.version),
            });
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_config_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg, Config::default());
        assert_eq!(
            cfg.round_path(dir.path()),
            dir.path().join(".scorecard/golf_score_card.json")
        );
    }

    #[test]
    fn config_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut cfg = Config::default();
        cfg.feedback.sound = false;
        cfg.storage.file = "club.json".to_string();
        cfg.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let cfg: Config = serde_yaml::from_str("feedback:\n  sound: false\n").unwrap();
        assert!(!cfg.feedback.sound);
        assert!(cfg.feedback.haptics);
        assert_eq!(cfg.storage.file, "golf_score_card.json");
    }

    #[test]
    fn default_config_has_no_warnings() {
        assert!(Config::default().validate().is_empty());
    }

    #[test]
    fn validate_flags_bad_storage_file() {
        let mut cfg = Config::default();
        cfg.storage.file = "../round.json".to_string();
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Error);

        cfg.storage.file = "  ".to_string();
        assert_eq!(cfg.validate()[0].level, WarnLevel::Error);

        cfg.storage.file = ".".to_string();
        assert_eq!(cfg.validate()[0].level, WarnLevel::Error);
    }

    #[test]
    fn validate_warns_when_feedback_silenced() {
        let mut cfg = Config::default();
        cfg.feedback.sound = false;
        cfg.feedback.haptics = false;
        let warnings = cfg.validate();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].level, WarnLevel::Warning);
    }
}
