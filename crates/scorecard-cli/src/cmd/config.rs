use crate::output::{print_json, print_table};
use anyhow::Context;
use clap::Subcommand;
use scorecard_core::config::{Config, WarnLevel};
use std::path::Path;

// ---------------------------------------------------------------------------
// Subcommand types
// ---------------------------------------------------------------------------

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration
    Show,

    /// Validate the config for common mistakes
    Validate,
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    let config = Config::load(root).context("failed to load config")?;
    match subcmd {
        ConfigSubcommand::Show => show(root, &config, json),
        ConfigSubcommand::Validate => validate(&config, json),
    }
}

fn show(root: &Path, config: &Config, json: bool) -> anyhow::Result<()> {
    if json {
        return print_json(config);
    }
    let rows = vec![
        vec!["version".to_string(), config.version.to_string()],
        vec!["feedback.sound".to_string(), config.feedback.sound.to_string()],
        vec![
            "feedback.haptics".to_string(),
            config.feedback.haptics.to_string(),
        ],
        vec!["storage.file".to_string(), config.storage.file.clone()],
        vec![
            "round path".to_string(),
            config.round_path(root).display().to_string(),
        ],
    ];
    print_table(&["KEY", "VALUE"], &rows);
    Ok(())
}

fn validate(config: &Config, json: bool) -> anyhow::Result<()> {
    let warnings = config.validate();
    let errors = warnings
        .iter()
        .filter(|w| w.level == WarnLevel::Error)
        .count();

    if json {
        print_json(&serde_json::json!({
            "ok": errors == 0,
            "warnings": warnings,
        }))?;
    } else if warnings.is_empty() {
        println!("Config OK");
    } else {
        for w in &warnings {
            let tag = match w.level {
                WarnLevel::Error => "error",
                WarnLevel::Warning => "warning",
            };
            println!("{tag}: {}", w.message);
        }
    }

    if errors > 0 {
        anyhow::bail!("{errors} config error(s)");
    }
    Ok(())
}
