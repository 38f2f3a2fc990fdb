use anyhow::Context;
use scorecard_core::{config::Config, io, paths};
use std::path::Path;

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing scorecard in: {}", root.display());

    let dir = paths::scorecard_dir(root);
    io::ensure_dir(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

    let config_path = paths::config_path(root);
    if !config_path.exists() {
        Config::default()
            .save(root)
            .context("failed to write config.yaml")?;
        println!("  created: {}", paths::CONFIG_FILE);
    } else {
        println!("  exists:  {}", paths::CONFIG_FILE);
    }

    let config = Config::load(root).context("failed to load config")?;
    println!("  round:   {}", config.round_path(root).display());
    Ok(())
}
