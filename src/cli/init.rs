//! Init and reset commands

use anyhow::{Result, bail};
use std::path::PathBuf;

use habitquest::config::{Config, DEFAULT_CONFIG, write_atomic};

use super::{Paths, open_tracker};

/// Initialize a new HabitQuest configuration
/// By default creates the global config at ~/.habitquest/config.toml
/// Use --config to specify a custom path
pub fn init_command(config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Config::global_config_path);

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    write_atomic(&config_path, DEFAULT_CONFIG.as_bytes())?;
    println!("Created: {}", config_path.display());

    Ok(())
}

/// Wipe all habits and progress
pub fn reset_command(paths: &Paths, yes: bool) -> Result<()> {
    if !yes {
        bail!("This deletes all habits, points, coins, levels and badges.\nRe-run with --yes to confirm.");
    }

    let mut tracker = open_tracker(paths)?;
    tracker.reset()?;
    println!("All progress cleared.");
    Ok(())
}
