//! Configuration file I/O operations

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

/// Default configuration content written by `habitquest init` and on first run
pub const DEFAULT_CONFIG: &str = r#"# HabitQuest Configuration
# ========================

# ============================================================================
# STORAGE - Where points, coins, level, habits and badges are kept
# ============================================================================
#
# Available options:
#   backend - "json" (default), "sqlite" or "memory" (nothing saved)
#   path    - Data file location (default: ~/.habitquest/data.json or
#             ~/.habitquest/habitquest.db depending on backend)

[storage]
backend = "json"
# path = "~/.habitquest/data.json"

# ============================================================================
# CHEST - Loot chest price and payout
# ============================================================================
#
# Opening the chest costs `cost` coins and pays a random amount between
# `min_reward` and `max_reward` (both inclusive).

[chest]
cost = 5
min_reward = 10
max_reward = 29
"#;

impl Config {
    /// Get the global config directory path (~/.habitquest/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".habitquest")
    }

    /// Get the global config file path (~/.habitquest/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to a file with atomic write and file locking
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        write_atomic(path, content.as_bytes())
    }

    /// Load configuration from `path` (or the global path).
    /// If no config exists there, one is created from [`DEFAULT_CONFIG`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::global_config_path);

        if !path.exists() {
            Self::auto_init(&path)?;
        }

        Self::from_file(&path)
    }

    /// Write the default config to `path` unless another process beat us to it
    fn auto_init(path: &Path) -> Result<()> {
        let lock_file = acquire_lock(path)?;

        // Re-check after acquiring the lock
        if path.exists() {
            return Ok(());
        }

        write_unlocked(path, DEFAULT_CONFIG.as_bytes())?;
        tracing::info!("Created default config: {}", path.display());

        drop(lock_file);
        Ok(())
    }
}

/// Write `content` to `path` under an exclusive lock, via temp file + rename.
///
/// Creates the parent directory if needed.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let lock_file = acquire_lock(path)?;
    write_unlocked(path, content)?;
    drop(lock_file);
    Ok(())
}

/// Create the parent dir and take the `<file>.lock` sibling lock.
/// The lock is released when the returned file is dropped.
fn acquire_lock(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create directory: {}", parent.display())
            })?;
        }
    }

    // Separate lock file so the rename never swaps out the locked inode
    let lock_path = sibling_with_suffix(path, "lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;

    lock_file
        .lock_exclusive()
        .with_context(|| format!("Failed to acquire lock: {}", lock_path.display()))?;

    Ok(lock_file)
}

fn write_unlocked(path: &Path, content: &[u8]) -> Result<()> {
    let temp_path = sibling_with_suffix(path, "tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

    temp_file
        .write_all(content)
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;

    temp_file
        .sync_all()
        .with_context(|| format!("Failed to sync {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename into place: {}", path.display()))?;

    Ok(())
}

/// `data.json` -> `data.json.<suffix>`
fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
