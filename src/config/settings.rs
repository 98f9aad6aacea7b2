//! Settings configuration types

use serde::{Deserialize, Serialize};

/// Which key-value backend holds the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file (`data.json`)
    #[default]
    Json,
    /// SQLite database (`habitquest.db`)
    Sqlite,
    /// Nothing is written to disk
    Memory,
}

impl StorageBackend {
    /// File name used when no explicit path is configured
    pub fn default_file_name(&self) -> &'static str {
        match self {
            StorageBackend::Json | StorageBackend::Memory => "data.json",
            StorageBackend::Sqlite => "habitquest.db",
        }
    }
}

/// Persistence settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,

    /// Data file location; defaults to a file in ~/.habitquest/
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Loot chest price and payout range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChestSettings {
    /// Coins spent per chest
    #[serde(default = "default_chest_cost")]
    pub cost: u64,

    /// Smallest possible reward (inclusive)
    #[serde(default = "default_min_reward")]
    pub min_reward: u64,

    /// Largest possible reward (inclusive)
    #[serde(default = "default_max_reward")]
    pub max_reward: u64,
}

fn default_chest_cost() -> u64 {
    5
}

fn default_min_reward() -> u64 {
    10
}

fn default_max_reward() -> u64 {
    29
}

impl Default for ChestSettings {
    fn default() -> Self {
        Self {
            cost: default_chest_cost(),
            min_reward: default_min_reward(),
            max_reward: default_max_reward(),
        }
    }
}
