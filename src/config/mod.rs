//! Configuration loading and management

mod io;
mod settings;

pub use io::{DEFAULT_CONFIG, write_atomic};
pub use settings::{ChestSettings, StorageBackend, StorageSettings};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Main configuration structure (`~/.habitquest/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where progress is stored
    #[serde(default)]
    pub storage: StorageSettings,

    /// Loot chest tuning
    #[serde(default)]
    pub chest: ChestSettings,
}

impl Config {
    /// Resolve the data file: configured path (with `~` expanded) or the
    /// backend's default file inside the global config dir
    pub fn data_path(&self) -> PathBuf {
        match &self.storage.path {
            Some(raw) => expand_tilde(raw).unwrap_or_else(|| PathBuf::from(raw)),
            None => Self::global_config_dir().join(self.storage.backend.default_file_name()),
        }
    }
}

fn expand_tilde(path: &str) -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    if path == "~" {
        return Some(home);
    }
    path.strip_prefix("~/").map(|rest| home.join(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.chest.cost, 5);
        assert_eq!(config.chest.min_reward, 10);
        assert_eq!(config.chest.max_reward, 29);
        assert_eq!(config.storage.backend, StorageBackend::Json);
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            r#"
            [storage]
            backend = "sqlite"

            [chest]
            cost = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(config.chest.cost, 8);
        assert_eq!(config.chest.max_reward, 29);
        assert!(config.data_path().ends_with("habitquest.db"));
    }

    #[test]
    fn test_explicit_data_path() {
        let mut config = Config::default();
        config.storage.path = Some("/tmp/quest.json".to_string());
        assert_eq!(config.data_path(), PathBuf::from("/tmp/quest.json"));
    }
}
