use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "snake_duel_config.yaml";

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub tick_interval_ms: u64,
    pub ticks_per_step: u64,
    pub growth_interval: u32,
    pub initial_snake_length: u16,
    pub log_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: 5,
            ticks_per_step: 12,
            growth_interval: 5,
            initial_snake_length: 4,
            log_file: None,
        }
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        if !(1..=1000).contains(&self.tick_interval_ms) {
            return Err("Tick interval must be between 1ms and 1000ms".to_string());
        }
        if !(1..=1000).contains(&self.ticks_per_step) {
            return Err("Ticks per step must be between 1 and 1000".to_string());
        }
        if !(1..=1000).contains(&self.growth_interval) {
            return Err("Growth interval must be between 1 and 1000 frames".to_string());
        }
        if !(1..=20).contains(&self.initial_snake_length) {
            return Err("Initial snake length must be between 1 and 20".to_string());
        }
        Ok(())
    }
}

/// The config lives next to the executable when that can be found.
pub fn config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(CONFIG_FILE_NAME);
        }
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Reads and validates the config. A missing file gives the defaults.
pub fn load_config(path: &Path) -> Result<Config, String> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
    let config: Config = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;

    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    Ok(config)
}

pub fn save_config(path: &Path, config: &Config) -> Result<(), String> {
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;

    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    fs::write(path, content)
        .map_err(|e| format!("Failed to write config {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_missing_file_returns_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("nope.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_saved_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        let config = Config {
            growth_interval: 8,
            log_file: Some("snake.log".to_string()),
            ..Config::default()
        };

        save_config(&path, &config).unwrap();

        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "growth_interval: 3\n").unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.growth_interval, 3);
        assert_eq!(config.ticks_per_step, Config::default().ticks_per_step);
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "growth_interval: 0\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.starts_with("Config validation error"), "{}", err);

        let config = Config { initial_snake_length: 50, ..Config::default() };
        assert!(save_config(&path, &config).is_err());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "ticks_per_step: [oops\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.starts_with("Failed to deserialize config"), "{}", err);
    }
}
