use crate::errors::{EllaError, EllaResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf, sync::RwLock};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub assistant_name: String,
    pub reply_delay_ms: u64,
    pub tick_rate_ms: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assistant_name: "Ella".to_string(),
            reply_delay_ms: 600,
            tick_rate_ms: 100,
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads the config from disk, writing the defaults on first run.
pub fn initialize_config() -> EllaResult<()> {
    let config_path = get_config_path()?;

    let config = if config_path.exists() {
        load_config(&config_path)?
    } else {
        let config = Config::default();
        save_config(&config, &config_path)?;
        config
    };

    set_config(config);
    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}

pub(crate) fn set_config(config: Config) {
    *CONFIG.write().unwrap() = config;
}

fn get_config_path() -> EllaResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| EllaError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("ella").join("config.json"))
}

fn load_config(path: &Path) -> EllaResult<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| EllaError::config_error(format!("Failed to read config file: {}", e)))?;

    let config: Config = serde_json::from_str(&config_str)
        .map_err(|e| EllaError::config_error(format!("Failed to parse config: {}", e)))?;

    validate_config(&config)?;
    Ok(config)
}

fn save_config(config: &Config, path: &Path) -> EllaResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            EllaError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(config)
        .map_err(|e| EllaError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, config_str)
        .map_err(|e| EllaError::config_error(format!("Failed to write config file: {}", e)))?;

    Ok(())
}

fn validate_config(config: &Config) -> EllaResult<()> {
    if config.assistant_name.trim().is_empty() {
        return Err(EllaError::config_error("assistant_name is required"));
    }

    if config.tick_rate_ms == 0 {
        return Err(EllaError::config_error(
            "tick_rate_ms must be greater than 0",
        ));
    }

    if config.log_level.is_empty() {
        return Err(EllaError::config_error("log_level is required"));
    }

    Ok(())
}
