use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Deserialize;

/// User configuration (~/.config/courtside/config.toml)
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay before startup banners are dismissed, in milliseconds
    pub banner_timeout_ms: u64,
    /// Whether the page carries a selected-count badge at all
    pub show_selected_count: bool,
    /// Input poll timeout for the main loop, in milliseconds
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            banner_timeout_ms: 5000,
            show_selected_count: true,
            tick_ms: 250,
        }
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("courtside").join("config.toml"))
}

/// Load the config file; an absent file means defaults
pub fn load_config() -> io::Result<Config> {
    let Some(path) = config_path() else {
        return Ok(Config::default());
    };
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(&path)?;
    toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
