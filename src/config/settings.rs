//! Application configuration

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use time_clock_types::ClockFaceConfig;

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Version of the config format
    #[serde(default = "default_version")]
    pub version: u32,
    /// Window / output dimensions
    #[serde(default)]
    pub window: WindowConfig,
    /// Where clock images are looked up
    #[serde(default)]
    pub images: ImageConfig,
    /// Initial clock face properties
    #[serde(default = "default_clock")]
    pub clock: ClockFaceConfig,
    /// Interval between clock updates in windowed mode
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to_path(&config_path)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "time-clock", "time-clock")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(1))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            window: WindowConfig::default(),
            images: ImageConfig::default(),
            clock: default_clock(),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

fn default_version() -> u32 {
    1
}

fn default_tick_interval_ms() -> u64 {
    1000
}

fn default_clock() -> ClockFaceConfig {
    ClockFaceConfig {
        bg_image: Some("clock_bg".to_string()),
        hour_image: Some("clock_hour".to_string()),
        minute_image: Some("clock_minute".to_string()),
        second_image: Some("clock_second".to_string()),
        ..ClockFaceConfig::default()
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Clock".to_string()
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 240,
            height: 240,
            title: default_title(),
        }
    }
}

/// Image lookup configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageConfig {
    /// Directory holding `<name>.png` files
    pub dir: PathBuf,
    /// Maximum number of decoded images kept in memory
    #[serde(default = "default_cache_entries")]
    pub cache_entries: usize,
    /// Seconds an unused decoded image stays cached
    #[serde(default = "default_cache_expiry_secs")]
    pub cache_expiry_secs: u64,
}

fn default_cache_entries() -> usize {
    50
}

fn default_cache_expiry_secs() -> u64 {
    300
}

impl ImageConfig {
    pub fn cache_expiry(&self) -> Duration {
        Duration::from_secs(self.cache_expiry_secs)
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("images"),
            cache_entries: default_cache_entries(),
            cache_expiry_secs: default_cache_expiry_secs(),
        }
    }
}
