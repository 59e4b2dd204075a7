//! Application configuration persisted between runs

use anyhow::Result;
use chronodeck_types::{AlarmSoundConfig, CompletionDisplay, TimeFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    pub version: u32,
    /// Clock display format
    #[serde(default)]
    pub time_format: TimeFormat,
    /// Zone id for the clock display ("Local" or an IANA name)
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Minutes a snooze pushes the pending alarm forward
    #[serde(default = "default_snooze_minutes")]
    pub snooze_minutes: u32,
    /// How the countdown's completion tick is rendered
    #[serde(default)]
    pub completion_display: CompletionDisplay,
    /// Alarm/timer sound settings
    #[serde(default)]
    pub sound: AlarmSoundConfig,
}

fn default_timezone() -> String {
    "Local".to_string()
}

fn default_snooze_minutes() -> u32 {
    5
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            time_format: TimeFormat::default(),
            timezone: default_timezone(),
            snooze_minutes: default_snooze_minutes(),
            completion_display: CompletionDisplay::default(),
            sound: AlarmSoundConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults when no config
    /// file exists yet.
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
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("io", "chronodeck", "chronodeck")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
