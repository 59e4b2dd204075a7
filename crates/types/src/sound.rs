//! Alarm/timer sound configuration

use serde::{Deserialize, Serialize};

/// Configuration for alarm and timer sounds
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlarmSoundConfig {
    /// Whether sound is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Custom sound file path (None = use system alert)
    #[serde(default)]
    pub custom_sound_path: Option<String>,

    /// Volume level (0.0 to 1.0)
    #[serde(default = "default_volume")]
    pub volume: f32,
}

fn default_true() -> bool {
    true
}

fn default_volume() -> f32 {
    0.8
}

impl Default for AlarmSoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            custom_sound_path: None,
            volume: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fill_from_defaults() {
        let config: AlarmSoundConfig = serde_json::from_str("{}").unwrap();
        assert!(config.enabled);
        assert!(config.custom_sound_path.is_none());
        assert!((config.volume - 0.8).abs() < 0.001);
    }
}
