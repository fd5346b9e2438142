//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Default directory searched for freedesktop event sounds
pub const DEFAULT_SOUND_THEME_DIR: &str = "/usr/share/sounds/freedesktop/stereo";

/// Linux-specific configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinuxConfig {
    pub sound_theme_dir: Option<String>,
}

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_name: Option<String>,
    pub sound: Option<bool>,
    pub display_seconds: Option<u32>,
    pub linux: Option<LinuxConfig>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            app_name: Some("agent-notify".to_string()),
            sound: Some(true),
            display_seconds: Some(10),
            linux: Some(LinuxConfig {
                sound_theme_dir: Some(DEFAULT_SOUND_THEME_DIR.to_string()),
            }),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            app_name: other.app_name.or(self.app_name),
            sound: other.sound.or(self.sound),
            display_seconds: other.display_seconds.or(self.display_seconds),
            linux: Self::merge_linux_config(self.linux, other.linux),
        }
    }

    /// Merge Linux config sections
    fn merge_linux_config(
        base: Option<LinuxConfig>,
        other: Option<LinuxConfig>,
    ) -> Option<LinuxConfig> {
        match (base, other) {
            (None, None) => None,
            (Some(b), None) => Some(b),
            (None, Some(o)) => Some(o),
            (Some(b), Some(o)) => Some(LinuxConfig {
                sound_theme_dir: o.sound_theme_dir.or(b.sound_theme_dir),
            }),
        }
    }

    /// Get the application name shown by the notification daemon
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or("agent-notify")
    }

    /// Get the sound setting, or true if not set
    pub fn sound_or_default(&self) -> bool {
        self.sound.unwrap_or(true)
    }

    /// Get the display duration in seconds, or 10 if not set
    pub fn display_seconds_or_default(&self) -> u32 {
        self.display_seconds.unwrap_or(10)
    }

    /// Get the sound theme directory, or the freedesktop default
    pub fn sound_theme_dir_or_default(&self) -> &str {
        self.linux
            .as_ref()
            .and_then(|l| l.sound_theme_dir.as_deref())
            .unwrap_or(DEFAULT_SOUND_THEME_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.app_name, Some("agent-notify".to_string()));
        assert_eq!(config.sound, Some(true));
        assert_eq!(config.display_seconds, Some(10));
        let linux = config.linux.as_ref().unwrap();
        assert_eq!(
            linux.sound_theme_dir,
            Some(DEFAULT_SOUND_THEME_DIR.to_string())
        );
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.app_name.is_none());
        assert!(config.sound.is_none());
        assert!(config.display_seconds.is_none());
        assert!(config.linux.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            app_name: Some("base".to_string()),
            sound: Some(true),
            ..Default::default()
        };

        let other = AppConfig {
            app_name: Some("other".to_string()),
            sound: None, // Should not override
            display_seconds: Some(5),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.app_name, Some("other".to_string()));
        assert_eq!(merged.sound, Some(true)); // Kept from base
        assert_eq!(merged.display_seconds, Some(5));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            app_name: Some("keep".to_string()),
            display_seconds: Some(20),
            ..Default::default()
        };

        let other = AppConfig::empty();
        let merged = base.merge(other);

        assert_eq!(merged.app_name, Some("keep".to_string()));
        assert_eq!(merged.display_seconds, Some(20));
    }

    #[test]
    fn merge_linux_section() {
        let base = AppConfig {
            linux: Some(LinuxConfig {
                sound_theme_dir: Some("/base/sounds".to_string()),
            }),
            ..Default::default()
        };
        let other = AppConfig {
            linux: Some(LinuxConfig {
                sound_theme_dir: Some("/other/sounds".to_string()),
            }),
            ..Default::default()
        };
        let merged = base.merge(other);
        assert_eq!(merged.sound_theme_dir_or_default(), "/other/sounds");
    }

    #[test]
    fn merge_linux_section_preserves_base() {
        let base = AppConfig {
            linux: Some(LinuxConfig {
                sound_theme_dir: Some("/base/sounds".to_string()),
            }),
            ..Default::default()
        };
        let merged = base.merge(AppConfig::empty());
        assert_eq!(merged.sound_theme_dir_or_default(), "/base/sounds");
    }

    #[test]
    fn accessor_defaults() {
        let config = AppConfig::empty();
        assert_eq!(config.app_name_or_default(), "agent-notify");
        assert!(config.sound_or_default());
        assert_eq!(config.display_seconds_or_default(), 10);
        assert_eq!(config.sound_theme_dir_or_default(), DEFAULT_SOUND_THEME_DIR);
    }
}
