//! Configuration store port interface

use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;

/// Port for the persisted notification settings (`app_name`, `sound`,
/// `display_seconds`, `linux.sound_theme_dir`).
///
/// Settings are optional all the way down: a missing file loads as an
/// empty config and every accessor falls back to its documented default,
/// so the server runs unconfigured.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Load the stored settings. A missing file is not an error; it loads
    /// as an empty config.
    async fn load(&self) -> Result<AppConfig, ConfigError>;

    /// Persist the settings, creating the parent directory when needed.
    async fn save(&self, config: &AppConfig) -> Result<(), ConfigError>;

    /// Location of the config file.
    fn path(&self) -> PathBuf;

    /// Whether the config file exists on disk.
    fn exists(&self) -> bool;

    /// Write a fresh config file with the default settings. Refuses to
    /// overwrite an existing file.
    async fn init(&self) -> Result<(), ConfigError>;
}
