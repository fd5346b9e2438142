//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::LinuxConfig;
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => handle_path(store, presenter),
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    // Validate value based on key type
    validate_config_value(key, value)?;

    // Load existing config
    let mut config = store.load().await?;

    // Update the appropriate field
    match key {
        "app_name" => config.app_name = Some(value.to_string()),
        "sound" => {
            config.sound = Some(parse_bool(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?)
        }
        "display_seconds" => {
            config.display_seconds =
                Some(value.parse().map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a non-negative integer".to_string(),
                })?)
        }
        "linux.sound_theme_dir" => {
            // Initialize linux config if None
            if config.linux.is_none() {
                config.linux = Some(LinuxConfig::default());
            }
            if let Some(ref mut linux) = config.linux {
                linux.sound_theme_dir = Some(value.to_string());
            }
        }
        _ => unreachable!(), // Already validated
    }

    // Save config
    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    // Validate key
    if !is_valid_config_key(key) {
        return Err(ConfigError::ValidationError {
            key: key.to_string(),
            message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
        });
    }

    let config = store.load().await?;

    let value = match key {
        "app_name" => config.app_name,
        "sound" => config.sound.map(|b| b.to_string()),
        "display_seconds" => config.display_seconds.map(|n| n.to_string()),
        "linux.sound_theme_dir" => config.linux.as_ref().and_then(|l| l.sound_theme_dir.clone()),
        _ => unreachable!(),
    };

    match value {
        Some(v) => presenter.output(&v),
        None => presenter.output("(not set)"),
    }

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    presenter.key_value(
        "app_name",
        config.app_name.as_deref().unwrap_or("(not set)"),
    );
    presenter.key_value(
        "sound",
        &config
            .sound
            .map(|b| b.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "display_seconds",
        &config
            .display_seconds
            .map(|n| n.to_string())
            .unwrap_or_else(|| "(not set)".to_string()),
    );
    presenter.key_value(
        "linux.sound_theme_dir",
        config
            .linux
            .as_ref()
            .and_then(|l| l.sound_theme_dir.as_deref())
            .unwrap_or("(not set)"),
    );

    Ok(())
}

fn handle_path<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    presenter.output(&store.path().to_string_lossy());
    Ok(())
}

/// Validate a config value based on key type
fn validate_config_value(key: &str, value: &str) -> Result<(), ConfigError> {
    match key {
        "sound" => {
            parse_bool(value).map_err(|_| ConfigError::ValidationError {
                key: key.to_string(),
                message: "Value must be 'true' or 'false'".to_string(),
            })?;
        }
        "display_seconds" => {
            value
                .parse::<u32>()
                .map_err(|_| ConfigError::ValidationError {
                    key: key.to_string(),
                    message: "Value must be a non-negative integer".to_string(),
                })?;
        }
        _ => {} // app_name and sound_theme_dir accept any string
    }
    Ok(())
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::XdgConfigStore;

    #[test]
    fn parse_bool_values() {
        assert_eq!(parse_bool("true"), Ok(true));
        assert_eq!(parse_bool("false"), Ok(false));
        assert_eq!(parse_bool("yes"), Ok(true));
        assert_eq!(parse_bool("no"), Ok(false));
        assert_eq!(parse_bool("1"), Ok(true));
        assert_eq!(parse_bool("0"), Ok(false));
        assert!(parse_bool("invalid").is_err());
    }

    #[test]
    fn validate_sound_values() {
        assert!(validate_config_value("sound", "true").is_ok());
        assert!(validate_config_value("sound", "maybe").is_err());
    }

    #[test]
    fn validate_display_seconds_values() {
        assert!(validate_config_value("display_seconds", "0").is_ok());
        assert!(validate_config_value("display_seconds", "30").is_ok());
        assert!(validate_config_value("display_seconds", "-1").is_err());
        assert!(validate_config_value("display_seconds", "soon").is_err());
    }

    #[tokio::test]
    async fn set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        handle_set(&store, &presenter, "display_seconds", "7")
            .await
            .unwrap();
        handle_set(&store, &presenter, "linux.sound_theme_dir", "/opt/sounds")
            .await
            .unwrap();

        let config = store.load().await.unwrap();
        assert_eq!(config.display_seconds, Some(7));
        assert_eq!(config.sound_theme_dir_or_default(), "/opt/sounds");
    }

    #[tokio::test]
    async fn set_unknown_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = XdgConfigStore::with_path(dir.path().join("config.toml"));
        let presenter = Presenter::new();

        let err = handle_set(&store, &presenter, "volume", "11")
            .await
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError { .. }));
    }
}
