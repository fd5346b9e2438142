//! Main app runners for serve and send modes

use std::process::ExitCode;

use serde_json::json;

use crate::application::ports::ConfigStore;
use crate::application::{ComposeDefaults, NotifyRouter, DELIVERY_FAILED_ACK};
use crate::domain::config::AppConfig;
use crate::infrastructure::{create_notifier, XdgConfigStore};
use crate::mcp::McpServer;

use super::args::KindArg;
use super::presenter::Presenter;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Options for the `send` command
#[derive(Debug, Clone)]
pub struct SendOptions {
    pub title: String,
    pub message: String,
    pub kind: KindArg,
    pub silent: bool,
}

/// Load the config file, falling back to an empty config on any error
pub async fn load_config(presenter: &Presenter) -> AppConfig {
    let store = XdgConfigStore::new();
    match store.load().await {
        Ok(config) => config,
        Err(e) => {
            presenter.warn(&format!("Ignoring config file: {}", e));
            AppConfig::empty()
        }
    }
}

/// Build the router for this host from the loaded config
fn build_router(config: &AppConfig) -> NotifyRouter {
    let defaults = ComposeDefaults {
        play_sound: config.sound_or_default(),
        display_seconds: config.display_seconds_or_default(),
    };
    let notifier = create_notifier(std::env::consts::OS, config);
    NotifyRouter::new(notifier, defaults)
}

/// Run the MCP server on stdio until the client disconnects
pub async fn run_serve(presenter: &Presenter) -> ExitCode {
    let config = load_config(presenter).await;
    let server = McpServer::new(build_router(&config));

    match server.run().await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            presenter.error(&format!("Server failed: {}", e));
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Send one notification from the command line
pub async fn run_send(options: SendOptions, presenter: &Presenter) -> ExitCode {
    let config = load_config(presenter).await;
    let router = build_router(&config);

    let mut args = json!({
        "title": options.title,
        "message": options.message,
        "type": options.kind.as_str(),
    });
    if options.silent {
        args["sound"] = json!(false);
    }

    let ack = router.handle("notify", &args).await;
    presenter.output(&ack);

    if ack == DELIVERY_FAILED_ACK {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
