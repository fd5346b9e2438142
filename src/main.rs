//! AgentNotify CLI entry point

use std::process::ExitCode;

use clap::Parser;

use agent_notify::cli::{
    app::{run_send, run_serve, SendOptions, EXIT_ERROR},
    args::{Cli, Commands},
    config_cmd::handle_config_command,
    presenter::Presenter,
};
use agent_notify::infrastructure::XdgConfigStore;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let presenter = Presenter::new();

    match cli.command {
        Some(Commands::Config { action }) => {
            let store = XdgConfigStore::new();
            if let Err(e) = handle_config_command(action, &store, &presenter).await {
                presenter.error(&e.to_string());
                return ExitCode::from(EXIT_ERROR);
            }
            ExitCode::SUCCESS
        }
        Some(Commands::Send {
            title,
            message,
            kind,
            silent,
        }) => {
            let options = SendOptions {
                title,
                message,
                kind,
                silent,
            };
            run_send(options, &presenter).await
        }
        // Serving on stdio is the default mode
        Some(Commands::Serve) | None => run_serve(&presenter).await,
    }
}
