//! Unbeatable tic-tac-toe - server binary

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;
use unbeatable_server::{
    create_app, run_terminal_game, AppState, PromoCodeGenerator, ServerConfig, SessionStore,
    TelegramNotifier,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve { config, host, port } => run_server(&config, host, port).await,
        Command::Play => run_play(),
    }
}

/// Run the HTTP game server
#[instrument(skip_all, fields(config_path = %config_path.display()))]
async fn run_server(config_path: &Path, host: Option<String>, port: Option<u16>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,unbeatable_server=debug")),
        )
        .init();

    let mut config = ServerConfig::load(config_path)?;
    if let Some(host) = host {
        config = config.with_host(host);
    }
    if let Some(port) = port {
        config = config.with_port(port);
    }

    let notifier = TelegramNotifier::from_config(&config);
    if !notifier.is_configured() {
        warn!("TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID not set, notifications will only be logged");
    }

    let state = Arc::new(AppState::new(
        SessionStore::new(),
        Arc::new(notifier),
        PromoCodeGenerator::new(),
    ));
    let app = create_app(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "Server ready at http://{}/api/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down gracefully");
    Ok(())
}

/// Run a terminal game on stdin/stdout
fn run_play() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let stdin = std::io::stdin();
    let status = run_terminal_game(stdin.lock(), std::io::stdout())?;
    info!(?status, "Terminal game finished");
    Ok(())
}

/// Completes when Ctrl+C is received.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server...");
}
