//! Command-line interface for unbeatable_server.

use clap::{Parser, Subcommand};

/// Unbeatable tic-tac-toe - REST game server and terminal client
#[derive(Parser, Debug)]
#[command(name = "unbeatable_server")]
#[command(about = "Tic-tac-toe against a computer that never loses", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP game server
    Serve {
        /// Path to the TOML config file (optional)
        #[arg(short, long, default_value = "unbeatable.toml")]
        config: std::path::PathBuf,

        /// Host to bind to (overrides config and HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config and PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Play a game in the terminal
    Play,
}
