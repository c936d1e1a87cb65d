//! Unbeatable tic-tac-toe server
//!
//! REST API for single-player tic-tac-toe against the minimax engine in
//! [`unbeatable_tictactoe`].
//!
//! # Architecture
//!
//! - **Sessions**: one board per `game_id`, held in a shared [`SessionStore`]
//! - **Turn**: human move, terminal check, computer reply, terminal check
//! - **App**: axum router exposing health, reset, move and state endpoints
//! - **Notify**: fire-and-forget Telegram messages on wins and losses
//! - **Promo**: codes handed out when the human wins
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use unbeatable_server::{create_app, AppState, PromoCodeGenerator, ServerConfig, SessionStore, TelegramNotifier};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::load("unbeatable.toml")?;
//! let state = AppState::new(
//!     SessionStore::new(),
//!     Arc::new(TelegramNotifier::from_config(&config)),
//!     PromoCodeGenerator::new(),
//! );
//! let app = create_app(Arc::new(state));
//! let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod config;
mod handlers;
mod notify;
mod play;
mod promo;
mod session;
mod turn;
mod types;

// Crate-level exports - HTTP application
pub use app::{create_app, AppState};
pub use handlers::{game_state, health, make_move, reset_game};

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Notifications
pub use notify::{spawn_notification, Notification, Notifier, TelegramNotifier};

// Crate-level exports - Promo codes
pub use promo::{PromoCodeGenerator, PROMO_LENGTH, PROMO_PREFIX};

// Crate-level exports - Sessions and turn flow
pub use play::run_terminal_game;
pub use session::{SessionId, SessionStore, DEFAULT_SESSION};
pub use turn::{play_turn, TurnOutcome};

// Crate-level exports - Wire types
pub use types::{
    wire_board, CellRef, GameQuery, GameStateResponse, HealthResponse, MoveRequest, MoveResponse,
    ResetResponse, WireBoard,
};
