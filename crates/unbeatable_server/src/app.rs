//! HTTP application: shared state and router.

use crate::handlers::{game_state, health, make_move, reset_game};
use crate::notify::Notifier;
use crate::promo::PromoCodeGenerator;
use crate::session::SessionStore;
use axum::routing::{get, post};
use axum::Router;
use derive_new::new;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(new)]
pub struct AppState {
    /// Boards by session ID.
    pub sessions: SessionStore,
    /// Receives win/loss notifications.
    pub notifier: Arc<dyn Notifier>,
    /// Issues promo codes on human wins.
    pub promo_codes: PromoCodeGenerator,
}

/// Creates the application router with the given state.
///
/// Routes:
/// - `GET  /api/health`     - health check
/// - `POST /api/game/reset` - reset a session (`?game_id=`)
/// - `POST /api/game/move`  - human move plus computer reply
/// - `GET  /api/game/state` - current board of a session (`?game_id=`)
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/game/reset", post(reset_game))
        .route("/api/game/move", post(make_move))
        .route("/api/game/state", get(game_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
