//! Game session storage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument};
use unbeatable_tictactoe::Board;

/// Unique identifier for a game session.
pub type SessionId = String;

/// Session used when a request does not name one.
pub const DEFAULT_SESSION: &str = "default";

/// Holds one board per session.
///
/// Cloning the store shares the same sessions. Each call locks the whole
/// map, so a board is never touched by two requests at once.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, Board>>>,
}

impl SessionStore {
    /// Creates an empty session store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating session store");
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<SessionId, Board>> {
        // A panic mid-turn cannot leave a board half-written: placements are
        // single-cell writes.
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Runs `f` on the session's board, creating an empty board first if
    /// the session does not exist yet.
    #[instrument(skip(self, f))]
    pub fn with_board<R>(&self, id: &str, f: impl FnOnce(&mut Board) -> R) -> R {
        let mut sessions = self.lock();
        let board = sessions.entry(id.to_string()).or_insert_with(|| {
            info!(session_id = id, "Creating new game session");
            Board::new()
        });
        f(board)
    }

    /// Resets the session's board to empty and returns it.
    #[instrument(skip(self))]
    pub fn reset(&self, id: &str) -> Board {
        self.with_board(id, |board| {
            board.reset();
            board.clone()
        })
    }

    /// Returns a copy of the session's board.
    ///
    /// An unknown session reads as an empty board and is not created.
    #[instrument(skip(self))]
    pub fn snapshot(&self, id: &str) -> Board {
        match self.lock().get(id) {
            Some(board) => board.clone(),
            None => {
                debug!(session_id = id, "Unknown session, returning empty board");
                Board::new()
            }
        }
    }

    /// Number of sessions created so far.
    pub fn session_count(&self) -> usize {
        self.lock().len()
    }
}
