//! Shared application state.

use std::sync::Arc;

use goboard_core::clock::Clock;
use goboard_core::repository::GameRepository;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of record timestamps.
    pub clock: Arc<dyn Clock>,
    /// Store for games and move records.
    pub game_repository: Arc<dyn GameRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, game_repository: Arc<dyn GameRepository>) -> Self {
        Self {
            clock,
            game_repository,
        }
    }
}
