//! Game repository abstraction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::LedgerError;
use crate::game::{Game, MoveRecord};

/// Values needed to insert a new game.
#[derive(Debug, Clone)]
pub struct NewGame {
    /// Display label.
    pub name: String,
    /// Timestamp used for both `created_at` and `updated_at`.
    pub created_at: DateTime<Utc>,
}

/// Values needed to append a move. The move number is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewMove {
    /// The game the move belongs to.
    pub game_id: i64,
    /// Board column.
    pub x: i32,
    /// Board row.
    pub y: i32,
    /// Stone color label.
    pub color: String,
    /// Stones removed by this move.
    pub captures: i32,
    /// Timestamp used for both `created_at` and `updated_at`.
    pub created_at: DateTime<Utc>,
}

/// Repository trait for games and their move records.
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Insert a new game with an empty SGF record.
    async fn create_game(&self, game: NewGame) -> Result<Game, LedgerError>;

    /// Load a game by id.
    async fn find_game(&self, game_id: i64) -> Result<Option<Game>, LedgerError>;

    /// Replace the SGF text of a game. Returns `None` if the game does not
    /// exist.
    async fn update_sgf(
        &self,
        game_id: i64,
        sgf_text: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Game>, LedgerError>;

    /// Append a move, assigning it the next move number for its game.
    ///
    /// Implementations must make the count-and-insert atomic per game so
    /// that concurrent appends never share a move number.
    async fn append_move(&self, new_move: NewMove) -> Result<MoveRecord, LedgerError>;

    /// Count the moves recorded for a game.
    async fn count_moves(&self, game_id: i64) -> Result<i64, LedgerError>;

    /// Load all moves for a game, ordered by move number.
    async fn list_moves(&self, game_id: i64) -> Result<Vec<MoveRecord>, LedgerError>;
}
