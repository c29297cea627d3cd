//! Query handlers for the game ledger.
//!
//! Read-only operations returning view DTOs or stored move records.

use chrono::{DateTime, Utc};
use goboard_core::error::LedgerError;
use goboard_core::game::MoveRecord;
use goboard_core::repository::GameRepository;
use serde::Serialize;

/// The stored SGF record of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SgfView {
    /// The game identifier.
    pub game_id: i64,
    /// The saved SGF text; empty if nothing has been saved yet.
    pub sgf: String,
}

impl SgfView {
    /// Whether an SGF record has been saved.
    #[must_use]
    pub fn is_saved(&self) -> bool {
        !self.sgf.is_empty()
    }
}

/// Read-only summary of a game.
#[derive(Debug, Clone, Serialize)]
pub struct GameView {
    /// The game identifier.
    pub game_id: i64,
    /// Display name.
    pub name: String,
    /// Number of recorded moves.
    pub move_count: i64,
    /// Whether an SGF record has been saved.
    pub sgf_saved: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Retrieves the SGF record of a game.
///
/// # Errors
///
/// Returns `LedgerError::GameNotFound` if the game does not exist.
/// Returns `LedgerError::Storage` if the lookup fails.
pub async fn get_sgf(game_id: i64, repo: &dyn GameRepository) -> Result<SgfView, LedgerError> {
    let game = repo
        .find_game(game_id)
        .await?
        .ok_or(LedgerError::GameNotFound(game_id))?;

    Ok(SgfView {
        game_id: game.id,
        sgf: game.sgf_text,
    })
}

/// Retrieves the move history of a game, ordered by move number.
///
/// An unknown game yields an empty history rather than an error.
///
/// # Errors
///
/// Returns `LedgerError::Storage` if the lookup fails.
pub async fn get_moves(
    game_id: i64,
    repo: &dyn GameRepository,
) -> Result<Vec<MoveRecord>, LedgerError> {
    repo.list_moves(game_id).await
}

/// Retrieves a summary of a game.
///
/// # Errors
///
/// Returns `LedgerError::GameNotFound` if the game does not exist.
/// Returns `LedgerError::Storage` if a lookup fails.
pub async fn get_game(game_id: i64, repo: &dyn GameRepository) -> Result<GameView, LedgerError> {
    let game = repo
        .find_game(game_id)
        .await?
        .ok_or(LedgerError::GameNotFound(game_id))?;
    let move_count = repo.count_moves(game_id).await?;

    Ok(GameView {
        game_id: game.id,
        sgf_saved: game.has_sgf(),
        name: game.name,
        move_count,
        created_at: game.created_at,
        updated_at: game.updated_at,
    })
}
