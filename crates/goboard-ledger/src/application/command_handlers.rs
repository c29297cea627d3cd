//! Command handlers for the game ledger.
//!
//! Each handler validates its command, stamps it with the clock and performs
//! exactly one repository write.

use goboard_core::clock::Clock;
use goboard_core::error::LedgerError;
use goboard_core::game::{Game, MoveRecord};
use goboard_core::repository::{GameRepository, NewGame, NewMove};
use tracing::info;

use crate::domain::commands::{AppendMove, CreateGame, SaveSgf};

/// Handles the `CreateGame` command: stores a new game with an empty SGF
/// record.
///
/// # Errors
///
/// Returns `LedgerError::InvalidInput` if the requested name is too long, or
/// `LedgerError::Storage` if the insert fails.
pub async fn handle_create_game(
    command: &CreateGame,
    clock: &dyn Clock,
    repo: &dyn GameRepository,
) -> Result<Game, LedgerError> {
    let name = command.resolved_name()?;

    let game = repo
        .create_game(NewGame {
            name,
            created_at: clock.now(),
        })
        .await?;

    info!(
        correlation_id = %command.correlation_id,
        game_id = game.id,
        "game created"
    );

    Ok(game)
}

/// Handles the `AppendMove` command: records the move under the next move
/// number for its game.
///
/// # Errors
///
/// Returns `LedgerError::InvalidInput` if `game_id` is not positive (nothing
/// is written), or `LedgerError::Storage` if the insert fails.
pub async fn handle_append_move(
    command: &AppendMove,
    clock: &dyn Clock,
    repo: &dyn GameRepository,
) -> Result<MoveRecord, LedgerError> {
    command.validate()?;

    let record = repo
        .append_move(NewMove {
            game_id: command.game_id,
            x: command.x,
            y: command.y,
            color: command.color.clone(),
            captures: command.captures,
            created_at: clock.now(),
        })
        .await?;

    info!(
        correlation_id = %command.correlation_id,
        game_id = record.game_id,
        move_number = record.move_number,
        x = record.x,
        y = record.y,
        color = %record.color,
        captures = record.captures,
        "move recorded"
    );

    Ok(record)
}

/// Handles the `SaveSgf` command: replaces the stored SGF text of an
/// existing game.
///
/// # Errors
///
/// Returns `LedgerError::InvalidInput` if the SGF text contains a NUL
/// character, `LedgerError::GameNotFound` if the game does not exist, or
/// `LedgerError::Storage` if the update fails.
pub async fn handle_save_sgf(
    command: &SaveSgf,
    clock: &dyn Clock,
    repo: &dyn GameRepository,
) -> Result<Game, LedgerError> {
    command.validate()?;

    let game = repo
        .update_sgf(command.game_id, &command.sgf_text, clock.now())
        .await?
        .ok_or(LedgerError::GameNotFound(command.game_id))?;

    info!(
        correlation_id = %command.correlation_id,
        game_id = game.id,
        sgf_len = game.sgf_text.len(),
        "sgf saved"
    );

    Ok(game)
}
