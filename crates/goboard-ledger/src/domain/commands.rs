//! Commands for the game ledger.

use goboard_core::error::LedgerError;
use uuid::Uuid;

use super::{DEFAULT_GAME_NAME, MAX_GAME_NAME_LEN};

/// Command to start a new game record.
#[derive(Debug, Clone)]
pub struct CreateGame {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// Requested display name. Blank or missing names get the default.
    pub name: Option<String>,
}

impl CreateGame {
    /// Returns the name the game will be stored under.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidInput` if the trimmed name is longer than
    /// `MAX_GAME_NAME_LEN` characters or contains a NUL character.
    pub fn resolved_name(&self) -> Result<String, LedgerError> {
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();
        if name.is_empty() {
            return Ok(DEFAULT_GAME_NAME.to_owned());
        }
        reject_nul("name", name)?;
        if name.chars().count() > MAX_GAME_NAME_LEN {
            return Err(LedgerError::InvalidInput(format!(
                "name must be at most {MAX_GAME_NAME_LEN} characters"
            )));
        }
        Ok(name.to_owned())
    }
}

/// Command to record one stone placement.
#[derive(Debug, Clone)]
pub struct AppendMove {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The game the move is submitted for. Must be positive.
    pub game_id: i64,
    /// Board column.
    pub x: i32,
    /// Board row.
    pub y: i32,
    /// Stone color label.
    pub color: String,
    /// Stones removed by this move.
    pub captures: i32,
}

impl AppendMove {
    /// Checks the command before anything is written.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidInput` if `game_id` is zero or negative,
    /// or if `color` contains a NUL character.
    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.game_id <= 0 {
            return Err(LedgerError::InvalidInput(
                "missing or invalid game_id".to_owned(),
            ));
        }
        reject_nul("color", &self.color)
    }
}

/// Command to replace the SGF record of a game.
#[derive(Debug, Clone)]
pub struct SaveSgf {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The game to update.
    pub game_id: i64,
    /// The new SGF text. Stored verbatim.
    pub sgf_text: String,
}

impl SaveSgf {
    /// Checks the command before anything is written.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidInput` if `sgf_text` contains a NUL
    /// character.
    pub fn validate(&self) -> Result<(), LedgerError> {
        reject_nul("sgf", &self.sgf_text)
    }
}

// PostgreSQL text columns cannot hold U+0000.
fn reject_nul(field: &str, value: &str) -> Result<(), LedgerError> {
    if value.contains('\0') {
        return Err(LedgerError::InvalidInput(format!(
            "{field} must not contain NUL characters"
        )));
    }
    Ok(())
}
