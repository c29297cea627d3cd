//! Ledger entities.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A single recorded game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Store-generated identifier, immutable once assigned.
    pub id: i64,
    /// Display label.
    pub name: String,
    /// Serialized game record. Empty until saved.
    pub sgf_text: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Whether an SGF record has been saved for this game.
    #[must_use]
    pub fn has_sgf(&self) -> bool {
        !self.sgf_text.is_empty()
    }
}

/// One persisted stone placement.
///
/// Serializes to the wire shape returned by the move history endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// Store-generated identifier.
    pub id: i64,
    /// The game this move was submitted for.
    pub game_id: i64,
    /// 1-based position of the move within its game.
    pub move_number: i32,
    /// Board column.
    pub x: i32,
    /// Board row.
    pub y: i32,
    /// Stone color label, "black" or "white" by convention.
    pub color: String,
    /// Stones removed by this move, as reported by the client.
    pub captures: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}
