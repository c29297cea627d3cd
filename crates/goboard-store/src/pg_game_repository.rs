//! `PostgreSQL` implementation of the `GameRepository` trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::debug;

use goboard_core::error::LedgerError;
use goboard_core::game::{Game, MoveRecord};
use goboard_core::repository::{GameRepository, NewGame, NewMove};

const GAME_COLUMNS: &str = "id, name, sgf_text, created_at, updated_at";

const MOVE_COLUMNS: &str =
    "id, game_id, move_number, x, y, color, captures, created_at, updated_at";

#[derive(Debug, FromRow)]
struct GameRow {
    id: i64,
    name: String,
    sgf_text: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            sgf_text: row.sgf_text,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct MoveRow {
    id: i64,
    game_id: i64,
    move_number: i32,
    x: i32,
    y: i32,
    color: String,
    captures: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<MoveRow> for MoveRecord {
    fn from(row: MoveRow) -> Self {
        Self {
            id: row.id,
            game_id: row.game_id,
            move_number: row.move_number,
            x: row.x,
            y: row.y,
            color: row.color,
            captures: row.captures,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[allow(clippy::needless_pass_by_value)]
fn storage_error(err: sqlx::Error) -> LedgerError {
    LedgerError::Storage(err.to_string())
}

/// PostgreSQL-backed game repository.
#[derive(Debug, Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    /// Creates a new `PgGameRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    async fn create_game(&self, game: NewGame) -> Result<Game, LedgerError> {
        let row: GameRow = sqlx::query_as(&format!(
            "INSERT INTO games (name, sgf_text, created_at, updated_at) \
             VALUES ($1, '', $2, $2) \
             RETURNING {GAME_COLUMNS}"
        ))
        .bind(&game.name)
        .bind(game.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.into())
    }

    async fn find_game(&self, game_id: i64) -> Result<Option<Game>, LedgerError> {
        let row: Option<GameRow> =
            sqlx::query_as(&format!("SELECT {GAME_COLUMNS} FROM games WHERE id = $1"))
                .bind(game_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(storage_error)?;

        Ok(row.map(Game::from))
    }

    async fn update_sgf(
        &self,
        game_id: i64,
        sgf_text: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Game>, LedgerError> {
        let row: Option<GameRow> = sqlx::query_as(&format!(
            "UPDATE games SET sgf_text = $2, updated_at = $3 \
             WHERE id = $1 \
             RETURNING {GAME_COLUMNS}"
        ))
        .bind(game_id)
        .bind(sgf_text)
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(Game::from))
    }

    async fn append_move(&self, new_move: NewMove) -> Result<MoveRecord, LedgerError> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        // Serializes appends per game until commit. The lock is released
        // automatically when the transaction ends.
        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(new_move.game_id)
            .execute(&mut *tx)
            .await
            .map_err(storage_error)?;

        let row: MoveRow = sqlx::query_as(&format!(
            "INSERT INTO move_records \
                 (game_id, move_number, x, y, color, captures, created_at, updated_at) \
             SELECT $1, COALESCE(MAX(move_number), 0) + 1, $2, $3, $4, $5, $6, $6 \
             FROM move_records WHERE game_id = $1 \
             RETURNING {MOVE_COLUMNS}"
        ))
        .bind(new_move.game_id)
        .bind(new_move.x)
        .bind(new_move.y)
        .bind(&new_move.color)
        .bind(new_move.captures)
        .bind(new_move.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(storage_error)?;

        tx.commit().await.map_err(storage_error)?;

        debug!(
            game_id = row.game_id,
            move_number = row.move_number,
            "move record inserted"
        );

        Ok(row.into())
    }

    async fn count_moves(&self, game_id: i64) -> Result<i64, LedgerError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM move_records WHERE game_id = $1")
            .bind(game_id)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)
    }

    async fn list_moves(&self, game_id: i64) -> Result<Vec<MoveRecord>, LedgerError> {
        let rows: Vec<MoveRow> = sqlx::query_as(&format!(
            "SELECT {MOVE_COLUMNS} FROM move_records \
             WHERE game_id = $1 \
             ORDER BY move_number ASC"
        ))
        .bind(game_id)
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(MoveRecord::from).collect())
    }
}
