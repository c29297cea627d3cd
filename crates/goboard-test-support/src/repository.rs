//! Test repositories — `GameRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use goboard_core::error::LedgerError;
use goboard_core::game::{Game, MoveRecord};
use goboard_core::repository::{GameRepository, NewGame, NewMove};

#[derive(Debug, Default)]
struct Tables {
    games: Vec<Game>,
    moves: Vec<MoveRecord>,
    next_game_id: i64,
    next_move_id: i64,
}

/// A working repository backed by in-process vectors. Ids start at 1 like a
/// fresh `BIGSERIAL` sequence, and every append runs under a single lock, so
/// move numbering stays contiguous under concurrent use.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    tables: Mutex<Tables>,
}

impl InMemoryGameRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every stored move, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn all_moves(&self) -> Vec<MoveRecord> {
        self.tables.lock().unwrap().moves.clone()
    }

    /// Returns a snapshot of every stored game, in insertion order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn all_games(&self) -> Vec<Game> {
        self.tables.lock().unwrap().games.clone()
    }
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn create_game(&self, game: NewGame) -> Result<Game, LedgerError> {
        let mut tables = self.tables.lock().unwrap();
        tables.next_game_id += 1;
        let game = Game {
            id: tables.next_game_id,
            name: game.name,
            sgf_text: String::new(),
            created_at: game.created_at,
            updated_at: game.created_at,
        };
        tables.games.push(game.clone());
        Ok(game)
    }

    async fn find_game(&self, game_id: i64) -> Result<Option<Game>, LedgerError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables.games.iter().find(|g| g.id == game_id).cloned())
    }

    async fn update_sgf(
        &self,
        game_id: i64,
        sgf_text: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Game>, LedgerError> {
        let mut tables = self.tables.lock().unwrap();
        Ok(tables
            .games
            .iter_mut()
            .find(|g| g.id == game_id)
            .map(|game| {
                sgf_text.clone_into(&mut game.sgf_text);
                game.updated_at = updated_at;
                game.clone()
            }))
    }

    async fn append_move(&self, new_move: NewMove) -> Result<MoveRecord, LedgerError> {
        let mut tables = self.tables.lock().unwrap();
        let existing = tables
            .moves
            .iter()
            .filter(|m| m.game_id == new_move.game_id)
            .count();
        let move_number = i32::try_from(existing + 1)
            .map_err(|_| LedgerError::Storage("move number overflow".into()))?;
        tables.next_move_id += 1;
        let record = MoveRecord {
            id: tables.next_move_id,
            game_id: new_move.game_id,
            move_number,
            x: new_move.x,
            y: new_move.y,
            color: new_move.color,
            captures: new_move.captures,
            created_at: new_move.created_at,
            updated_at: new_move.created_at,
        };
        tables.moves.push(record.clone());
        Ok(record)
    }

    async fn count_moves(&self, game_id: i64) -> Result<i64, LedgerError> {
        let tables = self.tables.lock().unwrap();
        let count = tables.moves.iter().filter(|m| m.game_id == game_id).count();
        i64::try_from(count).map_err(|_| LedgerError::Storage("move count overflow".into()))
    }

    async fn list_moves(&self, game_id: i64) -> Result<Vec<MoveRecord>, LedgerError> {
        let tables = self.tables.lock().unwrap();
        let mut moves: Vec<MoveRecord> = tables
            .moves
            .iter()
            .filter(|m| m.game_id == game_id)
            .cloned()
            .collect();
        moves.sort_by_key(|m| m.move_number);
        Ok(moves)
    }
}

/// A repository that always returns a storage error. Useful for testing
/// error-handling paths.
#[derive(Debug)]
pub struct FailingGameRepository;

fn connection_refused() -> LedgerError {
    LedgerError::Storage("connection refused".into())
}

#[async_trait]
impl GameRepository for FailingGameRepository {
    async fn create_game(&self, _game: NewGame) -> Result<Game, LedgerError> {
        Err(connection_refused())
    }

    async fn find_game(&self, _game_id: i64) -> Result<Option<Game>, LedgerError> {
        Err(connection_refused())
    }

    async fn update_sgf(
        &self,
        _game_id: i64,
        _sgf_text: &str,
        _updated_at: DateTime<Utc>,
    ) -> Result<Option<Game>, LedgerError> {
        Err(connection_refused())
    }

    async fn append_move(&self, _new_move: NewMove) -> Result<MoveRecord, LedgerError> {
        Err(connection_refused())
    }

    async fn count_moves(&self, _game_id: i64) -> Result<i64, LedgerError> {
        Err(connection_refused())
    }

    async fn list_moves(&self, _game_id: i64) -> Result<Vec<MoveRecord>, LedgerError> {
        Err(connection_refused())
    }
}
