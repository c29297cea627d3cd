//! goboard Store — PostgreSQL persistence for games and move records.

pub mod migrations;
pub mod pg_game_repository;
