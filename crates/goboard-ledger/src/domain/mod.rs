//! Ledger commands and naming rules.

pub mod commands;

/// Name given to games created without one.
pub const DEFAULT_GAME_NAME: &str = "Untitled game";

/// Longest accepted game name, in characters.
pub const MAX_GAME_NAME_LEN: usize = 100;
