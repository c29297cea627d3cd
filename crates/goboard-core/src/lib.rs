//! goboard Core — shared domain types and abstractions.
//!
//! This crate defines the ledger entities, the error taxonomy and the
//! traits that the store and ledger crates depend on. It contains no
//! infrastructure code.

pub mod clock;
pub mod error;
pub mod game;
pub mod repository;
