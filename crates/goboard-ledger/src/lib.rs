//! goboard — game ledger.
//!
//! Owns the lifecycle of games and their move records: creating games,
//! appending moves with sequential numbering, saving SGF records and
//! answering history queries. Board rules are left to the client.

pub mod application;
pub mod domain;
