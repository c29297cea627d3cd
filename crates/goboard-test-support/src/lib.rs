//! Shared test doubles and utilities for the goboard game ledger.

mod clock;
mod repository;

pub use clock::{FixedClock, fixed_now};
pub use repository::{FailingGameRepository, InMemoryGameRepository};
