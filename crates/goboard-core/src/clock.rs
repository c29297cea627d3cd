//! Time source for record timestamps.

use chrono::{DateTime, Utc};

/// Supplies the `created_at`/`updated_at` stamps written by the ledger.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock used by the running server.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        // Postgres TIMESTAMPTZ stores microseconds; truncate so values read
        // back compare equal to the ones returned at write time.
        let now = Utc::now();
        DateTime::from_timestamp_micros(now.timestamp_micros()).unwrap_or(now)
    }
}
