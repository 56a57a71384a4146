//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Infrastructure implementations live in other crates.

use crate::record::ResultRecord;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for executing graph queries against a remote endpoint
///
/// Implemented by the infrastructure layer (dossier-sparql). One call is one
/// attempt: implementations do not retry, and any transport failure, bad
/// response, or empty result set is an error.
#[async_trait]
pub trait QueryClient {
    /// Error type for query execution
    type Error;

    /// Execute a query and return the single result record
    async fn execute(&self, query: &str) -> Result<ResultRecord, Self::Error>;
}

/// Trait for the current-date source
///
/// Age computation depends on "today"; keeping the date behind a trait makes
/// it deterministic under test.
pub trait Clock {
    /// The current calendar date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for deterministic tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(
    /// The date every call to `today` returns
    pub NaiveDate,
);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
