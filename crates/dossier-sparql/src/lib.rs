//! Dossier SPARQL Client Layer
//!
//! Implementations of the `QueryClient` trait from `dossier-domain`.
//!
//! # Clients
//!
//! - `MockClient`: deterministic mock for testing
//! - `WikidataClient`: the Wikidata query endpoint over HTTPS
//!
//! # Examples
//!
//! ```
//! use dossier_sparql::MockClient;
//! use dossier_domain::{QueryClient, ResultRecord};
//!
//! # tokio_test::block_on(async {
//! let record: ResultRecord = [("itemLabel", "Lionel Messi")].into_iter().collect();
//! let client = MockClient::returning(record);
//! let result = client.execute("SELECT ...").await.unwrap();
//! assert_eq!(result.get("itemLabel"), Some("Lionel Messi"));
//! # });
//! ```

#![warn(missing_docs)]

pub mod wikidata;

use async_trait::async_trait;
use dossier_domain::{QueryClient, ResultRecord};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use wikidata::WikidataClient;

/// Errors that can occur while executing a query
#[derive(Error, Debug)]
pub enum SparqlError {
    /// Network or transport error
    #[error("communication error: {0}")]
    Communication(String),

    /// Endpoint answered with a non-success HTTP status
    #[error("endpoint returned HTTP {0}")]
    Status(u16),

    /// Response body did not match the SPARQL JSON results envelope
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Query succeeded but matched nothing
    #[error("query returned no results")]
    EmptyResult,
}

/// Mock query client for deterministic testing
///
/// Returns a preset result record without making any network call. An empty
/// mock reproduces the empty-result-set failure; a failing mock reproduces a
/// transport failure.
///
/// # Examples
///
/// ```
/// use dossier_sparql::{MockClient, SparqlError};
/// use dossier_domain::QueryClient;
///
/// # tokio_test::block_on(async {
/// let client = MockClient::failing();
/// let result = client.execute("SELECT ...").await;
/// assert!(matches!(result, Err(SparqlError::Communication(_))));
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockClient {
    record: Option<ResultRecord>,
    fail: bool,
    call_count: Arc<Mutex<usize>>,
}

impl MockClient {
    /// Create a mock that returns the given record for every query
    pub fn returning(record: ResultRecord) -> Self {
        Self {
            record: Some(record),
            ..Self::default()
        }
    }

    /// Create a mock whose queries match nothing
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a mock whose queries fail at the transport level
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Get the number of times execute was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl QueryClient for MockClient {
    type Error = SparqlError;

    async fn execute(&self, _query: &str) -> Result<ResultRecord, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        if self.fail {
            return Err(SparqlError::Communication("mock transport failure".to_string()));
        }

        self.record.clone().ok_or(SparqlError::EmptyResult)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_preset_record() {
        let record: ResultRecord = [("itemLabel", "Lionel Messi")].into_iter().collect();
        let client = MockClient::returning(record);

        let result = client.execute("any query").await.unwrap();
        assert_eq!(result.get("itemLabel"), Some("Lionel Messi"));
    }

    #[tokio::test]
    async fn test_mock_empty_is_empty_result() {
        let client = MockClient::empty();
        let result = client.execute("any query").await;
        assert!(matches!(result, Err(SparqlError::EmptyResult)));
    }

    #[tokio::test]
    async fn test_mock_failing_is_communication_error() {
        let client = MockClient::failing();
        let result = client.execute("any query").await;
        assert!(matches!(result, Err(SparqlError::Communication(_))));
    }

    #[tokio::test]
    async fn test_mock_counts_calls() {
        let client = MockClient::empty();
        assert_eq!(client.call_count(), 0);

        let _ = client.execute("one").await;
        let _ = client.execute("two").await;
        assert_eq!(client.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_clone_shares_call_count() {
        let client = MockClient::empty();
        let clone = client.clone();

        let _ = client.execute("one").await;

        // Both share the same counter through the Arc
        assert_eq!(client.call_count(), 1);
        assert_eq!(clone.call_count(), 1);
    }
}
