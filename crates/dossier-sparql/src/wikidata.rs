//! Wikidata Query Service Client
//!
//! Talks to the public Wikidata SPARQL endpoint over HTTPS and flattens the
//! JSON results envelope into the flat `ResultRecord` the extractors read.
//!
//! One call is one attempt. There is no retry, no backoff, and no partial
//! recovery: any transport failure, non-success status, malformed envelope,
//! or empty result set aborts the lookup.
//!
//! # Examples
//!
//! ```no_run
//! use dossier_sparql::WikidataClient;
//!
//! // Client for the public endpoint with the default user agent
//! let client = WikidataClient::default_endpoint();
//! ```

use crate::SparqlError;
use async_trait::async_trait;
use dossier_domain::{QueryClient, ResultRecord};
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// The public Wikidata query endpoint
pub const DEFAULT_ENDPOINT: &str = "https://query.wikidata.org/sparql";

/// Default timeout for query requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent sent with every request, per Wikimedia etiquette
pub const DEFAULT_USER_AGENT: &str = concat!(
    "dossier/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/your-org/dossier)"
);

/// Client for a SPARQL query endpoint
///
/// Issues a single GET per query, asks for JSON-formatted results, and
/// consumes only the first binding of the first result row.
pub struct WikidataClient {
    endpoint: String,
    user_agent: String,
    client: reqwest::Client,
}

/// SPARQL JSON results envelope (the parts we read)
#[derive(Deserialize)]
struct SparqlResponse {
    results: SparqlResults,
}

#[derive(Deserialize)]
struct SparqlResults {
    bindings: Vec<HashMap<String, SparqlBinding>>,
}

/// One bound variable; `type` and `datatype` are not needed here
#[derive(Deserialize)]
struct SparqlBinding {
    value: String,
}

impl WikidataClient {
    /// Create a new client for the given endpoint
    ///
    /// # Parameters
    ///
    /// - `endpoint`: SPARQL endpoint URL (e.g. `https://query.wikidata.org/sparql`)
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .unwrap();

        Self {
            endpoint: endpoint.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            client,
        }
    }

    /// Create a client for the public Wikidata endpoint
    pub fn default_endpoint() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// Override the user agent sent with every request
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = reqwest::Client::builder().timeout(timeout).build().unwrap();
        self
    }

    /// The endpoint this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a query and return the first binding of the first result row
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the endpoint is unreachable or the request times out
    /// - the endpoint answers with a non-success status
    /// - the body is not a SPARQL JSON results envelope
    /// - the result set is empty
    pub async fn execute(&self, query: &str) -> Result<ResultRecord, SparqlError> {
        debug!("Executing query against {} ({} chars)", self.endpoint, query.len());

        let response = self
            .client
            .get(&self.endpoint)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .header(reqwest::header::ACCEPT, "application/sparql-results+json")
            .query(&[("query", query), ("format", "json")])
            .send()
            .await
            .map_err(|e| SparqlError::Communication(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(SparqlError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SparqlError::Communication(format!("failed to read body: {}", e)))?;

        first_binding(&body)
    }
}

impl Default for WikidataClient {
    fn default() -> Self {
        Self::default_endpoint()
    }
}

#[async_trait]
impl QueryClient for WikidataClient {
    type Error = SparqlError;

    async fn execute(&self, query: &str) -> Result<ResultRecord, Self::Error> {
        WikidataClient::execute(self, query).await
    }
}

/// Flatten the first binding of a SPARQL JSON results body
fn first_binding(body: &str) -> Result<ResultRecord, SparqlError> {
    let response: SparqlResponse = serde_json::from_str(body)
        .map_err(|e| SparqlError::InvalidResponse(format!("JSON parse error: {}", e)))?;

    let binding = response
        .results
        .bindings
        .into_iter()
        .next()
        .ok_or(SparqlError::EmptyResult)?;

    debug!("First binding carries {} fields", binding.len());

    Ok(binding
        .into_iter()
        .map(|(field, bound)| (field, bound.value))
        .collect())
}
