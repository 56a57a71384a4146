//! Lookup orchestration

use crate::error::FinderError;
use crate::extract;
use crate::query::QueryStore;
use crate::report::ReportRenderer;
use async_trait::async_trait;
use dossier_domain::{Clock, Qcode, QueryClient, SystemClock};
use tracing::{debug, info};

/// A lookup strategy: turn one raw input string into one rendered report
///
/// The single seam for lookup kinds. `QcodeFinder` is the one concrete
/// strategy today; a name-based strategy would be a second implementation
/// of this trait, not a subclass of anything.
#[async_trait]
pub trait PersonLookup {
    /// Run the full pipeline for one input and return the report text
    async fn lookup(&self, input: &str) -> Result<String, FinderError>;
}

/// Identifier-based lookup against a graph query endpoint
///
/// Pipeline: validate the identifier, resolve the query template, execute
/// the query once, extract the person record, render the report. Every
/// failure along the way aborts the lookup; nothing is caught and
/// suppressed.
pub struct QcodeFinder<C> {
    client: C,
    queries: QueryStore,
    clock: Box<dyn Clock + Send + Sync>,
}

impl<C> QcodeFinder<C>
where
    C: QueryClient + Send + Sync,
    C::Error: std::fmt::Display + Send,
{
    /// Create a finder over the given endpoint client and template store
    pub fn new(client: C, queries: QueryStore) -> Self {
        Self {
            client,
            queries,
            clock: Box::new(SystemClock),
        }
    }

    /// Replace the clock ages are computed against
    pub fn with_clock(mut self, clock: impl Clock + Send + Sync + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Run one lookup for a raw identifier string
    pub async fn lookup(&self, input: &str) -> Result<String, FinderError> {
        let qcode = Qcode::parse(input)?;
        info!("Looking up {}", qcode);

        let query = self.queries.person_by_qcode(&qcode)?;
        debug!("Resolved query ({} chars)", query.len());

        let record = self
            .client
            .execute(&query)
            .await
            .map_err(|e| FinderError::Endpoint(e.to_string()))?;
        debug!("Result record carries {} fields", record.len());

        let person = extract::person_record(&record)?;
        let report = ReportRenderer::new(self.clock.as_ref()).render(&qcode, &person)?;

        info!("Lookup complete for {}", qcode);
        Ok(report)
    }
}

#[async_trait]
impl<C> PersonLookup for QcodeFinder<C>
where
    C: QueryClient + Send + Sync,
    C::Error: std::fmt::Display + Send,
{
    async fn lookup(&self, input: &str) -> Result<String, FinderError> {
        QcodeFinder::lookup(self, input).await
    }
}
