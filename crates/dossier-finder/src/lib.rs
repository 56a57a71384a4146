//! Dossier Finder
//!
//! The extraction and rendering pipeline behind a person lookup.
//!
//! # Overview
//!
//! Given a raw identifier, the finder validates it, resolves the
//! parameterized query for it from a file-backed template store, executes
//! that query once through a `QueryClient`, extracts a fixed set of optional
//! biographical fields from the single result record, and renders the
//! ordered text report.
//!
//! # Architecture
//!
//! ```text
//! raw input → Qcode → QueryStore → QueryClient → ResultRecord
//!                                   → extract → PersonRecord → ReportRenderer
//! ```
//!
//! # Example Usage
//!
//! ```no_run
//! use dossier_finder::{QcodeFinder, QueryStore};
//! use dossier_sparql::WikidataClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = WikidataClient::default_endpoint();
//! let finder = QcodeFinder::new(client, QueryStore::new("queries"));
//!
//! let report = finder.lookup("Q615").await?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod extract;
mod finder;
mod query;
mod report;

pub use error::{FinderError, TemplateError};
pub use extract::person_record;
pub use finder::{PersonLookup, QcodeFinder};
pub use query::{QueryStore, PERSON_BY_QCODE_TEMPLATE};
pub use report::ReportRenderer;
