//! Dossier Domain Layer
//!
//! This crate contains the core domain model for dossier: the biographical
//! facts gathered about one person, the validated identifier that names that
//! person in the knowledge graph, and the boundary traits the lookup
//! pipeline is built against.
//!
//! ## Key Concepts
//!
//! - **Qcode**: a validated Wikidata identifier (`Q` followed by digits)
//! - **ResultRecord**: the flat field→value mapping one query execution returns
//! - **PersonRecord**: the aggregate of all extracted facts, every field optional
//! - **Relative**: a nested name + optional raw date inside children/siblings
//! - **Clock**: injectable time source so age computation is deterministic in tests
//!
//! ## Architecture
//!
//! Infrastructure implementations (the SPARQL endpoint client, the query
//! template store) live in other crates and plug in through the traits
//! defined here.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod age;
pub mod person;
pub mod qcode;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use age::age_on;
pub use person::{PersonRecord, Relative};
pub use qcode::{Qcode, QcodeError};
pub use record::ResultRecord;
pub use traits::{Clock, FixedClock, QueryClient, SystemClock};
