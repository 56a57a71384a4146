//! The person aggregate populated by one lookup

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// All biographical facts extracted about one queried person
///
/// Every attribute is independently optional: an absent upstream field
/// leaves the attribute unset rather than raising an error. One record is
/// created per lookup, populated once from one immutable query result, read
/// once by the renderer, then discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonRecord {
    /// Canonical resource URL for the person
    pub url: Option<String>,

    /// Display name
    pub known_as: Option<String>,

    /// Legal/birth name, may differ from the display name
    pub birth_name: Option<String>,

    /// Calendar date of birth (time of day discarded)
    pub date_of_birth: Option<NaiveDate>,

    /// Father's display name
    pub father_known_as: Option<String>,

    /// Father's date of birth
    pub father_date_of_birth: Option<NaiveDate>,

    /// Mother's display name
    pub mother_known_as: Option<String>,

    /// Mother's date of birth
    pub mother_date_of_birth: Option<NaiveDate>,

    /// Spouse's display name
    pub spouse_known_as: Option<String>,

    /// Spouse's date of birth
    pub spouse_date_of_birth: Option<NaiveDate>,

    /// Children, in upstream order
    pub children: Option<Vec<Relative>>,

    /// Siblings, in upstream order
    pub siblings: Option<Vec<Relative>>,

    /// Occupation(s), possibly comma-joined, treated as opaque text
    pub occupation: Option<String>,

    /// Education history, possibly comma-joined, treated as opaque text
    pub education: Option<String>,

    /// Criminal convictions, possibly comma-joined, treated as opaque text
    pub criminal_convictions: Option<String>,
}

impl PersonRecord {
    /// Create an empty record with no attribute set
    pub fn new() -> Self {
        Self::default()
    }
}

/// One entry in a multi-valued relation (a child or a sibling)
///
/// The date of birth stays in its raw upstream form here. An unknown date is
/// `None` (the upstream encoding is an empty string); conversion to an age
/// happens at render time, never during extraction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relative {
    /// Display name
    pub known_as: String,

    /// Raw `YYYY-MM-DDTHH:MM:SSZ` timestamp, `None` when unknown
    pub date_of_birth: Option<String>,
}
