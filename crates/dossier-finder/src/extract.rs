//! Field extraction from a query result record
//!
//! One rule per PersonRecord attribute. Every rule is pure and reads zero or
//! one field from the same immutable result record, so the set of rules is
//! idempotent and order-independent; they are merged once into a fresh
//! record rather than mutating a shared instance.

use crate::error::FinderError;
use chrono::{NaiveDate, NaiveDateTime};
use dossier_domain::{PersonRecord, Relative, ResultRecord};
use serde_json::Value;

/// Upstream timestamp format for every date-valued field
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Build a person record from one query result
///
/// Absent fields leave the corresponding attribute unset. A malformed
/// timestamp or relation array is fatal and names the offending field.
pub fn person_record(record: &ResultRecord) -> Result<PersonRecord, FinderError> {
    Ok(PersonRecord {
        url: scalar(record, "item"),
        known_as: scalar(record, "itemLabel"),
        birth_name: scalar(record, "birthName"),
        date_of_birth: date(record, "DOB")?,
        father_known_as: scalar(record, "fatherKnownAs"),
        father_date_of_birth: date(record, "fatherDOB")?,
        mother_known_as: scalar(record, "motherKnownAs"),
        mother_date_of_birth: date(record, "motherDOB")?,
        spouse_known_as: scalar(record, "spouseKnownAs"),
        spouse_date_of_birth: date(record, "spouseDOB")?,
        children: relatives(record, "children", "childKnownAs", "childDOB")?,
        siblings: relatives(record, "siblings", "siblingKnownAs", "siblingDOB")?,
        occupation: scalar(record, "occupations"),
        education: non_empty_scalar(record, "educationHistory"),
        criminal_convictions: non_empty_scalar(record, "criminalConvictions"),
    })
}

/// Copy a scalar field verbatim if present
fn scalar(record: &ResultRecord, field: &str) -> Option<String> {
    record.get(field).map(String::from)
}

/// Copy a scalar field only if present and non-empty
///
/// Aggregated fields can bind an empty string when nothing matched; an empty
/// value leaves the attribute unset rather than setting it to "".
fn non_empty_scalar(record: &ResultRecord, field: &str) -> Option<String> {
    record.get(field).filter(|v| !v.is_empty()).map(String::from)
}

/// Parse a timestamp field down to its calendar date if present
fn date(record: &ResultRecord, field: &str) -> Result<Option<NaiveDate>, FinderError> {
    record
        .get(field)
        .map(|value| parse_timestamp(field, value))
        .transpose()
}

/// Parse one upstream timestamp, discarding the time of day
pub(crate) fn parse_timestamp(field: &str, value: &str) -> Result<NaiveDate, FinderError> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT)
        .map(|dt| dt.date())
        .map_err(|e| FinderError::MalformedField {
            field: field.to_string(),
            value: value.to_string(),
            detail: format!("expected timestamp in {} format: {}", TIMESTAMP_FORMAT, e),
        })
}

/// Decode a JSON-encoded relation array if present
///
/// Each element must carry its name key; the date key may be absent or
/// empty, both meaning "unknown". Sub-record dates stay raw here and only
/// become ages at render time.
fn relatives(
    record: &ResultRecord,
    field: &str,
    name_key: &str,
    dob_key: &str,
) -> Result<Option<Vec<Relative>>, FinderError> {
    let Some(raw) = record.get(field) else {
        return Ok(None);
    };

    let rows: Vec<Value> =
        serde_json::from_str(raw).map_err(|e| FinderError::MalformedField {
            field: field.to_string(),
            value: raw.to_string(),
            detail: format!("expected a JSON array of objects: {}", e),
        })?;

    let mut parsed = Vec::with_capacity(rows.len());
    for row in &rows {
        let known_as = row
            .get(name_key)
            .and_then(|v| v.as_str())
            .ok_or_else(|| FinderError::MalformedField {
                field: field.to_string(),
                value: row.to_string(),
                detail: format!("missing or non-string {:?}", name_key),
            })?
            .to_string();

        let date_of_birth = row
            .get(dob_key)
            .and_then(|v| v.as_str())
            .filter(|v| !v.is_empty())
            .map(String::from);

        parsed.push(Relative {
            known_as,
            date_of_birth,
        });
    }

    Ok(Some(parsed))
}
