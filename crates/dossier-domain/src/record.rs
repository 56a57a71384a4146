//! The flat field→value mapping one query execution returns

use std::collections::HashMap;

/// The result of one graph query execution
///
/// A flat mapping from binding name to value string. A value is either a
/// scalar or a JSON-encoded array of sub-record objects (for multi-valued
/// relations); the extractors decide which. Absent fields are simply not in
/// the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultRecord {
    fields: HashMap<String, String>,
}

impl ResultRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field value, replacing any previous value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Get a field value, or `None` if the field is absent
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Whether the record carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Number of fields present
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl<F: Into<String>, V: Into<String>> FromIterator<(F, V)> for ResultRecord {
    fn from_iter<I: IntoIterator<Item = (F, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(f, v)| (f.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_present_field() {
        let mut record = ResultRecord::new();
        record.insert("itemLabel", "Lionel Messi");
        assert_eq!(record.get("itemLabel"), Some("Lionel Messi"));
    }

    #[test]
    fn test_get_absent_field() {
        let record = ResultRecord::new();
        assert_eq!(record.get("itemLabel"), None);
    }

    #[test]
    fn test_from_iterator() {
        let record: ResultRecord =
            [("item", "http://www.wikidata.org/entity/Q615"), ("DOB", "1987-06-24T00:00:00Z")]
                .into_iter()
                .collect();
        assert_eq!(record.len(), 2);
        assert!(!record.is_empty());
    }
}
