//! File-backed query templates

use crate::error::TemplateError;
use dossier_domain::Qcode;
use std::fs;
use std::path::PathBuf;

/// Template file name for the person-by-qcode lookup
pub const PERSON_BY_QCODE_TEMPLATE: &str = "person-by-qcode.rq";

/// Substitution slot the templates carry for the identifier
const QCODE_SLOT: &str = "{qcode}";

/// Store of parameterized query templates, one file per lookup kind
///
/// Templates are plain text with a named `{qcode}` substitution slot. The
/// store only reads; it never writes or caches.
#[derive(Debug, Clone)]
pub struct QueryStore {
    root: PathBuf,
}

impl QueryStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory the templates are read from
    pub fn root(&self) -> &std::path::Path {
        &self.root
    }

    /// Resolve the person-by-qcode query for the given identifier
    ///
    /// Reads the template and substitutes the identifier verbatim into its
    /// `{qcode}` slot.
    ///
    /// # Errors
    /// Returns [`TemplateError::NotFound`] if the template file is missing,
    /// [`TemplateError::Io`] if it exists but cannot be read.
    pub fn person_by_qcode(&self, qcode: &Qcode) -> Result<String, TemplateError> {
        let template = self.load(PERSON_BY_QCODE_TEMPLATE)?;
        Ok(template.replace(QCODE_SLOT, qcode.as_str()))
    }

    /// Read a named template from the store
    fn load(&self, name: &str) -> Result<String, TemplateError> {
        let path = self.root.join(name);
        match fs::read_to_string(&path) {
            Ok(template) => Ok(template),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(TemplateError::NotFound(path))
            }
            Err(source) => Err(TemplateError::Io { path, source }),
        }
    }
}
