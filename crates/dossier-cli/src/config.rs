//! CLI configuration.

use crate::cli::Cli;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Runtime settings for a lookup.
///
/// Precedence: command-line flag, then config file, then default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// SPARQL endpoint URL
    pub endpoint: String,

    /// User agent sent with every request
    pub user_agent: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Directory holding the query templates
    pub queries_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: dossier_sparql::wikidata::DEFAULT_ENDPOINT.to_string(),
            user_agent: dossier_sparql::wikidata::DEFAULT_USER_AGENT.to_string(),
            timeout_secs: dossier_sparql::wikidata::DEFAULT_TIMEOUT_SECS,
            queries_dir: PathBuf::from("queries"),
        }
    }
}

impl Config {
    /// Load settings, from a TOML file when one is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let raw = fs::read_to_string(path)?;
                Ok(toml::from_str(&raw)?)
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply command-line overrides on top of the loaded settings.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(endpoint) = &cli.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(queries_dir) = &cli.queries_dir {
            self.queries_dir = queries_dir.clone();
        }
        if let Some(timeout) = cli.timeout {
            self.timeout_secs = timeout;
        }
    }
}
