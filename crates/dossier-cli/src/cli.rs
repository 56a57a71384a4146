//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Dossier - look up biographical facts about a person on Wikidata.
#[derive(Debug, Parser)]
#[command(name = "dossier")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Wikidata Qcode for a human being (e.g. Q615)
    pub qcode: String,

    /// SPARQL endpoint URL
    #[arg(long)]
    pub endpoint: Option<String>,

    /// Directory holding the query templates
    #[arg(long)]
    pub queries_dir: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
