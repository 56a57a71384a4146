//! Dossier CLI library - argument parsing, configuration, and errors.

pub mod cli;
pub mod config;
pub mod error;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
