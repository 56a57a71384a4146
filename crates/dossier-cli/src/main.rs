//! Dossier - command-line lookup of biographical facts on Wikidata.

use clap::Parser;
use dossier_cli::{Cli, CliError, Config};
use dossier_finder::{FinderError, QcodeFinder, QueryStore};
use dossier_sparql::WikidataClient;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        if matches!(e, CliError::Finder(FinderError::InvalidQcode(_))) {
            eprintln!("Please provide a Wikidata Qcode for a human being as an argument");
            eprintln!("Usage example: \"dossier Q615\"");
        }
        std::process::exit(1);
    }
}

async fn run() -> dossier_cli::Result<()> {
    // Parse CLI arguments; clap enforces the single-identifier contract
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    let client = WikidataClient::new(&config.endpoint)
        .with_user_agent(&config.user_agent)
        .with_timeout(Duration::from_secs(config.timeout_secs));
    let finder = QcodeFinder::new(client, QueryStore::new(&config.queries_dir));

    let report = finder.lookup(&cli.qcode).await?;
    print!("{}", report);

    Ok(())
}
