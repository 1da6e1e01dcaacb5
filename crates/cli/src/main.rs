//! pacsquery - query a remote PACS through CUBE or pfdcm.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute the query workflow via the shared client library.
//! - Write the match result as JSON to a file or stdout.
//!
//! Does NOT handle:
//! - Core query logic or HTTP implementation (see `crates/client`).
//! - PACS retrieval; this tool only queries and counts.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap
//!   env defaults.

mod args;
mod commands;
mod error;
mod output;

use args::Cli;
use clap::Parser;
use error::{ExitCode, exit_code_for};
use pacs_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match commands::run(&cli).await {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(exit_code_for(&e).as_i32());
        }
    }
}
