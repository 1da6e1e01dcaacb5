//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see the `commands` module).
//! - Does not validate URLs or credentials (see the `pacs-config` loader).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pacsquery")]
#[command(about = "Query a remote PACS through CUBE or pfdcm", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  pacsquery query --directive '{\"PatientID\": \"1234\"}'\n  pacsquery query --directive '{\"StudyDescription\": \"chest\"}' --output-file matches.json\n  pacsquery status --directive '{\"AccessionNumber\": \"98765\"}'\n  pacsquery health\n"
)]
pub struct Cli {
    /// Base URL of the CUBE PACS queries collection
    /// (e.g. https://cube.example.org/api/v1/pacs/1)
    #[arg(long, global = true, env = "CUBE_URL")]
    pub cube_url: Option<String>,

    /// Username for CUBE basic auth
    #[arg(short, long, global = true, env = "CUBE_USERNAME")]
    pub username: Option<String>,

    /// Password for CUBE basic auth
    #[arg(short, long, global = true, env = "CUBE_PASSWORD")]
    pub password: Option<String>,

    /// Total polling budget in seconds before giving up on a query
    #[arg(long, global = true, env = "CUBE_POLL_TIMEOUT")]
    pub poll_timeout: Option<u64>,

    /// Delay in seconds between two status polls
    #[arg(long, global = true, env = "CUBE_POLL_INTERVAL")]
    pub poll_interval: Option<u64>,

    /// Endpoint URL of pfdcm (e.g. http://pfdcm:4005/api/v1/)
    #[arg(long, global = true, env = "PFDCM_URL")]
    pub pfdcm_url: Option<String>,

    /// Name of the PACS service registered with pfdcm
    #[arg(long, global = true, env = "PFDCM_PACS_NAME")]
    pub pacs_name: Option<String>,

    /// Write results to FILE instead of stdout
    #[arg(long, global = true, value_name = "FILE")]
    pub output_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register a PACS query with CUBE, await its result, and match the directive
    Query {
        /// Search directive as a JSON object, e.g. '{"PatientID": "1234"}'
        #[arg(long)]
        directive: String,

        /// Register (or reuse) the query under this fixed title instead of a
        /// generated one
        #[arg(long)]
        title: Option<String>,
    },

    /// Query PACS status synchronously through pfdcm and match the directive
    Status {
        /// Search directive as a JSON object, e.g. '{"PatientID": "1234"}'
        #[arg(long)]
        directive: String,
    },

    /// Check that pfdcm is reachable
    Health,
}
