//! Command implementations and dispatch.

mod health;
mod query;
mod status;

use anyhow::Context;
use cube_client::SearchDirective;

use crate::args::{Cli, Commands};

/// Dispatch the parsed CLI to its command implementation.
pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Query { directive, title } => {
            let directive = parse_directive(directive)?;
            query::run(cli, &directive, title.as_deref()).await
        }
        Commands::Status { directive } => {
            let directive = parse_directive(directive)?;
            status::run(cli, &directive).await
        }
        Commands::Health => health::run(cli).await,
    }
}

fn parse_directive(raw: &str) -> anyhow::Result<SearchDirective> {
    serde_json::from_str(raw).context("parsing --directive as a JSON object of strings")
}
