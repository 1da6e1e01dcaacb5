//! The `query` command: the full CUBE workflow.

use secrecy::SecretString;
use std::time::Duration;

use cube_client::{CubeClient, SearchDirective, run_query};
use pacs_config::ConfigLoader;

use crate::args::Cli;
use crate::output::write_json;

pub async fn run(cli: &Cli, directive: &SearchDirective, title: Option<&str>) -> anyhow::Result<()> {
    let config = ConfigLoader::new()
        .base_url(cli.cube_url.clone())
        .username(cli.username.clone())
        .password(
            cli.password
                .clone()
                .map(|p| SecretString::new(p.into())),
        )
        .poll_timeout(cli.poll_timeout.map(Duration::from_secs))
        .poll_interval(cli.poll_interval.map(Duration::from_secs))
        .build()?;

    let client = CubeClient::from_config(&config)?;
    let result = run_query(&client, directive, title).await?;

    tracing::info!(
        matches = result.matches.len(),
        file_count = result.file_count,
        "Query complete"
    );
    write_json(&result, cli.output_file.as_deref())
}
