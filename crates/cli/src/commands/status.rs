//! The `status` command: synchronous PACS status through pfdcm.

use cube_client::{PfdcmClient, SearchDirective, autocomplete_directive};

use crate::args::Cli;
use crate::output::write_json;

pub async fn run(cli: &Cli, directive: &SearchDirective) -> anyhow::Result<()> {
    let client = pfdcm_client(cli)?;
    let studies = client.pacs_status(directive).await?;
    let result = autocomplete_directive(directive, &studies)?;

    tracing::info!(
        matches = result.matches.len(),
        file_count = result.file_count,
        "PACS status complete"
    );
    write_json(&result, cli.output_file.as_deref())
}

pub(crate) fn pfdcm_client(cli: &Cli) -> anyhow::Result<PfdcmClient> {
    let url = cli
        .pfdcm_url
        .clone()
        .ok_or_else(|| anyhow::anyhow!("--pfdcm-url (or PFDCM_URL) is required"))?;
    let pacs_name = cli
        .pacs_name
        .clone()
        .unwrap_or_else(|| pacs_config::constants::DEFAULT_PACS_NAME.to_string());
    Ok(PfdcmClient::new(url, pacs_name))
}
