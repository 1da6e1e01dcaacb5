//! The `health` command: probe pfdcm's about/ endpoint.

use crate::args::Cli;
use crate::output::write_json;

pub async fn run(cli: &Cli) -> anyhow::Result<()> {
    let client = super::status::pfdcm_client(cli)?;
    let about = client.about().await?;
    write_json(&about, cli.output_file.as_deref())
}
