//! Writing results to stdout or a file.

use anyhow::Context;
use std::path::Path;

/// Serialize a value as pretty JSON to `output_file`, or stdout when absent.
pub fn write_json<T: serde::Serialize>(value: &T, output_file: Option<&Path>) -> anyhow::Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("serializing result")?;
    match output_file {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("Wrote result to {}", path.display());
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
