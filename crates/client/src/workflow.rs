//! The end-to-end query workflow.
//!
//! # What this module handles:
//! - Wiring sanitize → submit-or-reuse → poll → decode → match into the one
//!   operation external callers invoke
//!
//! # What this module does NOT handle:
//! - Writing the result anywhere (the caller owns persistence)
//! - Swallowing errors (every fatal error from the steps propagates)
//!
//! # Invariants
//! - Only the safe half of the directive is sent to the registry; the full
//!   original directive is matched locally against the decoded series.
//! - An empty decoded payload yields an empty [`MatchResult`], not an error.

use chrono::Utc;
use tracing::{debug, info};

use crate::client::CubeClient;
use crate::decode::decode_and_decompress;
use crate::directive::{SearchDirective, sanitize};
use crate::error::{ClientError, Result};
use crate::matcher::{MatchResult, autocomplete_directive};
use crate::models::StudyGroup;

/// Run the full search workflow against CUBE.
///
/// When `title` is `None` a unique time-based title is generated, so each
/// invocation registers a fresh query; passing the same explicit title twice
/// reuses the first invocation's query instead.
pub async fn run_query(
    client: &CubeClient,
    directive: &SearchDirective,
    title: Option<&str>,
) -> Result<MatchResult> {
    let sanitized = sanitize(directive);
    if !sanitized.fuzzy.is_empty() {
        debug!(
            fields = ?sanitized.fuzzy.keys().collect::<Vec<_>>(),
            "Free-text fields held back from the remote query"
        );
    }

    let generated;
    let title = match title {
        Some(title) => title,
        None => {
            generated = generate_title();
            &generated
        }
    };

    let outcome = client.create_or_reuse_query(title, &sanitized.safe).await?;
    info!(id = %outcome.id(), reused = outcome.was_reused(), "Using query");

    let encoded = client.wait_for_result(outcome.id()).await?;
    let decoded = decode_and_decompress(&encoded)?;
    let studies = parse_study_groups(&decoded)?;

    autocomplete_directive(directive, &studies)
}

fn generate_title() -> String {
    format!("search_{}", Utc::now().format("%Y%m%d%H%M%S%3f"))
}

/// Interpret a decoded payload as a study-group list.
///
/// The registry encodes "no results" as an empty payload or an empty JSON
/// object rather than an empty list.
fn parse_study_groups(decoded: &str) -> Result<Vec<StudyGroup>> {
    if decoded.is_empty() {
        return Ok(Vec::new());
    }
    let value: serde_json::Value = serde_json::from_str(decoded)
        .map_err(|e| ClientError::InvalidResponse(format!("decoded result is not JSON: {e}")))?;
    match value {
        serde_json::Value::Null => Ok(Vec::new()),
        serde_json::Value::Object(map) if map.is_empty() => Ok(Vec::new()),
        value @ serde_json::Value::Array(_) => serde_json::from_value(value).map_err(|e| {
            ClientError::InvalidResponse(format!("decoded result is not a study list: {e}"))
        }),
        other => Err(ClientError::InvalidResponse(format!(
            "expected a study list, got: {other}"
        ))),
    }
}
