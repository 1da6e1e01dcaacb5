//! pfdcm intermediary endpoints.
//!
//! # What this module handles:
//! - The `about/` health probe
//! - The synchronous `PACS/sync/pypx/` status directive
//!
//! # What this module does NOT handle:
//! - Matching the returned study groups (see [`crate::matcher`])
//!
//! # Invariants
//! - Caller-supplied directive fields override the default pypx flags.
//! - An envelope with `status: false` surfaces its message as a remote error.

use reqwest::Client;
use serde_json::{Value, json};
use tracing::debug;

use crate::directive::SearchDirective;
use crate::error::{ClientError, Result};
use crate::models::PfdcmResponse;

/// Probe pfdcm's `about/` endpoint, returning its info document.
pub async fn about(client: &Client, base_url: &str) -> Result<Value> {
    let url = format!("{base_url}about/");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|e| ClientError::Connection {
            service: "pfdcm",
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            url,
            message: response.text().await.unwrap_or_default(),
        });
    }
    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

/// Run a synchronous pypx status directive against a named PACS.
///
/// Returns the study-group list from the `pypx.data` block.
pub async fn pacs_status(
    client: &Client,
    base_url: &str,
    pacs_name: &str,
    directive: &SearchDirective,
) -> Result<Vec<crate::models::StudyGroup>> {
    let url = format!("{base_url}PACS/sync/pypx/");

    let mut pacs_directive = json!({
        "withFeedBack": true,
        "then": "status",
        "thenArgs": "",
        "dblogbasepath": "/home/dicom/log",
        "json_response": false,
    });
    for (key, value) in directive {
        pacs_directive[key] = json!(value);
    }
    let body = json!({
        "PACSservice": {"value": pacs_name},
        "listenerService": {"value": "default"},
        "PACSdirective": pacs_directive,
    });
    debug!(pacs_name, "Running synchronous pypx status directive");

    let response = client
        .post(&url)
        .json(&body)
        .send()
        .await
        .map_err(|e| ClientError::Connection {
            service: "pfdcm",
            source: e,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            url,
            message: response.text().await.unwrap_or_default(),
        });
    }

    let envelope: PfdcmResponse = response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
    if !envelope.status {
        return Err(ClientError::Remote(envelope.message));
    }
    Ok(envelope.pypx.map(|p| p.data).unwrap_or_default())
}
