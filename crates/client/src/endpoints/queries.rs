//! PACS query registration and polling against the CUBE registry.
//!
//! # What this module handles:
//! - Registering a named query (`POST {base}/queries/`)
//! - Idempotent reuse of an existing query by title on a duplicate-title 400
//! - Polling a query to completion and returning its encoded result
//!
//! # What this module does NOT handle:
//! - Decoding the result payload (see [`crate::decode`])
//! - Directive sanitization (callers pass the already-safe fields)
//!
//! # Invariants
//! - Registering the same title twice yields the same [`QueryId`]: the
//!   registry rejects duplicates with a 400 whose message contains
//!   `"already registered"`, and that signal triggers a lookup-by-title
//!   fallback instead of an error.
//! - `succeeded` without a result payload is an invariant violation of the
//!   registry and is never retried.
//! - Transport failures surface immediately; only status checks repeat.

use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::auth::Credentials;
use crate::directive::SearchDirective;
use crate::error::{ClientError, Result};
use crate::models::{Envelope, QueryId, SubmitOutcome};

/// Substring of the 400 error message that marks a duplicate title.
const ALREADY_REGISTERED: &str = "already registered";

/// Register a query under `title`, or reuse the existing one with that title.
///
/// The query body is the JSON-serialized safe fields of the directive. Any
/// 4xx/5xx other than the duplicate-title 400 is a fatal submission error.
pub async fn create_or_reuse_query(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    title: &str,
    query: &SearchDirective,
) -> Result<SubmitOutcome> {
    debug!(title, "Registering PACS query");

    let url = format!("{base_url}/queries/");
    let query_json = serde_json::to_string(query)
        .map_err(|e| ClientError::Config(format!("directive is not serializable: {e}")))?;
    let body = [("title", title.to_string()), ("query", query_json)];

    let request = client.post(&url).form(&body);
    let response = credentials.apply(request).send().await?;
    let status = response.status();

    if status.as_u16() == 400 {
        let envelope: Envelope = response.json().await.unwrap_or_default();
        let message = envelope.error_message().to_string();
        if message.contains(ALREADY_REGISTERED) {
            debug!(title, "Title already registered, reusing existing query");
            let id = find_query_id_by_title(client, base_url, credentials, title).await?;
            return Ok(SubmitOutcome::Reused(id));
        }
        return Err(ClientError::Submission {
            status: 400,
            message,
        });
    }
    if !status.is_success() {
        return Err(ClientError::Submission {
            status: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        });
    }

    let envelope: Envelope = response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;
    let id = envelope
        .first_field("id")
        .and_then(|f| f.value_as_string())
        .ok_or(ClientError::MissingId)?;
    Ok(SubmitOutcome::Created(QueryId::new(id)))
}

/// Find an existing query's id by scanning the listing for its title.
async fn find_query_id_by_title(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    title: &str,
) -> Result<QueryId> {
    let url = format!("{base_url}/queries/");
    let request = client.get(&url);
    let response = credentials.apply(request).send().await?;
    let envelope = parse_envelope(response).await?;

    for item in &envelope.collection.items {
        let title_matches = item
            .field("title")
            .and_then(|f| f.value_as_string())
            .is_some_and(|t| t == title);
        if title_matches {
            if let Some(id) = item.field("id").and_then(|f| f.value_as_string()) {
                return Ok(QueryId::new(id));
            }
        }
    }
    Err(ClientError::LookupFailed {
        title: title.to_string(),
    })
}

/// Poll a query until it succeeds, returning the encoded result payload.
///
/// The loop is a two-state machine: every observed status other than
/// `succeeded` counts as still pending until `timeout` elapses. The timeout
/// is cooperative: it is checked once per iteration, so a slow status request
/// can overshoot it by up to one round trip.
pub async fn wait_for_result(
    client: &Client,
    base_url: &str,
    credentials: &Credentials,
    id: &QueryId,
    timeout: Duration,
    interval: Duration,
) -> Result<String> {
    let url = format!("{base_url}/queries/{id}/");
    let start = Instant::now();
    let mut last_status = String::from("unknown");

    loop {
        let request = client.get(&url);
        let response = credentials.apply(request).send().await?;
        let envelope = parse_envelope(response).await?;

        let status = envelope
            .first_field("status")
            .and_then(|f| f.value_as_string());
        let result = envelope
            .first_field("result")
            .and_then(|f| f.value_as_string());

        if status.as_deref() == Some("succeeded") {
            debug!(%id, "Query succeeded");
            return result.ok_or(ClientError::IncompleteResult);
        }
        if let Some(status) = status {
            last_status = status;
        }

        if start.elapsed() > timeout {
            return Err(ClientError::PollTimeout {
                timeout,
                last_status,
            });
        }

        debug!(%id, status = %last_status, "Query still pending, retrying in {:?}", interval);
        tokio::time::sleep(interval).await;
    }
}

async fn parse_envelope(response: reqwest::Response) -> Result<Envelope> {
    let status = response.status();
    if !status.is_success() {
        return Err(ClientError::Api {
            status: status.as_u16(),
            url: response.url().to_string(),
            message: response.text().await.unwrap_or_default(),
        });
    }
    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
