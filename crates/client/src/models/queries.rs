//! Query job identity and submission outcome.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Remote-assigned identifier of a registered query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryId(String);

impl QueryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of the registration-or-reuse protocol.
///
/// The registry has no native upsert: a duplicate title is rejected with a
/// 400, and the client falls back to a lookup by title. Both paths end with
/// the same id, but callers can still observe which one was taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new query was registered under the given title.
    Created(QueryId),
    /// The title was already registered; the existing query's id is reused.
    Reused(QueryId),
}

impl SubmitOutcome {
    pub fn id(&self) -> &QueryId {
        match self {
            Self::Created(id) | Self::Reused(id) => id,
        }
    }

    pub fn was_reused(&self) -> bool {
        matches!(self, Self::Reused(_))
    }
}
