//! Decoded pypx study/series models.
//!
//! # What this module handles:
//! - The study-group list found in a decoded query result and in pfdcm's
//!   `pypx.data` payload
//! - Scalar access to wrapped series attributes
//!
//! # What this module does NOT handle:
//! - Matching series against a directive (see [`crate::matcher`])
//!
//! # Invariants
//! - Every series attribute is wrapped as `{"value": ...}`; pypx adds tag and
//!   label metadata alongside, which is ignored here.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::collection::scalar_to_string;
use crate::error::{ClientError, Result};

/// DICOM attribute name of the per-series instance count.
pub(crate) const INSTANCE_COUNT_ATTR: &str = "NumberOfSeriesRelatedInstances";

/// One study group: the series belonging to a single study.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudyGroup {
    #[serde(default)]
    pub series: Vec<SeriesRecord>,
}

/// A series record: attribute names mapped to wrapped values.
pub type SeriesRecord = BTreeMap<String, SeriesAttribute>;

/// A single wrapped attribute value, `{"value": ...}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeriesAttribute {
    #[serde(default)]
    pub value: serde_json::Value,
}

impl SeriesAttribute {
    /// The value as a string, coercing numbers. pypx serializes most DICOM
    /// attributes as strings but leaves some counts numeric.
    pub fn value_as_string(&self) -> Option<String> {
        scalar_to_string(&self.value)
    }
}

/// Parse `NumberOfSeriesRelatedInstances` from a series.
///
/// The remote service's contract is that the field is always present on every
/// series; a missing or non-numeric value is a data-shape violation.
pub(crate) fn instance_count(series: &SeriesRecord) -> Result<u64> {
    let attr = series.get(INSTANCE_COUNT_ATTR).ok_or_else(|| {
        ClientError::DataShape(format!("series is missing {INSTANCE_COUNT_ATTR}"))
    })?;
    attr.value_as_string()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .ok_or_else(|| {
            ClientError::DataShape(format!(
                "{INSTANCE_COUNT_ATTR} is not an integer: {}",
                attr.value
            ))
        })
}
