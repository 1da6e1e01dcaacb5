//! pfdcm response envelope models.

use serde::Deserialize;

use super::series::StudyGroup;

/// Envelope returned by pfdcm's synchronous pypx endpoint.
#[derive(Debug, Deserialize)]
pub struct PfdcmResponse {
    /// False means the directive was rejected; `message` says why.
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub pypx: Option<PypxPayload>,
}

/// The pypx block carrying study groups.
#[derive(Debug, Default, Deserialize)]
pub struct PypxPayload {
    #[serde(default)]
    pub data: Vec<StudyGroup>,
}
