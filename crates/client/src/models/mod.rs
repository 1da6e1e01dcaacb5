//! Response models for the CUBE and pfdcm APIs.

mod collection;
mod pfdcm;
mod queries;
mod series;

pub use collection::{Collection, CollectionError, DataField, Envelope, Item};
pub use pfdcm::{PfdcmResponse, PypxPayload};
pub use queries::{QueryId, SubmitOutcome};
pub use series::{SeriesAttribute, SeriesRecord, StudyGroup};

pub(crate) use series::instance_count;
