//! CUBE PACS query client.
//!
//! This crate provides a client for the asynchronous PACS query API of CUBE
//! (the ChRIS backend) and for the pfdcm intermediary service. It covers the
//! full search workflow: sanitizing a search directive, registering (or
//! reusing) a named query, polling it to completion, decoding the compressed
//! result payload, and matching the directive against the returned series.

mod auth;
pub mod client;
pub mod decode;
pub mod directive;
pub mod error;
pub mod matcher;
pub mod models;
pub mod workflow;

pub mod endpoints;

pub use auth::Credentials;
pub use client::builder::CubeClientBuilder;
pub use client::{CubeClient, PfdcmClient};
pub use decode::decode_and_decompress;
pub use directive::{SanitizedDirective, SearchDirective, sanitize};
pub use error::{ClientError, Result};
pub use matcher::{MatchResult, autocomplete_directive};
pub use models::{QueryId, SeriesAttribute, SeriesRecord, StudyGroup, SubmitOutcome};
pub use workflow::run_query;
