//! Common test utilities for integration tests.
//!
//! This module provides shared helpers and re-exports commonly used types
//! for testing the CUBE client against a wiremock server.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)
//! - Test-specific assertions or test logic

use base64::{Engine as _, engine::general_purpose::STANDARD};
use flate2::Compression;
use flate2::write::{DeflateEncoder, ZlibEncoder};
use secrecy::SecretString;
use std::io::Write;

// Re-export commonly used types for test convenience
// These are used via `use common::*;` in test files
#[allow(unused_imports)]
pub use cube_client::{ClientError, Credentials, CubeClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Credentials accepted by every mock in these tests.
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new("chris", SecretString::new("chris1234".to_string().into()))
}

/// A CUBE client pointed at a mock server, with short polling.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> CubeClient {
    CubeClient::builder()
        .base_url(server.uri())
        .credentials("chris", SecretString::new("chris1234".to_string().into()))
        .build()
        .unwrap()
}

/// Compress a payload with standard zlib framing and base64-encode it.
#[allow(dead_code)]
pub fn zlib_encode(payload: &[u8]) -> String {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(payload).unwrap();
    STANDARD.encode(encoder.finish().unwrap())
}

/// Compress a payload as a raw deflate stream and base64-encode it.
#[allow(dead_code)]
pub fn deflate_encode(payload: &[u8]) -> String {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(payload).unwrap();
    STANDARD.encode(encoder.finish().unwrap())
}

/// A collection+json envelope holding one item with the given data fields.
#[allow(dead_code)]
pub fn collection_item(fields: &[(&str, serde_json::Value)]) -> serde_json::Value {
    serde_json::json!({
        "collection": {
            "items": [{
                "data": fields
                    .iter()
                    .map(|(name, value)| serde_json::json!({"name": name, "value": value}))
                    .collect::<Vec<_>>()
            }]
        }
    })
}
