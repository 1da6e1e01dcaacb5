//! Decoding of compressed query result payloads.
//!
//! # What this module handles:
//! - Base64 decoding of the result string CUBE stores on a succeeded query
//! - Decompression under both framings the upstream service has been
//!   observed to use (zlib-wrapped and raw deflate)
//! - Canonical pretty-printing of JSON payloads
//!
//! # What this module does NOT handle:
//! - Fetching the encoded result (see [`crate::endpoints::queries`])
//! - Interpreting the decoded study list (see [`crate::matcher`])
//!
//! # Invariants
//! - An empty encoded string decodes to an empty string, never an error.
//! - Valid JSON is re-serialized pretty-printed (2-space indent) so output is
//!   stable and diffable regardless of how the server serialized it.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use flate2::read::{DeflateDecoder, ZlibDecoder};
use std::io::Read;

use crate::error::{ClientError, Result};

/// Decode a base64/deflate-compressed result payload into text.
///
/// The compression framing used by the upstream service is inconsistent
/// between server versions: some wrap the stream in a zlib header, some emit
/// raw deflate. Standard zlib is tried first, raw deflate second; only when
/// both fail is the payload rejected.
pub fn decode_and_decompress(encoded: &str) -> Result<String> {
    if encoded.is_empty() {
        return Ok(String::new());
    }

    let compressed = STANDARD
        .decode(encoded)
        .map_err(|e| ClientError::Decompression(format!("invalid base64: {e}")))?;
    let decompressed = inflate(&compressed)?;

    let text = String::from_utf8(decompressed)
        .map_err(|e| ClientError::Decompression(format!("payload is not UTF-8: {e}")))?;

    match serde_json::from_str::<serde_json::Value>(&text) {
        Ok(parsed) => serde_json::to_string_pretty(&parsed)
            .map_err(|e| ClientError::InvalidResponse(e.to_string())),
        Err(_) => Ok(text),
    }
}

fn inflate(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    if ZlibDecoder::new(compressed).read_to_end(&mut out).is_ok() {
        return Ok(out);
    }

    // Fallback: raw (headerless) deflate stream
    let mut out = Vec::new();
    DeflateDecoder::new(compressed)
        .read_to_end(&mut out)
        .map_err(|e| ClientError::Decompression(e.to_string()))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::Compression;
    use flate2::write::{DeflateEncoder, ZlibEncoder};
    use std::io::Write;

    fn zlib_encode(payload: &[u8]) -> String {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(payload).unwrap();
        STANDARD.encode(encoder.finish().unwrap())
    }

    fn deflate_encode(payload: &[u8]) -> String {
        let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(payload).unwrap();
        STANDARD.encode(encoder.finish().unwrap())
    }

    #[test]
    fn test_empty_input_decodes_to_empty_output() {
        assert_eq!(decode_and_decompress("").unwrap(), "");
    }

    #[test]
    fn test_zlib_json_is_pretty_printed() {
        let encoded = zlib_encode(br#"{"a":1}"#);
        assert_eq!(decode_and_decompress(&encoded).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_raw_deflate_fallback_yields_same_output() {
        let encoded = deflate_encode(br#"{"a":1}"#);
        assert_eq!(decode_and_decompress(&encoded).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_non_json_text_is_returned_unchanged() {
        let encoded = zlib_encode(b"plain text, not json");
        assert_eq!(
            decode_and_decompress(&encoded).unwrap(),
            "plain text, not json"
        );
    }

    #[test]
    fn test_garbage_fails_both_framings() {
        let encoded = STANDARD.encode(b"definitely not compressed");
        let err = decode_and_decompress(&encoded).unwrap_err();
        assert!(matches!(err, ClientError::Decompression(_)));
    }

    #[test]
    fn test_invalid_base64_is_a_decompression_error() {
        let err = decode_and_decompress("!!not-base64!!").unwrap_err();
        assert!(matches!(err, ClientError::Decompression(_)));
    }

    #[test]
    fn test_non_utf8_payload_is_rejected() {
        let encoded = zlib_encode(&[0xff, 0xfe, 0x00, 0x80]);
        let err = decode_and_decompress(&encoded).unwrap_err();
        assert!(matches!(err, ClientError::Decompression(_)));
    }
}
