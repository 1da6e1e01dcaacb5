//! pfdcm intermediary endpoint tests.
//!
//! This module tests the alternate synchronous path:
//! - The about/ health probe
//! - The sync pypx status directive, including directive overrides of the
//!   default pypx flags
//! - The status=false failure envelope

mod common;

use common::*;
use cube_client::{PfdcmClient, SearchDirective};
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};

fn directive(pairs: &[(&str, &str)]) -> SearchDirective {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[tokio::test]
async fn test_about_probe() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/about/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "pfdcm", "version": "3.0.0"
        })))
        .mount(&mock_server)
        .await;

    let client = PfdcmClient::new(mock_server.uri(), "PACSDCM");
    let about = client.about().await.unwrap();
    assert_eq!(about["name"], "pfdcm");
}

#[tokio::test]
async fn test_pacs_status_merges_directive_over_defaults() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/PACS/sync/pypx/"))
        .and(body_partial_json(json!({
            "PACSservice": {"value": "PACSDCM"},
            "listenerService": {"value": "default"},
            "PACSdirective": {
                "withFeedBack": true,
                "then": "status",
                "dblogbasepath": "/home/dicom/log",
                "PatientID": "1234"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": true,
            "message": "",
            "pypx": {"data": [{
                "series": [{
                    "Modality": {"value": "CT"},
                    "NumberOfSeriesRelatedInstances": {"value": "3"}
                }]
            }]}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PfdcmClient::new(mock_server.uri(), "PACSDCM");
    let studies = client
        .pacs_status(&directive(&[("PatientID", "1234")]))
        .await
        .unwrap();

    assert_eq!(studies.len(), 1);
    assert_eq!(studies[0].series.len(), 1);
    assert_eq!(
        studies[0].series[0]["Modality"].value_as_string().unwrap(),
        "CT"
    );
}

#[tokio::test]
async fn test_pacs_status_false_surfaces_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/PACS/sync/pypx/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": false,
            "message": "Unable to reach the PACS"
        })))
        .mount(&mock_server)
        .await;

    let client = PfdcmClient::new(mock_server.uri(), "PACSDCM");
    let err = client
        .pacs_status(&directive(&[("PatientID", "1234")]))
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Remote(ref msg) if msg.contains("Unable to reach")));
}
