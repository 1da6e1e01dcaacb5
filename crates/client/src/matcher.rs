//! Local matching of a search directive against returned series.
//!
//! # What this module handles:
//! - Case-insensitive substring matching of every directive field against
//!   every series in a decoded study list
//! - Flattening matched series and accumulating the PACS-side file count
//!
//! # What this module does NOT handle:
//! - Remote exact-match querying (see [`crate::endpoints::queries`])
//! - Splitting the directive into safe/fuzzy halves (see [`crate::directive`])
//!
//! # Invariants
//! - A series matches only when every directive key matches: the AND
//!   accumulator starts true and is only ever ANDed down, never reset
//!   mid-loop.
//! - An empty directive matches no series at all.
//! - `matches` preserves the order in which series appear in the input.
//! - `file_count` sums instance counts over matched series without
//!   deduplication; a repeated series contributes repeatedly.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::directive::SearchDirective;
use crate::error::Result;
use crate::models::{StudyGroup, instance_count};

/// The outcome of matching a directive against a decoded study list.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MatchResult {
    /// Matched series, flattened to plain attribute/value pairs.
    pub matches: Vec<BTreeMap<String, serde_json::Value>>,
    /// Total `NumberOfSeriesRelatedInstances` over all matched series. Used
    /// downstream to verify file registration in CUBE.
    pub file_count: u64,
}

/// Filter and flatten series that satisfy every field of the directive.
///
/// A field matches when the series carries the directive's key and the
/// directive's value, lowercased, is a substring of the series value,
/// lowercased. Matched series keep all of their attributes, unwrapped from
/// the `{value: ...}` envelope.
///
/// A matched series without `NumberOfSeriesRelatedInstances` is a fatal
/// data-shape error; a field that merely fails to match is not.
pub fn autocomplete_directive(
    directive: &SearchDirective,
    studies: &[StudyGroup],
) -> Result<MatchResult> {
    let mut result = MatchResult::default();
    if directive.is_empty() {
        return Ok(result);
    }

    for group in studies {
        for series in &group.series {
            let mut matched = true;
            for (key, wanted) in directive {
                let field_matches = series
                    .get(key)
                    .and_then(|attr| attr.value_as_string())
                    .is_some_and(|value| {
                        value.to_lowercase().contains(&wanted.to_lowercase())
                    });
                matched = matched && field_matches;
            }
            if !matched {
                continue;
            }

            result.file_count += instance_count(series)?;
            result.matches.push(
                series
                    .iter()
                    .map(|(label, attr)| (label.clone(), attr.value.clone()))
                    .collect(),
            );
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use crate::models::{SeriesAttribute, StudyGroup};
    use serde_json::json;

    fn directive(pairs: &[(&str, &str)]) -> SearchDirective {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn series(pairs: &[(&str, serde_json::Value)]) -> crate::models::SeriesRecord {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), SeriesAttribute { value: v.clone() }))
            .collect()
    }

    fn studies() -> Vec<StudyGroup> {
        vec![StudyGroup {
            series: vec![
                series(&[
                    ("Modality", json!("ct chest")),
                    ("SeriesInstanceUID", json!("1.2.3")),
                    ("NumberOfSeriesRelatedInstances", json!("3")),
                ]),
                series(&[
                    ("Modality", json!("MR")),
                    ("SeriesInstanceUID", json!("4.5.6")),
                    ("NumberOfSeriesRelatedInstances", json!("7")),
                ]),
            ],
        }]
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let result = autocomplete_directive(&directive(&[("Modality", "CT")]), &studies()).unwrap();

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.file_count, 3);
        // flattened: wrapped values become plain values, all attributes kept
        assert_eq!(result.matches[0]["Modality"], json!("ct chest"));
        assert_eq!(result.matches[0]["SeriesInstanceUID"], json!("1.2.3"));
    }

    #[test]
    fn test_all_keys_must_match() {
        let result = autocomplete_directive(
            &directive(&[("Modality", "ct"), ("SeriesInstanceUID", "9.9.9")]),
            &studies(),
        )
        .unwrap();
        assert!(result.matches.is_empty());
        assert_eq!(result.file_count, 0);
    }

    #[test]
    fn test_empty_directive_matches_nothing() {
        let result = autocomplete_directive(&SearchDirective::new(), &studies()).unwrap();
        assert!(result.matches.is_empty());
        assert_eq!(result.file_count, 0);
    }

    #[test]
    fn test_missing_directive_key_fails_the_series() {
        let result =
            autocomplete_directive(&directive(&[("PatientID", "1234")]), &studies()).unwrap();
        assert!(result.matches.is_empty());
    }

    #[test]
    fn test_file_count_accumulates_across_matches() {
        let result =
            autocomplete_directive(&directive(&[("SeriesInstanceUID", ".")]), &studies()).unwrap();
        assert_eq!(result.matches.len(), 2);
        assert_eq!(result.file_count, 10);
    }

    #[test]
    fn test_matched_series_without_count_is_fatal() {
        let groups = vec![StudyGroup {
            series: vec![series(&[("Modality", json!("CT"))])],
        }];
        let err = autocomplete_directive(&directive(&[("Modality", "ct")]), &groups).unwrap_err();
        assert!(matches!(err, ClientError::DataShape(_)));
    }

    #[test]
    fn test_order_preserved_across_groups() {
        let groups = vec![
            StudyGroup {
                series: vec![series(&[
                    ("Modality", json!("CT")),
                    ("SeriesInstanceUID", json!("first")),
                    ("NumberOfSeriesRelatedInstances", json!("1")),
                ])],
            },
            StudyGroup {
                series: vec![series(&[
                    ("Modality", json!("CT")),
                    ("SeriesInstanceUID", json!("second")),
                    ("NumberOfSeriesRelatedInstances", json!("2")),
                ])],
            },
        ];
        let result = autocomplete_directive(&directive(&[("Modality", "ct")]), &groups).unwrap();
        assert_eq!(result.matches[0]["SeriesInstanceUID"], json!("first"));
        assert_eq!(result.matches[1]["SeriesInstanceUID"], json!("second"));
        assert_eq!(result.file_count, 3);
    }
}
