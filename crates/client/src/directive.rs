//! Search directive types and sanitization.
//!
//! # What this module handles:
//! - The caller's search directive (DICOM field name to value mapping)
//! - Splitting a directive into remote-safe and fuzzy halves
//!
//! # What this module does NOT handle:
//! - Matching the directive against returned series (see [`crate::matcher`])
//! - Serializing the directive into the registration body (see
//!   [`crate::endpoints::queries`])
//!
//! # Invariants
//! - `sanitize` partitions its input: `safe` and `fuzzy` have disjoint key
//!   sets and their union equals the input's keys.

use std::collections::BTreeMap;

/// A search directive: DICOM field names mapped to desired values,
/// e.g. `{"PatientID": "1234", "StudyDescription": "chest"}`.
///
/// Ordered so that the serialized remote query body is deterministic.
pub type SearchDirective = BTreeMap<String, String>;

/// A directive split into exact-match-safe and free-text halves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedDirective {
    /// Fields safe to send to the registry's exact-match lookup.
    pub safe: SearchDirective,
    /// Free-text fields, matched locally after retrieval instead.
    pub fuzzy: SearchDirective,
}

/// Split a directive into remote-safe and fuzzy fields.
///
/// The registry performs only exact-match lookups on structured DICOM tags,
/// so any field likely to hold partial text (patient names, descriptions)
/// must be kept out of the remote query and matched locally instead. A field
/// is fuzzy when its name contains `"Name"` or `"Description"`
/// (case-sensitive).
pub fn sanitize(directive: &SearchDirective) -> SanitizedDirective {
    let mut safe = SearchDirective::new();
    let mut fuzzy = SearchDirective::new();

    for (key, value) in directive {
        if key.contains("Name") || key.contains("Description") {
            fuzzy.insert(key.clone(), value.clone());
        } else {
            safe.insert(key.clone(), value.clone());
        }
    }

    SanitizedDirective { safe, fuzzy }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directive(pairs: &[(&str, &str)]) -> SearchDirective {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_name_and_description_fields_are_fuzzy() {
        let input = directive(&[
            ("PatientName", "doe"),
            ("StudyDescription", "chest"),
            ("SeriesDescription", "axial"),
            ("Modality", "CT"),
            ("PatientID", "1234"),
        ]);

        let split = sanitize(&input);

        assert_eq!(
            split.fuzzy,
            directive(&[
                ("PatientName", "doe"),
                ("StudyDescription", "chest"),
                ("SeriesDescription", "axial"),
            ])
        );
        assert_eq!(
            split.safe,
            directive(&[("Modality", "CT"), ("PatientID", "1234")])
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        // "PatientNAME" does not contain the exact substring "Name"
        let split = sanitize(&directive(&[("PatientNAME", "doe")]));
        assert!(split.fuzzy.is_empty());
        assert_eq!(split.safe.len(), 1);
    }

    #[test]
    fn test_empty_directive() {
        let split = sanitize(&SearchDirective::new());
        assert!(split.safe.is_empty());
        assert!(split.fuzzy.is_empty());
    }
}
