// Unit tests for registry lookups
// Tests exact-name lookup, misses, reverse lookup and the generated constants

use crate::error::RegistryError;
use crate::registry::{
    category, contains, distinct_codes, entries, entries_for, get, is_empty, is_registered, len,
    lookup, names_for, synonyms,
};
use crate::table::names;

use common::StatusCategory;

use std::collections::HashSet;

/// **VALUE**: Verifies a representative name from every class resolves to its code.
///
/// **BUG THIS CATCHES**: Would catch if the build script emitted names or codes in the
/// wrong column, or if the name index is built from the wrong field.
#[test]
fn given_registered_names_when_get_then_returns_codes() {
    assert_eq!(get("PROCEED").unwrap(), 100);
    assert_eq!(get("OK").unwrap(), 200);
    assert_eq!(get("IM_USED").unwrap(), 226);
    assert_eq!(get("PERM_REDIRECT").unwrap(), 308);
    assert_eq!(get("NOT_FOUND").unwrap(), 404);
    assert_eq!(get("TEAPOT").unwrap(), 418);
    assert_eq!(get("INTERNAL_ERROR").unwrap(), 500);
    assert_eq!(get("NETWORK_CONNECT_TIMEOUT").unwrap(), 599);
}

/// **VALUE**: Verifies that unknown names fail with NotFound and report the caller.
///
/// **WHY THIS MATTERS**: `get` is the only fallible operation of the registry. The error
/// must name the missing key and point at the line that asked for it.
///
/// **BUG THIS CATCHES**: Would catch if `#[track_caller]` is dropped from `get` or
/// `lookup`, or if a miss returns a default code instead of an error.
#[test]
fn given_unknown_name_when_get_then_returns_not_found() {
    // GIVEN: A name that is not registered
    // WHEN: Looking it up
    let result = get("NOT_A_REAL_STATUS");

    // THEN: NotFound carrying the name and this file's location
    match result {
        Err(RegistryError::NotFound { name, location }) => {
            assert_eq!(name, "NOT_A_REAL_STATUS");
            assert!(location.file.contains("tests"), "Should report the caller");
        }
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[test]
fn given_not_found_error_when_formatted_then_includes_name_and_location() {
    let err = lookup("MISSING").unwrap_err();
    let message = err.to_string();

    assert!(message.contains("Not Found Error"));
    assert!(message.contains("'MISSING'"));
    assert!(message.contains("registry.rs"));
}

/// Lookup is exact: no case folding, no trimming.
#[test]
fn given_name_with_wrong_case_or_whitespace_when_get_then_not_found() {
    assert!(get("ok").is_err());
    assert!(get("Not_Found").is_err());
    assert!(get(" OK").is_err());
    assert!(get("").is_err());
    assert!(!contains("teapot"));
    assert!(contains("TEAPOT"));
}

/// **VALUE**: Verifies the synonym groups resolve to one shared code.
///
/// **BUG THIS CATCHES**: Would catch if a duplicate-code row were dropped or "corrected"
/// to a neighbouring code.
#[test]
fn given_synonym_names_when_get_then_share_code() {
    assert_eq!(get("METHOD_FAILURE").unwrap(), 420);
    assert_eq!(get("CALM").unwrap(), 420);
    assert_eq!(get("UNAVAILABLE_FOR_LEGAL_REASONS").unwrap(), 451);
    assert_eq!(get("REDIRECT").unwrap(), 451);
    assert_eq!(get("TOKEN_EXPIRED").unwrap(), 498);
    assert_eq!(get("CLIENT_CLOSED").unwrap(), 499);
    assert_eq!(get("TOKEN_REQUIRED").unwrap(), 499);
}

#[test]
fn given_synonym_code_when_names_for_then_returns_all_in_table_order() {
    assert_eq!(names_for(420), vec!["METHOD_FAILURE", "CALM"]);
    assert_eq!(names_for(451), vec!["UNAVAILABLE_FOR_LEGAL_REASONS", "REDIRECT"]);
    assert_eq!(names_for(499), vec!["CLIENT_CLOSED", "TOKEN_REQUIRED"]);
    assert_eq!(names_for(498), vec!["TOKEN_EXPIRED"]);
}

#[test]
fn given_unregistered_code_when_reverse_lookup_then_empty() {
    assert!(entries_for(425).is_empty());
    assert!(names_for(600).is_empty());
    assert!(!is_registered(425));
    assert!(!is_registered(99));
    assert!(is_registered(226));
}

/// **VALUE**: Verifies the synonym listing contains exactly the shared codes.
///
/// **BUG THIS CATCHES**: Would catch if the code index lost a row while grouping, or if
/// singleton codes leaked into `synonyms()`.
#[test]
fn given_registry_when_listing_synonyms_then_only_shared_codes() {
    let shared: Vec<u16> = synonyms().map(|(code, _)| code).collect();
    assert_eq!(shared, vec![420, 451, 499]);

    for (_, group) in synonyms() {
        assert_eq!(group.len(), 2);
    }
}

/// **VALUE**: Verifies name count, distinct codes and the 100..=599 range over the whole table.
///
/// **BUG THIS CATCHES**: Would catch a dropped or duplicated row in `status_codes.toml`.
#[test]
fn given_registry_when_enumerated_then_counts_and_range_hold() {
    assert_eq!(len(), 80);
    assert!(!is_empty());
    assert_eq!(entries().count(), len());

    let unique_names: HashSet<&str> = entries().map(|entry| entry.name()).collect();
    assert_eq!(unique_names.len(), len(), "Names must be unique");

    let codes: Vec<u16> = distinct_codes().collect();
    assert_eq!(codes.len(), 77);
    assert!(codes.windows(2).all(|pair| pair[0] < pair[1]), "Ascending");

    assert!(entries().all(|entry| (100..=599).contains(&entry.code())));
}

/// **VALUE**: Verifies every generated constant agrees with the table.
///
/// **BUG THIS CATCHES**: Would catch if the build script wrote the `names` module from a
/// different ordering or source than `STATUS_TABLE`.
#[test]
fn given_named_constants_when_compared_with_get_then_agree() {
    let constants = [
        ("PROCEED", names::PROCEED),
        ("SWITCHING", names::SWITCHING),
        ("NA_INFO", names::NA_INFO),
        ("OTHER", names::OTHER),
        ("NOT_ALLOWED", names::NOT_ALLOWED),
        ("CALM", names::CALM),
        ("METHOD_FAILURE", names::METHOD_FAILURE),
        ("REDIRECT", names::REDIRECT),
        ("TOKEN_REQUIRED", names::TOKEN_REQUIRED),
        ("UNKNOWN_ERROR", names::UNKNOWN_ERROR),
        ("NETWORK_READ_TIMEOUT", names::NETWORK_READ_TIMEOUT),
    ];

    for (name, value) in constants {
        assert_eq!(get(name).unwrap(), value, "{name}");
    }
}

#[test]
fn given_raw_codes_when_category_then_derived_or_range_error() {
    assert_eq!(category(404).unwrap(), StatusCategory::ClientError);
    assert_eq!(category(200).unwrap(), StatusCategory::Success);
    assert_eq!(category(101).unwrap(), StatusCategory::Informational);
    assert_eq!(category(503).unwrap(), StatusCategory::ServerError);
    // Unregistered but in range
    assert_eq!(category(425).unwrap(), StatusCategory::ClientError);

    let err = category(600).unwrap_err();
    assert!(matches!(err, RegistryError::Range(_)));
    assert!(err.to_string().contains("600"));
}
