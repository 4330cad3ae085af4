use status_registry::{
    RegistryError, StatusCategory, distinct_codes, entries, get, is_empty, len, lookup,
};

use std::collections::BTreeSet;

/// Every name the registry must carry, with its code.
const EXPECTED: [(&str, u16); 80] = [
    ("PROCEED", 100),
    ("SWITCHING", 101),
    ("PROCESSING", 102),
    ("OK", 200),
    ("CREATED", 201),
    ("ACCEPTED", 202),
    ("NA_INFO", 203),
    ("NO_CONTENT", 204),
    ("RESET_CONTENT", 205),
    ("PARTIAL_CONTENT", 206),
    ("MULTI_STATUS", 207),
    ("ALREADY_REPORTED", 208),
    ("IM_USED", 226),
    ("MULTIPLE_CHOICES", 300),
    ("MOVED", 301),
    ("FOUND", 302),
    ("OTHER", 303),
    ("NOT_MODIFIED", 304),
    ("USE_PROXY", 305),
    ("SWITCH_PROXY", 306),
    ("TEMP_REDIRECT", 307),
    ("PERM_REDIRECT", 308),
    ("BAD_REQUEST", 400),
    ("UNAUTHORIZED", 401),
    ("PAYMENT_REQUIRED", 402),
    ("FORBIDDEN", 403),
    ("NOT_FOUND", 404),
    ("NOT_ALLOWED", 405),
    ("NOT_ACCEPTABLE", 406),
    ("PROXY_AUTH_REQUIRED", 407),
    ("REQUEST_TIMEOUT", 408),
    ("CONFLICT", 409),
    ("GONE", 410),
    ("LENGTH_REQUIRED", 411),
    ("PRECONDITION_FAILED", 412),
    ("ENTITY_TOO_LARGE", 413),
    ("URI_TOO_LONG", 414),
    ("UNSUPPORTED_MEDIA_TYPE", 415),
    ("RANGE_NOT_SATISFIABLE", 416),
    ("EXPECTATION_FAILED", 417),
    ("TEAPOT", 418),
    ("AUTH_TIMEOUT", 419),
    ("METHOD_FAILURE", 420),
    ("CALM", 420),
    ("MISDIRECTED", 421),
    ("UNPROCESSABLE_REQUEST", 422),
    ("LOCKED", 423),
    ("FAILED_DEPENDENCY", 424),
    ("UPGRADE_REQUIRED", 426),
    ("PRECONDITION_REQUIRED", 428),
    ("TOO_MANY_REQUESTS", 429),
    ("HEADER_FIELDS_TOO_LARGE", 431),
    ("LOGIN_TIMEOUT", 440),
    ("NO_RESPONSE", 444),
    ("RETRY_WITH", 449),
    ("PARENTAL_CONTROLS", 450),
    ("UNAVAILABLE_FOR_LEGAL_REASONS", 451),
    ("REDIRECT", 451),
    ("HEADER_TOO_LARGE", 494),
    ("CERT_ERROR", 495),
    ("NO_CERT", 496),
    ("HTTP_TO_HTTPS", 497),
    ("TOKEN_EXPIRED", 498),
    ("CLIENT_CLOSED", 499),
    ("TOKEN_REQUIRED", 499),
    ("INTERNAL_ERROR", 500),
    ("NOT_IMPLEMENTED", 501),
    ("BAD_GATEWAY", 502),
    ("SERVICE_UNAVAILABLE", 503),
    ("GATEWAY_TIMEOUT", 504),
    ("HTTP_VERSION_NOT_SUPPORTED", 505),
    ("VARIANT_ALSO_NEGOTIATES", 506),
    ("INSUFFICIENT_STORAGE", 507),
    ("LOOP_DETECTED", 508),
    ("BANDWIDTH_LIMIT_EXCEEDED", 509),
    ("NOT_EXTENDED", 510),
    ("NETWORK_AUTH_REQUIRED", 511),
    ("UNKNOWN_ERROR", 520),
    ("NETWORK_READ_TIMEOUT", 598),
    ("NETWORK_CONNECT_TIMEOUT", 599),
];

/// **VALUE**: Verifies the complete name → code table through the public API.
///
/// **WHY THIS MATTERS**: The registry has no logic to speak of; the table IS the contract.
/// A single typo in `status_codes.toml` changes a wire code every caller relies on.
///
/// **BUG THIS CATCHES**: Would catch any renamed, re-numbered, missing or extra row.
#[test]
fn given_full_table_when_each_name_looked_up_then_code_matches() {
    for (name, code) in EXPECTED {
        assert_eq!(get(name).unwrap(), code, "{name}");
    }

    assert_eq!(len(), EXPECTED.len(), "No names beyond the expected table");
    assert!(!is_empty());
}

#[test]
fn given_full_table_when_enumerated_then_order_and_pairs_match() {
    let listed: Vec<(&str, u16)> = entries().map(|e| (e.name(), e.code())).collect();
    assert_eq!(listed, EXPECTED.to_vec());
}

#[test]
fn given_full_table_when_codes_collected_then_distinct_codes_agree() {
    let expected: BTreeSet<u16> = EXPECTED.iter().map(|(_, code)| *code).collect();
    let actual: BTreeSet<u16> = distinct_codes().collect();

    assert_eq!(actual, expected);
    assert_eq!(actual.len(), 77);
}

#[test]
fn given_unknown_name_when_looked_up_from_another_crate_then_not_found() {
    let err = lookup("NOT_A_REAL_STATUS").unwrap_err();

    assert!(matches!(err, RegistryError::NotFound { .. }));
    assert!(err.to_string().contains("NOT_A_REAL_STATUS"));
}

#[test]
fn given_representative_codes_when_categorized_then_match_classes() {
    assert_eq!(StatusCategory::of(404), Some(StatusCategory::ClientError));
    assert_eq!(StatusCategory::of(200), Some(StatusCategory::Success));
    assert_eq!(StatusCategory::of(101), Some(StatusCategory::Informational));
    assert_eq!(StatusCategory::of(503), Some(StatusCategory::ServerError));
}
