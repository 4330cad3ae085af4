use status_registry::get;
use status_registry::logger::{LOG_FILE_NAME, initialize};

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: A consumer may wire logging from several setup paths. A second
/// call must not try to install a second global logger.
///
/// **BUG THIS CATCHES**: Would catch if the installed-state guard is removed, causing fern
/// to fail when setting a global logger twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A writable temporary directory
    let temp_dir = tempfile::tempdir().unwrap();

    // WHEN: Calling initialize twice, then logging through a lookup miss
    let result1 = initialize(temp_dir.path());
    let result2 = initialize(temp_dir.path());
    let _ = get("NOT_A_REAL_STATUS");

    // THEN: Both succeed and the log file exists
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
}
