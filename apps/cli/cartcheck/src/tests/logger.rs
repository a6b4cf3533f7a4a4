// Unit tests for logger initialization
// Only one test may install the global logger; the rest use initialize_internal
// on paths that fail before installation.

use crate::error::CartcheckError;
use crate::logger::{initialize, initialize_internal};

use log::LevelFilter;

/// **VALUE**: Verifies that calling initialize() twice doesn't fail.
///
/// **BUG THIS CATCHES**: Would catch removal of the Once/AtomicBool guards,
/// which makes fern refuse a second global logger.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A writable log file
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("cartcheck.log");

    // WHEN: Calling initialize twice
    let first = initialize(LevelFilter::Debug, Some(&log_path));
    let second = initialize(LevelFilter::Debug, Some(&log_path));

    // THEN: Both succeed and the file exists
    assert!(first.is_ok(), "First initialization should succeed");
    assert!(second.is_ok(), "Second initialization should be a no-op");
    assert!(log_path.exists(), "Log file should be created");
}

/// **VALUE**: Verifies an unopenable log file is an error, not a panic.
#[test]
fn given_invalid_log_file_when_initializing_then_returns_logger_error() {
    let invalid = std::path::Path::new("/dev/null/invalid-dir/cartcheck.log");

    let result = initialize_internal(LevelFilter::Info, Some(invalid));

    match result {
        Err(CartcheckError::Logger { message, .. }) => {
            assert!(message.contains("Failed to open log file"), "{message}");
        }
        other => panic!("Expected Logger error, got {other:?}"),
    }
}
