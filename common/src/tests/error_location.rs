use crate::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every keyfile, portal and verification error carries an
/// ErrorLocation. If capture breaks, a failed run no longer says where it failed.
///
/// **BUG THIS CATCHES**: Would catch if file or line extraction breaks.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN/WHEN: Capturing the current location
    let expected_line = line!() + 1;
    let location = ErrorLocation::from(Location::caller());

    // THEN: Should capture this file and line
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(location.line, expected_line, "Should capture correct line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the "[file:line:column]" display format.
///
/// **WHY THIS MATTERS**: Error messages printed at the end of a failed run end with
/// this suffix. A format change makes them harder to grep.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: An ErrorLocation
    let location = ErrorLocation::from(Location::caller());

    // WHEN: Formatting as string
    let formatted = format!("{location}");

    // THEN: Should produce "[file:line:column]"
    assert!(formatted.starts_with('['), "Should start with '['");
    assert!(formatted.ends_with(']'), "Should end with ']'");
    assert!(formatted.contains(&format!(":{}:", location.line)));
    assert_eq!(
        formatted.matches(':').count(),
        2,
        "Should have exactly 2 colons"
    );
}

/// **VALUE**: Verifies that `#[track_caller]` helpers report their call sites.
///
/// **BUG THIS CATCHES**: Would catch if location propagation through `From` impls
/// and helper constructors stops pointing at the real error site.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    let first = capture_location();
    let second = capture_location();

    assert_eq!(first.file, second.file, "Should have same file");
    assert_eq!(first.line + 1, second.line, "Lines should be sequential");
}
