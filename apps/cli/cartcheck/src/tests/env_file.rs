// Unit tests for .env loading

use crate::env_file::load_from;

use std::io::Write;

use tempfile::NamedTempFile;

/// **VALUE**: Verifies a found env file is reported by path and its variables set.
///
/// **WHY THIS MATTERS**: main logs which file was loaded; a silent load makes a
/// stray `.env` pointing CARTCHECK_KEYFILE elsewhere hard to spot.
#[test]
fn given_env_file_when_loaded_then_returns_path_and_sets_variables() {
    // GIVEN: An env file with a variable unique to this test
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "CARTCHECK_ENV_FILE_TEST_MARKER=loaded").unwrap();

    // WHEN: Loading it
    let result = load_from(file.path());

    // THEN: The path comes back and the variable is visible
    assert_eq!(result.unwrap(), Some(file.path().to_path_buf()));
    assert_eq!(
        std::env::var("CARTCHECK_ENV_FILE_TEST_MARKER").as_deref(),
        Ok("loaded")
    );
}

/// **VALUE**: Verifies a missing env file is not an error.
#[test]
fn given_missing_env_file_when_loaded_then_returns_none() {
    let dir = tempfile::tempdir().unwrap();

    let result = load_from(&dir.path().join(".env"));

    assert!(matches!(result, Ok(None)));
}
