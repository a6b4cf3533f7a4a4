//! `.env` loading ahead of argument parsing, so `CARTCHECK_KEYFILE` can live there.

use std::path::{Path, PathBuf};

/// Load `.env` from the working directory or its ancestors.
///
/// `Ok(None)` when there is no file; that is the normal case.
pub fn load() -> Result<Option<PathBuf>, dotenvy::Error> {
    found(dotenvy::dotenv())
}

/// Load a specific env file.
pub fn load_from(path: &Path) -> Result<Option<PathBuf>, dotenvy::Error> {
    found(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

fn found(result: Result<PathBuf, dotenvy::Error>) -> Result<Option<PathBuf>, dotenvy::Error> {
    match result {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
