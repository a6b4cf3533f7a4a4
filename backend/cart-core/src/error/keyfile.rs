use std::path::PathBuf;

use common::ErrorLocation;
use models::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KeyfileError {
    #[error("Keyfile Read Error: {path}: {source} {location}")]
    Read {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Keyfile Parse Error: {path}: {reason} {location}")]
    Parse {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Keyfile Unknown Key Error: '{name}' not in {path} (available: {available}) {location}")]
    UnknownKey {
        location: ErrorLocation,
        path: PathBuf,
        name: String,
        available: String,
    },

    #[error("Keyfile Validation Error: {path}: {source} {location}")]
    Validation {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: ModelError,
    },
}
