use cart_core::error::CoreError;

use common::ErrorLocation;

use thiserror::Error;

/// Errors that end a cartcheck run.
#[derive(Debug, Error)]
pub enum CartcheckError {
    /// Logger could not be installed
    #[error("Logger Error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    /// Report could not be written to stdout
    #[error("Report Error: {message} {location}")]
    Report {
        message: String,
        location: ErrorLocation,
    },

    /// Keyfile, portal or verification failure
    #[error(transparent)]
    Core(#[from] CoreError),
}
