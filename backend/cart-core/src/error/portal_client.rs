use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PortalClientError {
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("Server Error: HTTP {status} - {message} {location}")]
    Server {
        status: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("Missing Field Error: {field} absent from {endpoint} response {location}")]
    MissingField {
        field: &'static str,
        endpoint: String,
        location: ErrorLocation,
    },
}

impl PortalClientError {
    /// Status code of a non-2xx response, if that is what this error is.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            PortalClientError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the request hit the client timeout set with `--timeout`.
    pub fn is_timeout(&self) -> bool {
        matches!(self, PortalClientError::Http { is_timeout: true, .. })
    }
}

impl From<reqwest::Error> for PortalClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        PortalClientError::Http {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for PortalClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        PortalClientError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
