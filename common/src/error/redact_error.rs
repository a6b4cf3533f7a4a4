use crate::ErrorLocation;

use thiserror::Error as ThisError;

/// Raised when a redacted value is asked to leave the process through serde.
#[derive(Debug, ThisError)]
pub enum RedactError {
    #[error("Serialization Refused: {type_name} must be exposed explicitly {location}")]
    SerializationRefused {
        type_name: &'static str,
        location: ErrorLocation,
    },
}
