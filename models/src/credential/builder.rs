use crate::error::model_error::ModelError;
use crate::{CredentialEntry, ErrorLocation};

use common::RedactedSecret;

use std::panic::Location;

use url::Url;

/// Builder for validated CredentialEntry instances.
#[derive(Debug, Default)]
pub struct CredentialEntryBuilder {
    name: Option<String>,
    server: Option<String>,
    key: Option<String>,
    secret: Option<RedactedSecret>,
}

impl CredentialEntryBuilder {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_secret(mut self, secret: RedactedSecret) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Build the CredentialEntry with validation.
    #[track_caller]
    pub fn build(self) -> Result<CredentialEntry, ModelError> {
        let name = self.name.ok_or_else(|| ModelError::Validation {
            message: String::from("Entry name is required"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if name.is_empty() {
            return Err(ModelError::Validation {
                message: String::from("Entry name cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let server = self.server.ok_or_else(|| ModelError::Validation {
            message: format!("Server is required for '{name}'"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let server = Url::parse(&server).map_err(|e| ModelError::Validation {
            message: format!("Invalid server URL for '{name}': {server} ({e})"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        if !matches!(server.scheme(), "http" | "https") {
            return Err(ModelError::Validation {
                message: format!(
                    "Server URL for '{name}' must be http or https, got {}",
                    server.scheme()
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let key = self.key.ok_or_else(|| ModelError::Validation {
            message: format!("Key is required for '{name}'"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let secret = self.secret.ok_or_else(|| ModelError::Validation {
            message: format!("Secret is required for '{name}'"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(CredentialEntry {
            name,
            server,
            key,
            secret,
        })
    }
}
