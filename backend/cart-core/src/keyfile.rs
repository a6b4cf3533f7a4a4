//! Keyfile loading.
//!
//! A keyfile maps environment names to portal credentials:
//!
//! ```json
//! { "localhost": { "server": "http://localhost:6543", "key": "...", "secret": "..." } }
//! ```

use crate::error::keyfile::KeyfileError;

use common::{ErrorLocation, RedactedSecret};
use models::{CredentialEntry, CredentialEntryBuilder};

use std::collections::BTreeMap;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
struct RawEntry {
    server: String,
    key: String,
    secret: RedactedSecret,
}

/// Parsed keyfile. Entries are validated when resolved by name.
#[derive(Debug)]
pub struct Keyfile {
    path: PathBuf,
    entries: BTreeMap<String, RawEntry>,
}

impl Keyfile {
    /// Read and parse the keyfile at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyfileError::Read`] if the file cannot be read and
    /// [`KeyfileError::Parse`] if it is not an object of `{server, key, secret}`.
    pub fn load(path: &Path) -> Result<Self, KeyfileError> {
        let contents = std::fs::read_to_string(path).map_err(|e| KeyfileError::Read {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        let keyfile = Self::parse(path, &contents)?;
        info!(
            "Keyfile loaded from {} ({} entries)",
            path.display(),
            keyfile.entries.len()
        );
        Ok(keyfile)
    }

    /// Parse keyfile contents. `path` is only used in error messages.
    #[track_caller]
    pub fn parse(path: &Path, contents: &str) -> Result<Self, KeyfileError> {
        let entries: BTreeMap<String, RawEntry> =
            serde_json::from_str(contents).map_err(|e| KeyfileError::Parse {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Environment names, sorted.
    pub fn names(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Resolve one named entry into validated credentials.
    ///
    /// # Errors
    ///
    /// Returns [`KeyfileError::UnknownKey`] if `name` is absent and
    /// [`KeyfileError::Validation`] if its server URL is unusable.
    #[track_caller]
    pub fn entry(&self, name: &str) -> Result<CredentialEntry, KeyfileError> {
        let raw = self
            .entries
            .get(name)
            .ok_or_else(|| KeyfileError::UnknownKey {
                location: ErrorLocation::from(Location::caller()),
                path: self.path.clone(),
                name: name.to_string(),
                available: self.names().join(", "),
            })?;

        let entry = CredentialEntryBuilder::default()
            .with_name(name)
            .with_server(raw.server.as_str())
            .with_key(raw.key.as_str())
            .with_secret(raw.secret.clone())
            .build()
            .map_err(|e| KeyfileError::Validation {
                location: ErrorLocation::from(Location::caller()),
                path: self.path.clone(),
                source: e,
            })?;

        debug!("Resolved keyfile entry '{name}' -> {}", entry.server);
        Ok(entry)
    }
}
