pub mod builder;

use common::RedactedSecret;

use url::Url;

/// One named environment from the keyfile.
///
/// Built through [`builder::CredentialEntryBuilder`] so the server URL and key
/// are validated once at load time.
#[derive(Debug, Clone)]
pub struct CredentialEntry {
    pub name: String,
    pub server: Url,
    pub key: String,
    pub secret: RedactedSecret,
}
