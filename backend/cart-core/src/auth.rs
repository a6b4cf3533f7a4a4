//! HTTP Basic `Authorization` header construction.
//!
//! The header value is `"Basic " + base64("key:secret")` over the UTF-8 bytes
//! of the credentials, standard alphabet with padding.

use common::RedactedSecret;

use std::fmt;

use base64ct::{Base64, Encoding};

const BASIC_PREFIX: &str = "Basic ";

/// Ready-to-send `Authorization` header value. Debug output is redacted.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthHeader(RedactedSecret);

impl AuthHeader {
    /// Raw header value, only for attaching to outgoing requests.
    pub fn expose(&self) -> &str {
        self.0.expose()
    }
}

impl fmt::Debug for AuthHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthHeader(Basic [REDACTED])")
    }
}

pub fn basic_auth_header(key: &str, secret: &str) -> AuthHeader {
    let credentials = format!("{key}:{secret}");
    let encoded = Base64::encode_string(credentials.as_bytes());
    AuthHeader(RedactedSecret::new(format!("{BASIC_PREFIX}{encoded}")))
}

/// Inverse of [`basic_auth_header`]: splits the decoded payload on the first `:`.
///
/// Returns `None` for a missing prefix, invalid base64, non-UTF-8 bytes or a
/// payload without a colon.
pub fn decode_basic_auth(header_value: &str) -> Option<(String, String)> {
    let payload = header_value.strip_prefix(BASIC_PREFIX)?;
    let bytes = Base64::decode_vec(payload).ok()?;
    let credentials = String::from_utf8(bytes).ok()?;
    let (key, secret) = credentials.split_once(':')?;
    Some((key.to_string(), secret.to_string()))
}
