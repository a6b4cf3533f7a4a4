//! Shared building blocks for cartcheck.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking, secret redaction, HTTP status helpers
//! - **models**: Pure data exchanged with the portal
//! - **cart-core**: Keyfile loading, portal client and the verification workflow
//! - **cartcheck**: Command-line wiring and reporting

pub mod error;
pub mod http_status;
pub mod redacted_secret;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_secret::RedactedSecret;
