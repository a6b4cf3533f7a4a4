pub mod auth;
pub mod compare;
pub mod config;
pub mod error;
pub mod keyfile;
pub mod portal_client;
pub mod verify;

#[cfg(test)]
mod tests;

pub use config::{RunConfig, SearchType};
pub use portal_client::PortalClient;
pub use verify::{VerifyOutcome, VerifyStep, run, verify};

pub const DEFAULT_KEY_NAME: &str = "localhost";
pub const DEFAULT_KEYFILE: &str = "keypairs.json";
pub const DEFAULT_QUERY: &str = "type=Experiment&status=released&assay_title=ChIP-seq";
pub const USER_AGENT: &str = const_format::concatcp!("cartcheck/", env!("CARGO_PKG_VERSION"));
