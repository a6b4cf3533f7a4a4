use crate::{DEFAULT_KEY_NAME, DEFAULT_KEYFILE, DEFAULT_QUERY};

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

/// Kind of listing requested with `--type`.
///
/// Accepted and logged but not yet routed; every run searches through `/search/`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchType {
    #[default]
    Search,
    Matrix,
    Report,
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchType::Search => "search",
            SearchType::Matrix => "matrix",
            SearchType::Report => "report",
        };
        f.write_str(name)
    }
}

/// Everything a verification run needs, built once from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub key_name: String,
    pub keyfile: PathBuf,
    pub cart_id: String,
    pub query: String,
    pub search_type: SearchType,
    /// Per-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl RunConfig {
    /// Defaults for every flag except the cart, which has none.
    pub fn for_cart(cart_id: impl Into<String>) -> Self {
        Self {
            key_name: DEFAULT_KEY_NAME.to_string(),
            keyfile: PathBuf::from(DEFAULT_KEYFILE),
            cart_id: cart_id.into(),
            query: DEFAULT_QUERY.to_string(),
            search_type: SearchType::default(),
            timeout: None,
        }
    }
}
