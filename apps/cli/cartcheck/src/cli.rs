//! Command-line arguments.

use cart_core::{DEFAULT_KEY_NAME, DEFAULT_KEYFILE, DEFAULT_QUERY, RunConfig, SearchType};

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Check that a portal's cart search agrees with its plain search
#[derive(Parser, Debug)]
#[command(name = "cartcheck")]
#[command(about = "Fill a cart from a search and compare it with the cart search")]
#[command(version)]
pub struct Args {
    /// Keyfile entry to use
    #[arg(long, default_value = DEFAULT_KEY_NAME)]
    pub key: String,

    /// JSON keyfile mapping entry names to {server, key, secret}
    #[arg(long, env = "CARTCHECK_KEYFILE", default_value = DEFAULT_KEYFILE)]
    pub keyfile: PathBuf,

    /// Cart path, e.g. /carts/<uuid>/ (its elements are overwritten)
    #[arg(long)]
    pub cart: String,

    /// Search query string, without limit
    #[arg(long, default_value = DEFAULT_QUERY)]
    pub query: String,

    /// Listing type (reserved; every run uses /search/)
    #[arg(long = "type", value_enum, default_value_t = SearchTypeArg::Search)]
    pub search_type: SearchTypeArg,

    /// Log at debug level
    #[arg(long)]
    pub debug: bool,

    /// Also write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Per-request timeout in seconds (default: none)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchTypeArg {
    Search,
    Matrix,
    Report,
}

impl From<SearchTypeArg> for SearchType {
    fn from(arg: SearchTypeArg) -> Self {
        match arg {
            SearchTypeArg::Search => SearchType::Search,
            SearchTypeArg::Matrix => SearchType::Matrix,
            SearchTypeArg::Report => SearchType::Report,
        }
    }
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn run_config(&self) -> RunConfig {
        RunConfig {
            key_name: self.key.clone(),
            keyfile: self.keyfile.clone(),
            cart_id: self.cart.clone(),
            query: self.query.clone(),
            search_type: self.search_type.into(),
            timeout: self.timeout.map(Duration::from_secs),
        }
    }
}
