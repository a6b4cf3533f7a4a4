// Unit tests for argument parsing and RunConfig construction

use crate::cli::{Args, SearchTypeArg};

use cart_core::{DEFAULT_KEYFILE, DEFAULT_QUERY, SearchType};

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use log::LevelFilter;

/// **VALUE**: Verifies defaults when only the cart is given.
///
/// **BUG THIS CATCHES**: Would catch a default drifting from "localhost" /
/// "keypairs.json", which silently points the run at another environment.
#[test]
fn given_only_cart_when_parsed_then_defaults_apply() {
    // GIVEN/WHEN: Minimal command line
    let args = Args::try_parse_from(["cartcheck", "--cart", "/carts/abc/"]).unwrap();
    let config = args.run_config();

    // THEN: Defaults fill the rest
    assert_eq!(config.key_name, "localhost");
    assert_eq!(config.cart_id, "/carts/abc/");
    assert_eq!(config.query, DEFAULT_QUERY);
    assert_eq!(config.search_type, SearchType::Search);
    assert_eq!(config.timeout, None);
    assert_eq!(args.log_level(), LevelFilter::Info);
    if std::env::var_os("CARTCHECK_KEYFILE").is_none() {
        assert_eq!(config.keyfile, PathBuf::from(DEFAULT_KEYFILE));
    }
}

/// **VALUE**: Verifies every flag reaches RunConfig.
#[test]
fn given_all_flags_when_parsed_then_config_reflects_them() {
    let args = Args::try_parse_from([
        "cartcheck",
        "--key",
        "prod",
        "--keyfile",
        "/etc/keys.json",
        "--cart",
        "/carts/xyz/",
        "--query",
        "type=Biosample",
        "--type",
        "matrix",
        "--debug",
        "--timeout",
        "30",
    ])
    .unwrap();

    let config = args.run_config();

    assert_eq!(args.search_type, SearchTypeArg::Matrix);
    assert_eq!(config.key_name, "prod");
    assert_eq!(config.keyfile, PathBuf::from("/etc/keys.json"));
    assert_eq!(config.query, "type=Biosample");
    assert_eq!(config.search_type, SearchType::Matrix);
    assert_eq!(config.timeout, Some(Duration::from_secs(30)));
    assert_eq!(args.log_level(), LevelFilter::Debug);
}

/// **VALUE**: Verifies the cart is required.
#[test]
fn given_no_cart_when_parsed_then_fails() {
    let result = Args::try_parse_from(["cartcheck"]);

    assert!(result.is_err());
}

/// **VALUE**: Verifies unknown listing types are rejected by clap.
#[test]
fn given_unknown_type_when_parsed_then_fails() {
    let result = Args::try_parse_from(["cartcheck", "--cart", "/carts/a/", "--type", "table"]);

    assert!(result.is_err());
}
