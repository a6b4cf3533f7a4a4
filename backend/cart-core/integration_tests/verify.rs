use crate::helpers::{
    TEST_CART_PATH, TEST_KEY, TEST_SECRET, client_for, mount_cart_search, mount_read_cart,
    mount_search, mount_write_cart,
};

use cart_core::compare::Comparison;
use cart_core::error::{CoreError, KeyfileError, PortalClientError};
use cart_core::{RunConfig, VerifyStep, run, verify};

use common::HttpStatusCode;
use models::Identifier;

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ids(values: &[&str]) -> Vec<Identifier> {
    values.iter().copied().map(Identifier::from).collect()
}

fn config() -> RunConfig {
    RunConfig::for_cart(TEST_CART_PATH)
}

/// **VALUE**: Full run where the cart search agrees with the search.
///
/// **WHY THIS MATTERS**: This is the happy path of the tool: four requests in
/// order, each mock expected exactly once.
#[tokio::test]
async fn given_consistent_portal_when_verifying_then_outcome_is_consistent() {
    // GIVEN: A portal whose cart search returns the same set, reordered
    let server = MockServer::start().await;
    mount_search(&server, &["/e/1/", "/e/2/", "/e/3/"]).await;
    mount_read_cart(&server, &["/e/old/"]).await;
    mount_write_cart(
        &server,
        &["/e/1/", "/e/2/", "/e/3/"],
        &["/e/1/", "/e/2/", "/e/3/"],
    )
    .await;
    mount_cart_search(&server, &["/e/3/", "/e/1/", "/e/2/"]).await;

    // WHEN: Verifying
    let outcome = verify(&client_for(&server), &config()).await.unwrap();

    // THEN: Consistent, with every intermediate list recorded
    assert!(outcome.is_consistent());
    assert_eq!(outcome.search_results, ids(&["/e/1/", "/e/2/", "/e/3/"]));
    assert_eq!(outcome.cart_elements, ids(&["/e/1/", "/e/2/", "/e/3/"]));
    assert_eq!(outcome.cart_search_results, ids(&["/e/3/", "/e/1/", "/e/2/"]));
    assert_eq!(outcome.cart_id, TEST_CART_PATH);
}

/// **VALUE**: A cart search missing an item is reported as a size mismatch.
#[tokio::test]
async fn given_cart_search_missing_item_when_verifying_then_size_mismatch() {
    let server = MockServer::start().await;
    mount_search(&server, &["/e/1/", "/e/2/"]).await;
    mount_read_cart(&server, &[]).await;
    mount_write_cart(&server, &["/e/1/", "/e/2/"], &["/e/1/", "/e/2/"]).await;
    mount_cart_search(&server, &["/e/1/"]).await;

    let outcome = verify(&client_for(&server), &config()).await.unwrap();

    assert_eq!(
        outcome.comparison,
        Comparison::SizeMismatch { left: 2, right: 1 }
    );
    assert!(!outcome.is_consistent());
}

/// **VALUE**: A cart search returning a different item is reported positionally.
#[tokio::test]
async fn given_cart_search_with_other_item_when_verifying_then_reports_it() {
    let server = MockServer::start().await;
    mount_search(&server, &["/e/1/", "/e/3/"]).await;
    mount_read_cart(&server, &[]).await;
    mount_write_cart(&server, &["/e/1/", "/e/3/"], &["/e/1/", "/e/3/"]).await;
    mount_cart_search(&server, &["/e/2/", "/e/1/"]).await;

    let outcome = verify(&client_for(&server), &config()).await.unwrap();

    assert_eq!(outcome.comparison, Comparison::Positional(ids(&["/e/3/"])));
}

/// **VALUE**: A failed cart read stops the run before anything is written.
///
/// **WHY THIS MATTERS**: Writing a cart that was never read would need a
/// fabricated identifier. The run must stop at ReadingCart.
///
/// **BUG THIS CATCHES**: Would catch the orchestrator continuing past a failed
/// step (the PUT mock expects zero calls).
#[tokio::test]
async fn given_cart_read_failure_when_verifying_then_stops_at_reading_cart() {
    // GIVEN: Search works, cart read is forbidden
    let server = MockServer::start().await;
    mount_search(&server, &["/e/1/"]).await;
    Mock::given(method("GET"))
        .and(path(TEST_CART_PATH))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"status": "error"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    // WHEN: Verifying
    let err = verify(&client_for(&server), &config()).await.unwrap_err();

    // THEN: The error names the step and keeps the status
    assert_eq!(err.step(), VerifyStep::ReadingCart);
    assert!(err.to_string().contains("reading cart failed"));
    let cart_core::error::VerifyError::Step { source, .. } = err;
    assert_eq!(source.status(), Some(HttpStatusCode(403)));
}

/// **VALUE**: A failed search stops the run at the first step.
#[tokio::test]
async fn given_search_failure_when_verifying_then_stops_at_searching() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search/"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad query"))
        .expect(1)
        .mount(&server)
        .await;

    let err = verify(&client_for(&server), &config()).await.unwrap_err();

    assert_eq!(err.step(), VerifyStep::Searching);
}

/// **VALUE**: `run` loads the keyfile entry and talks to its server.
#[tokio::test]
async fn given_keyfile_pointing_at_portal_when_running_then_verifies() {
    // GIVEN: A keyfile whose "test" entry targets the mock portal
    let server = MockServer::start().await;
    mount_search(&server, &["/e/1/"]).await;
    mount_read_cart(&server, &[]).await;
    mount_write_cart(&server, &["/e/1/"], &["/e/1/"]).await;
    mount_cart_search(&server, &["/e/1/"]).await;

    let mut keyfile = NamedTempFile::new().unwrap();
    let contents = json!({
        "test": {"server": server.uri(), "key": TEST_KEY, "secret": TEST_SECRET}
    });
    keyfile.write_all(contents.to_string().as_bytes()).unwrap();

    let mut config = config();
    config.key_name = "test".to_string();
    config.keyfile = keyfile.path().to_path_buf();

    // WHEN: Running
    let outcome = run(&config).await.unwrap();

    // THEN: Consistent
    assert!(outcome.is_consistent());
}

/// **VALUE**: `run` with an unknown key fails before any request.
#[tokio::test]
async fn given_unknown_key_when_running_then_keyfile_error() {
    let mut keyfile = NamedTempFile::new().unwrap();
    keyfile
        .write_all(br#"{"prod": {"server": "https://example.org", "key": "K", "secret": "S"}}"#)
        .unwrap();

    let mut config = config();
    config.keyfile = keyfile.path().to_path_buf();

    let result = run(&config).await;

    assert!(matches!(
        result,
        Err(CoreError::Keyfile(KeyfileError::UnknownKey { .. }))
    ));
}

/// **VALUE**: Server-side trimming of the written cart is tolerated and surfaced.
#[tokio::test]
async fn given_server_drops_element_when_writing_then_outcome_records_confirmed_list() {
    let server = MockServer::start().await;
    mount_search(&server, &["/e/1/", "/e/2/"]).await;
    mount_read_cart(&server, &[]).await;
    mount_write_cart(&server, &["/e/1/", "/e/2/"], &["/e/1/"]).await;
    mount_cart_search(&server, &["/e/1/"]).await;

    let outcome = verify(&client_for(&server), &config()).await.unwrap();

    assert_eq!(outcome.cart_elements, ids(&["/e/1/"]));
    assert!(matches!(
        outcome.comparison,
        Comparison::SizeMismatch { .. }
    ));
}

#[test]
fn given_portal_error_when_not_server_then_status_is_none() {
    let err = PortalClientError::MissingField {
        field: "@graph",
        endpoint: "/search/".to_string(),
        location: common::ErrorLocation::from(std::panic::Location::caller()),
    };

    assert_eq!(err.status(), None);
}
