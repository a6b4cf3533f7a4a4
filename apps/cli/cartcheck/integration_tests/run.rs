use cartcheck::cli::Args;
use cartcheck::report::render;

use clap::Parser;
use serde_json::{Value, json};
use std::io::Write;
use tempfile::NamedTempFile;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Integration tests for argument parsing + cart-core + report rendering
// A wiremock server plays the portal
// ============================================================================

fn graph_of(ids: &[&str]) -> Value {
    let items: Vec<Value> = ids.iter().map(|id| json!({"@id": id})).collect();
    json!({"@graph": items})
}

async fn mount_portal(server: &MockServer, search: &[&str], cart_search: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/search/"))
        .and(query_param("type", "Experiment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(graph_of(search)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/carts/cli-cart/"))
        .and(query_param("frame", "edit"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"identifier": "cli-cart", "elements": []})),
        )
        .mount(server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/carts/cli-cart"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"@graph": [{"elements": search}]})),
        )
        .expect(1)
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/cart-search/"))
        .and(query_param("cart", "/carts/cli-cart/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(graph_of(cart_search)))
        .mount(server)
        .await;
}

fn keyfile_for(server: &MockServer) -> NamedTempFile {
    let mut keyfile = NamedTempFile::new().unwrap();
    let contents = json!({"mock": {"server": server.uri(), "key": "K", "secret": "S"}});
    keyfile.write_all(contents.to_string().as_bytes()).unwrap();
    keyfile
}

fn args_for(keyfile: &NamedTempFile) -> Args {
    let keyfile_path = keyfile.path().to_str().unwrap().to_string();
    Args::try_parse_from([
        "cartcheck",
        "--key",
        "mock",
        "--keyfile",
        keyfile_path.as_str(),
        "--cart",
        "/carts/cli-cart/",
        "--query",
        "type=Experiment",
        "--timeout",
        "10",
    ])
    .unwrap()
}

/// **VALUE**: Tests the whole pipeline from command line to printed verdict.
///
/// **WHY THIS MATTERS**: This is what `cartcheck` does when run by hand, minus
/// the global logger and process exit.
///
/// **BUG THIS CATCHES**: Would catch mismatches between what Args produces and
/// what cart-core expects (cart path vs identifier, query format).
#[tokio::test]
async fn given_consistent_portal_when_running_from_args_then_reports_consistent() {
    // GIVEN: A consistent portal and a keyfile pointing at it
    let server = MockServer::start().await;
    mount_portal(&server, &["/e/1/", "/e/2/"], &["/e/2/", "/e/1/"]).await;
    let keyfile = keyfile_for(&server);

    // WHEN: Running with parsed args and rendering
    let config = args_for(&keyfile).run_config();
    let outcome = cart_core::run(&config).await.unwrap();
    let mut out = Vec::new();
    render(&outcome, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    // THEN: The report says consistent
    assert!(text.contains("CONSISTENT: cart search matches search"), "{text}");
    assert!(!text.contains("INCONSISTENT"));
}

/// **VALUE**: Tests that an inconsistent portal is reported, not raised.
///
/// **WHY THIS MATTERS**: A mismatch is the finding the tool exists to report;
/// it must not be confused with a failed run.
#[tokio::test]
async fn given_inconsistent_portal_when_running_from_args_then_reports_mismatch() {
    let server = MockServer::start().await;
    mount_portal(&server, &["/e/1/", "/e/2/"], &["/e/1/"]).await;
    let keyfile = keyfile_for(&server);

    let config = args_for(&keyfile).run_config();
    let outcome = cart_core::run(&config).await.unwrap();
    let mut out = Vec::new();
    render(&outcome, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(
        text.contains("INCONSISTENT: search returned 2 identifiers, cart search returned 1"),
        "{text}"
    );
}
