//! Test helpers for portal integration tests.
//!
//! A wiremock server stands in for the portal; helpers mount the four
//! endpoints the verification run touches.

use cart_core::PortalClient;
use cart_core::auth::basic_auth_header;

use std::sync::{Mutex, Once};

use log::{LevelFilter, Log, Metadata, Record};
use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_KEY: &str = "TESTKEY";
pub const TEST_SECRET: &str = "testsecret";
pub const TEST_CART_PATH: &str = "/carts/test-cart/";
pub const TEST_CART_IDENTIFIER: &str = "test-cart";

/// Test helper: `Authorization` value for the test credentials.
pub fn expected_auth() -> String {
    basic_auth_header(TEST_KEY, TEST_SECRET).expose().to_string()
}

/// Test helper: Client pointed at the mock portal.
pub fn client_for(server: &MockServer) -> PortalClient {
    let base_url = Url::parse(&server.uri()).expect("mock server uri");
    PortalClient::with_auth(base_url, basic_auth_header(TEST_KEY, TEST_SECRET), None)
        .expect("Failed to build client")
}

/// Test helper: Client pointed at `{mock}{prefix}`, for portals mounted below a path.
pub fn client_under_prefix(server: &MockServer, prefix: &str) -> PortalClient {
    let base_url = Url::parse(&format!("{}{prefix}", server.uri())).expect("prefixed uri");
    PortalClient::with_auth(base_url, basic_auth_header(TEST_KEY, TEST_SECRET), None)
        .expect("Failed to build client")
}

/// Records every log line so tests can assert on what a failure logged.
struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static CAPTURED: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};

static INSTALL_CAPTURE: Once = Once::new();

/// Test helper: Install the capturing logger (once per test binary).
pub fn capture_logs() {
    INSTALL_CAPTURE.call_once(|| {
        log::set_logger(&CAPTURED).expect("Another logger is already installed");
        log::set_max_level(LevelFilter::Trace);
    });
}

/// Test helper: Captured lines containing `needle`. Tests run in parallel, so
/// each test filters on a marker unique to it.
pub fn captured_lines_containing(needle: &str) -> Vec<String> {
    CAPTURED
        .lines
        .lock()
        .expect("log capture poisoned")
        .iter()
        .filter(|line| line.contains(needle))
        .cloned()
        .collect()
}

/// Test helper: `{"@graph": [{"@id": ...}, ...]}`.
pub fn graph_of(ids: &[&str]) -> Value {
    let items: Vec<Value> = ids.iter().map(|id| json!({"@id": id})).collect();
    json!({"@graph": items, "total": ids.len()})
}

pub fn edit_frame(elements: &[&str]) -> Value {
    json!({
        "identifier": TEST_CART_IDENTIFIER,
        "elements": elements,
        "name": "Integration cart",
        "status": "current"
    })
}

pub async fn mount_search(server: &MockServer, ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/search/"))
        .and(query_param("limit", "all"))
        .and(header("authorization", expected_auth().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(graph_of(ids)))
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_read_cart(server: &MockServer, elements: &[&str]) {
    Mock::given(method("GET"))
        .and(path(TEST_CART_PATH))
        .and(query_param("frame", "edit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(edit_frame(elements)))
        .expect(1)
        .mount(server)
        .await;
}

/// Test helper: PUT handler that echoes back `confirmed` as the stored elements.
pub async fn mount_write_cart(server: &MockServer, written: &[&str], confirmed: &[&str]) {
    Mock::given(method("PUT"))
        .and(path(format!("/carts/{TEST_CART_IDENTIFIER}")))
        .and(body_partial_json(json!({
            "identifier": TEST_CART_IDENTIFIER,
            "elements": written,
            "name": "Integration cart"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"@graph": [{"elements": confirmed}], "status": "success"})),
        )
        .expect(1)
        .mount(server)
        .await;
}

pub async fn mount_cart_search(server: &MockServer, ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/cart-search/"))
        .and(query_param("cart", TEST_CART_PATH))
        .and(query_param("limit", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(graph_of(ids)))
        .expect(1)
        .mount(server)
        .await;
}
