// Unit tests for portal endpoint construction

use crate::PortalClient;
use crate::auth::basic_auth_header;

use url::Url;

fn client_at(server: &str) -> PortalClient {
    let base_url = Url::parse(server).unwrap();
    PortalClient::with_auth(base_url, basic_auth_header("k", "s"), None).unwrap()
}

/// **VALUE**: Verifies endpoints land under a server that has its own path.
///
/// **WHY THIS MATTERS**: Portals are sometimes mounted below a prefix, e.g.
/// `https://host/portal`. Resolving `/search/` against it as an absolute path
/// drops the prefix and every request 404s.
///
/// **BUG THIS CATCHES**: Would catch a return to `Url::join` with absolute paths.
#[test]
fn given_server_with_path_when_building_endpoints_then_prefix_kept() {
    // GIVEN: Servers with a prefix, with and without trailing slash
    for server in ["https://host.example/portal", "https://host.example/portal/"] {
        let client = client_at(server);

        // WHEN/THEN: Each endpoint keeps the prefix
        assert_eq!(
            client.endpoint("/search/").as_str(),
            "https://host.example/portal/search/"
        );
        assert_eq!(
            client.endpoint("/carts/abc/").as_str(),
            "https://host.example/portal/carts/abc/"
        );
        assert_eq!(
            client.endpoint("/carts/abc").as_str(),
            "https://host.example/portal/carts/abc"
        );
        assert_eq!(
            client.endpoint("/cart-search/").as_str(),
            "https://host.example/portal/cart-search/"
        );
    }
}

/// **VALUE**: Verifies a bare host maps endpoints to the root.
#[test]
fn given_bare_host_when_building_endpoints_then_paths_at_root() {
    let client = client_at("http://localhost:6543");

    assert_eq!(
        client.endpoint("/search/").as_str(),
        "http://localhost:6543/search/"
    );
    assert_eq!(
        client.endpoint("/carts/abc/").as_str(),
        "http://localhost:6543/carts/abc/"
    );
}

/// **VALUE**: Verifies a query or fragment on the configured server is not
/// carried into endpoint URLs.
#[test]
fn given_server_with_query_when_building_endpoints_then_query_dropped() {
    let client = client_at("https://host.example/portal?format=json#top");

    assert_eq!(
        client.endpoint("/search/").as_str(),
        "https://host.example/portal/search/"
    );
}
