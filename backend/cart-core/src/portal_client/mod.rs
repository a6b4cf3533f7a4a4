use crate::USER_AGENT;
use crate::auth::{AuthHeader, basic_auth_header};
use crate::error::portal_client::PortalClientError;

use common::{ErrorLocation, HttpStatusCode};
use models::{Cart, CredentialEntry, Identifier, SearchEnvelope, UpdateEnvelope};

use std::panic::Location;
use std::time::Duration;

use log::{debug, error, info};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

const JSON_MEDIA_TYPE: &str = "application/json";
const SEARCH_ENDPOINT: &str = "/search/";
const CART_SEARCH_ENDPOINT: &str = "/cart-search/";
const CARTS_ENDPOINT: &str = "/carts/";
const LIMIT_PARAM: (&str, &str) = ("limit", "all");
const EDIT_FRAME_PARAM: (&str, &str) = ("frame", "edit");
const CART_PARAM: &str = "cart";

/// Authenticated client for the portal's search and cart endpoints.
///
/// Requests are sent one at a time and never retried.
#[derive(Clone)]
pub struct PortalClient {
    base_url: Url,
    client: Client,
    auth: AuthHeader,
}

impl PortalClient {
    pub fn new(entry: &CredentialEntry, timeout: Option<Duration>) -> Result<Self, PortalClientError> {
        let auth = basic_auth_header(&entry.key, entry.secret.expose());
        Self::with_auth(entry.server.clone(), auth, timeout)
    }

    pub fn with_auth(
        base_url: Url,
        auth: AuthHeader,
        timeout: Option<Duration>,
    ) -> Result<Self, PortalClientError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            base_url,
            client,
            auth,
        })
    }

    /// `path` appended to the server URL's own path, so a server configured as
    /// `https://host/portal` yields `https://host/portal/search/`.
    pub(crate) fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url.set_query(None);
        url.set_fragment(None);
        url
    }

    fn prepare_request(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(ACCEPT, JSON_MEDIA_TYPE)
            .header(CONTENT_TYPE, JSON_MEDIA_TYPE)
            .header(AUTHORIZATION, self.auth.expose())
    }

    /// `GET /search/?{query}&limit=all`, returning `@graph[*].@id` in server order.
    pub async fn search(&self, query: &str) -> Result<Vec<Identifier>, PortalClientError> {
        let result = self.search_inner(query).await;
        log_failure("Search", &result);
        result
    }

    async fn search_inner(&self, query: &str) -> Result<Vec<Identifier>, PortalClientError> {
        let mut url = self.endpoint(SEARCH_ENDPOINT);
        let query = query.trim_start_matches('?');
        url.set_query((!query.is_empty()).then_some(query));
        url.query_pairs_mut().append_pair(LIMIT_PARAM.0, LIMIT_PARAM.1);

        let envelope: SearchEnvelope = self.get_json(url).await?;
        let identifiers = envelope.into_identifiers();

        info!("Search returned {} results", identifiers.len());
        Ok(identifiers)
    }

    /// `GET {cart_id}?frame=edit`, returning the whole edit frame.
    pub async fn read_cart(&self, cart_id: &str) -> Result<Cart, PortalClientError> {
        let result = self.read_cart_inner(cart_id).await;
        log_failure("Cart read", &result);
        result
    }

    async fn read_cart_inner(&self, cart_id: &str) -> Result<Cart, PortalClientError> {
        let mut url = self.endpoint(cart_id);
        url.query_pairs_mut()
            .append_pair(EDIT_FRAME_PARAM.0, EDIT_FRAME_PARAM.1);

        let cart: Cart = self.get_json(url).await?;

        info!(
            "Read cart {} holding {} elements",
            cart.identifier,
            cart.elements.len()
        );
        Ok(cart)
    }

    /// `PUT /carts/{identifier}` with the full cart, returning the elements the
    /// server confirms. Overwrites unconditionally.
    pub async fn write_cart(&self, cart: &Cart) -> Result<Vec<Identifier>, PortalClientError> {
        let result = self.write_cart_inner(cart).await;
        log_failure("Cart write", &result);
        result
    }

    async fn write_cart_inner(&self, cart: &Cart) -> Result<Vec<Identifier>, PortalClientError> {
        let url = self.endpoint(&format!("{CARTS_ENDPOINT}{}", cart.identifier));

        debug!("PUT {url} with {} elements", cart.elements.len());
        let request = self.prepare_request(self.client.put(url.clone())).json(cart);
        let envelope: UpdateEnvelope = self.send_json(request).await?;

        let elements = envelope
            .into_first_elements()
            .ok_or_else(|| PortalClientError::MissingField {
                field: "@graph[0].elements",
                endpoint: url.path().to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(
            "Cart {} now holds {} elements",
            cart.identifier,
            elements.len()
        );
        Ok(elements)
    }

    /// `GET /cart-search/?cart={cart_id}&limit=all`, returning `@graph[*].@id`.
    pub async fn cart_search(&self, cart_id: &str) -> Result<Vec<Identifier>, PortalClientError> {
        let result = self.cart_search_inner(cart_id).await;
        log_failure("Cart search", &result);
        result
    }

    async fn cart_search_inner(&self, cart_id: &str) -> Result<Vec<Identifier>, PortalClientError> {
        let mut url = self.endpoint(CART_SEARCH_ENDPOINT);
        url.query_pairs_mut()
            .append_pair(CART_PARAM, cart_id)
            .append_pair(LIMIT_PARAM.0, LIMIT_PARAM.1);

        let envelope: SearchEnvelope = self.get_json(url).await?;
        let identifiers = envelope.into_identifiers();

        info!("Cart search returned {} results", identifiers.len());
        Ok(identifiers)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, PortalClientError> {
        debug!("GET {url}");
        let request = self.prepare_request(self.client.get(url));
        self.send_json(request).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, PortalClientError> {
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortalClientError::Server {
                status: HttpStatusCode::from(status.as_u16()),
                message: response.text().await.unwrap_or_default(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.bytes().await?;
        let parsed = serde_json::from_slice(&body)?;
        Ok(parsed)
    }
}

fn log_failure<T>(operation: &str, result: &Result<T, PortalClientError>) {
    if let Err(e) = result {
        error!("{operation} failed: {e}");
        if e.status().is_some_and(|status| status.is_auth_failure()) {
            error!("Portal rejected the credentials; check --key and --keyfile");
        }
        if e.is_timeout() {
            error!("{operation} request timed out; see --timeout");
        }
    }
}
