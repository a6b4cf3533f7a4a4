//! The cart consistency check.
//!
//! One run walks [`VerifyStep`] in order: load credentials, search, read the
//! cart, overwrite its elements with the search results, search through the
//! cart, compare. Any failed step ends the run with a [`VerifyError`] naming it.

use crate::compare::{Comparison, compare};
use crate::config::RunConfig;
use crate::error::CoreError;
use crate::error::portal_client::PortalClientError;
use crate::error::verify::VerifyError;
use crate::keyfile::Keyfile;
use crate::portal_client::PortalClient;

use common::ErrorLocation;
use models::Identifier;

use std::fmt;
use std::panic::Location;

use log::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyStep {
    LoadingCredentials,
    Searching,
    ReadingCart,
    WritingCart,
    SearchingCart,
    Comparing,
    Done,
}

impl fmt::Display for VerifyStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VerifyStep::LoadingCredentials => "loading credentials",
            VerifyStep::Searching => "searching",
            VerifyStep::ReadingCart => "reading cart",
            VerifyStep::WritingCart => "writing cart",
            VerifyStep::SearchingCart => "searching cart",
            VerifyStep::Comparing => "comparing",
            VerifyStep::Done => "done",
        };
        f.write_str(name)
    }
}

/// Everything observed during a completed run.
#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    pub cart_id: String,
    pub query: String,
    /// Direct search results, server order.
    pub search_results: Vec<Identifier>,
    /// Elements the server confirmed after the cart write.
    pub cart_elements: Vec<Identifier>,
    /// Cart search results, server order.
    pub cart_search_results: Vec<Identifier>,
    /// `search_results` compared against `cart_search_results`.
    pub comparison: Comparison,
}

impl VerifyOutcome {
    pub fn is_consistent(&self) -> bool {
        self.comparison.is_consistent()
    }
}

#[track_caller]
fn at_step<T>(step: VerifyStep, result: Result<T, PortalClientError>) -> Result<T, VerifyError> {
    result.map_err(|source| VerifyError::Step {
        step,
        source,
        location: ErrorLocation::from(Location::caller()),
    })
}

/// Resolve credentials from the keyfile, then [`verify`].
///
/// # Errors
///
/// Returns [`CoreError::Keyfile`] for keyfile problems,
/// [`CoreError::PortalClient`] if the HTTP client cannot be built and
/// [`CoreError::Verify`] for any failed portal step.
pub async fn run(config: &RunConfig) -> Result<VerifyOutcome, CoreError> {
    info!("Step: {}", VerifyStep::LoadingCredentials);
    let keyfile = Keyfile::load(&config.keyfile)?;
    let entry = keyfile.entry(&config.key_name)?;
    debug!("Using credentials {entry:?}");

    let client = PortalClient::new(&entry, config.timeout)?;
    info!("Verifying cart {} against {}", config.cart_id, entry.server);

    Ok(verify(&client, config).await?)
}

/// Search, fill the cart, search the cart, compare.
///
/// The cart's element list on the server is overwritten with the search results.
pub async fn verify(client: &PortalClient, config: &RunConfig) -> Result<VerifyOutcome, VerifyError> {
    debug!(
        "Search type '{}' requested; listing through /search/",
        config.search_type
    );

    info!("Step: {}", VerifyStep::Searching);
    let search_results = at_step(VerifyStep::Searching, client.search(&config.query).await)?;

    info!("Step: {}", VerifyStep::ReadingCart);
    let mut cart = at_step(
        VerifyStep::ReadingCart,
        client.read_cart(&config.cart_id).await,
    )?;

    info!("Step: {}", VerifyStep::WritingCart);
    cart.replace_elements(search_results.clone());
    let cart_elements = at_step(VerifyStep::WritingCart, client.write_cart(&cart).await)?;
    if cart_elements.len() != search_results.len() {
        warn!(
            "Server kept {} of {} written elements",
            cart_elements.len(),
            search_results.len()
        );
    }

    info!("Step: {}", VerifyStep::SearchingCart);
    let cart_search_results = at_step(
        VerifyStep::SearchingCart,
        client.cart_search(&config.cart_id).await,
    )?;

    info!("Step: {}", VerifyStep::Comparing);
    let comparison = compare(&search_results, &cart_search_results);
    if comparison.is_consistent() {
        info!("Cart search matches search ({} identifiers)", search_results.len());
    } else {
        warn!("Cart search differs from search: {comparison:?}");
    }

    info!("Step: {}", VerifyStep::Done);
    Ok(VerifyOutcome {
        cart_id: config.cart_id.clone(),
        query: config.query.clone(),
        search_results,
        cart_elements,
        cart_search_results,
        comparison,
    })
}
