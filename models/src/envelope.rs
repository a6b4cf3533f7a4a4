//! JSON-LD response envelopes.
//!
//! Fields not listed here are ignored on deserialization.

use crate::Identifier;

use serde::Deserialize;

/// Body of `/search/` and `/cart-search/` responses.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    #[serde(rename = "@graph")]
    pub graph: Vec<GraphItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphItem {
    #[serde(rename = "@id")]
    pub id: Identifier,
}

impl SearchEnvelope {
    /// Identifiers in server order.
    pub fn into_identifiers(self) -> Vec<Identifier> {
        self.graph.into_iter().map(|item| item.id).collect()
    }
}

/// Body of a `PUT /carts/{identifier}` response.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateEnvelope {
    #[serde(rename = "@graph")]
    pub graph: Vec<UpdatedCart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatedCart {
    #[serde(default)]
    pub elements: Vec<Identifier>,
}

impl UpdateEnvelope {
    /// Elements of the first updated cart, if the server returned one.
    pub fn into_first_elements(self) -> Option<Vec<Identifier>> {
        self.graph.into_iter().next().map(|cart| cart.elements)
    }
}
