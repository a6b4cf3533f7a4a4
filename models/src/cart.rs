use crate::Identifier;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Edit frame of a cart as returned by `GET {cart}?frame=edit`.
///
/// Only `identifier` and `elements` are interpreted. Every other field the
/// server sends is kept in `extra` and written back untouched on PUT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub identifier: String,

    #[serde(default)]
    pub elements: Vec<Identifier>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cart {
    /// Replaces the element list wholesale.
    pub fn replace_elements(&mut self, elements: Vec<Identifier>) {
        self.elements = elements;
    }
}
