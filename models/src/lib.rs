//! Data exchanged with the portal.
//!
//! Models have no I/O - they describe keyfile entries, carts and the
//! JSON-LD envelopes the portal answers with.

pub mod cart;
pub mod credential;
pub mod envelope;
pub mod error;
pub mod identifier;


pub use cart::Cart;
pub use common::ErrorLocation;
pub use credential::CredentialEntry;
pub use credential::builder::CredentialEntryBuilder;
pub use envelope::{GraphItem, SearchEnvelope, UpdateEnvelope, UpdatedCart};
pub use error::model_error::ModelError;
pub use identifier::Identifier;
