//! Errors raised while walking the verification steps.
//!
//! Each portal failure is tagged with the step it interrupted so the final
//! message says how far the run got.

use crate::error::portal_client::PortalClientError;
use crate::verify::VerifyStep;

use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum VerifyError {
    #[error("Verify Error: {step} failed: {source} {location}")]
    Step {
        step: VerifyStep,
        #[source]
        source: PortalClientError,
        location: ErrorLocation,
    },
}

impl VerifyError {
    pub fn step(&self) -> VerifyStep {
        match self {
            VerifyError::Step { step, .. } => *step,
        }
    }
}
