pub mod keyfile;
pub mod portal_client;
pub mod verify;

pub use keyfile::KeyfileError;
pub use portal_client::PortalClientError;
pub use verify::VerifyError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Keyfile(#[from] KeyfileError),

    #[error(transparent)]
    PortalClient(#[from] PortalClientError),

    #[error(transparent)]
    Verify(#[from] VerifyError),
}
