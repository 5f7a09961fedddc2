//! Error types for the HTTP client

use armcalc_core::ValidationError;
use armcalc_wire::WireError;
use thiserror::Error;

/// Failure of the underlying transport collaborator.
///
/// Propagated unmodified; this layer never retries. A non-2xx status is not
/// by itself a transport error - the service's own return code is the only
/// calculation-failure signal this client interprets.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Transport failure: {0}")]
    Other(String),
}

/// Errors surfaced by [`crate::ArmCalcClient`] operations
#[derive(Debug, Error)]
pub enum ArmCalcError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Wire format error: {0}")]
    Wire(#[from] WireError),
}
