//! Transport-level failures.

use thiserror::Error;

/// Anything that goes wrong between handing a request to the transport and
/// holding the full response body.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("failed to build request: {0}")]
    Build(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("HTTP request failed: {0}")]
    Request(String),

    #[error("failed to read response body: {0}")]
    Body(String),
}
