//! The seam between the client and whatever actually speaks HTTP.

use crate::{HttpRequest, TransportError};

/// Executes one request and returns the raw response body.
///
/// Implementations must apply `request.timeout` and must not retry.
/// The body is returned whatever the HTTP status.
pub trait Transport: Send + Sync {
    fn execute(&self, request: &HttpRequest) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: &HttpRequest) -> Result<Vec<u8>, TransportError> {
        (**self).execute(request)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn execute(&self, request: &HttpRequest) -> Result<Vec<u8>, TransportError> {
        (**self).execute(request)
    }
}
