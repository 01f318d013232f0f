//! Blocking client for the ZUM Services wallet-hosting API.
//!
//! One method per REST route. Every call:
//! - checks that an access token is configured (no request is made otherwise)
//! - builds the route path from the caller's arguments, verbatim
//! - sends it with the token in the `Authorization` header
//! - hands back the raw response body, undecoded
//!
//! The HTTP layer sits behind [`zum_types::Transport`]; [`HttpTransport`] is the
//! reqwest-backed implementation used outside of tests.

pub mod config;
pub mod endpoint;
pub mod error;
pub mod format;
pub mod http;
pub mod service;

pub use config::{ClientConfig, FailureMode, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use endpoint::Endpoint;
pub use error::ZumError;
pub use format::format_amount;
pub use http::HttpTransport;
pub use service::ServiceClient;
pub use zum_types::{HttpMethod, HttpRequest, Transport, TransportError};
