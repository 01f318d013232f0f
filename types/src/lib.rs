//! Wire-level types for the ZUM Services client.
//!
//! This crate defines what every other crate in the workspace agrees on:
//! the HTTP verbs the API uses, the request shape handed to a transport,
//! the form body encoding, and the `Transport` trait itself.

pub mod error;
pub mod form;
pub mod method;
pub mod request;
pub mod transport;

pub use error::TransportError;
pub use form::FormBody;
pub use method::HttpMethod;
pub use request::HttpRequest;
pub use transport::Transport;
