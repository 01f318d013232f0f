//! reqwest-backed [`Transport`].

use tracing::warn;
use zum_types::{HttpMethod, HttpRequest, Transport, TransportError};

/// Blocking HTTP transport.
///
/// The underlying `reqwest::blocking::Client` is reused across calls; the
/// timeout comes from each request rather than from the client.
#[derive(Clone)]
pub struct HttpTransport {
    /// HTTP client (reusable connection pool).
    http: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, TransportError> {
        let http = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| TransportError::Build(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { http })
    }

    /// Wrap an already configured client.
    pub fn from_client(http: reqwest::blocking::Client) -> Self {
        Self { http }
    }
}

impl Transport for HttpTransport {
    fn execute(&self, request: &HttpRequest) -> Result<Vec<u8>, TransportError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self
            .http
            .request(method, request.url.as_str())
            .timeout(request.timeout);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().map_err(send_error)?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %request.url, %status, "ZUM Services returned non-success status");
        }

        let body = response.bytes().map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout(e.to_string())
            } else {
                TransportError::Body(e.to_string())
            }
        })?;
        Ok(body.to_vec())
    }
}

fn send_error(e: reqwest::Error) -> TransportError {
    if e.is_builder() {
        TransportError::Build(e.to_string())
    } else if e.is_timeout() {
        TransportError::Timeout(e.to_string())
    } else if e.is_connect() {
        TransportError::Connect(e.to_string())
    } else {
        TransportError::Request(e.to_string())
    }
}
