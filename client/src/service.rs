//! The endpoint-per-method client.

use tracing::{debug, error};
use zum_types::{FormBody, HttpMethod, HttpRequest, Transport, TransportError};

use crate::config::{ClientConfig, FailureMode};
use crate::endpoint::Endpoint;
use crate::http::HttpTransport;
use crate::ZumError;

const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// Client for the ZUM Services API.
///
/// Each public method maps to one REST route and returns the raw response
/// body. The configuration is fixed at construction; the client can be
/// shared across threads when its transport can.
pub struct ServiceClient<T = HttpTransport> {
    config: ClientConfig,
    transport: T,
}

impl ServiceClient<HttpTransport> {
    /// Create a client that talks HTTP via reqwest.
    pub fn new(config: ClientConfig) -> Result<Self, ZumError> {
        let transport = HttpTransport::new()?;
        Ok(Self { config, transport })
    }
}

impl<T: Transport> ServiceClient<T> {
    /// Create a client on top of an arbitrary transport.
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Create a new ZUM address.
    pub fn create_address(&self) -> Result<Vec<u8>, ZumError> {
        self.call(&Endpoint::CreateAddress)
    }

    /// Delete the given address.
    pub fn delete_address(&self, address: &str) -> Result<Vec<u8>, ZumError> {
        self.call(&Endpoint::DeleteAddress { address })
    }

    /// Details of the given address.
    pub fn get_address(&self, address: &str) -> Result<Vec<u8>, ZumError> {
        self.call(&Endpoint::GetAddress { address })
    }

    /// All addresses associated with the access token.
    pub fn get_addresses(&self) -> Result<Vec<u8>, ZumError> {
        self.call(&Endpoint::GetAddresses)
    }

    /// Scan an address for transactions in the 100 blocks starting at
    /// `block_index`.
    pub fn scan_address(&self, address: &str, block_index: u64) -> Result<Vec<u8>, ZumError> {
        self.call(&Endpoint::ScanAddress {
            address,
            block_index,
        })
    }

    /// Public and secret spend keys of the given address.
    pub fn get_address_keys(&self, address: &str) -> Result<Vec<u8>, ZumError> {
        self.call(&Endpoint::GetAddressKeys { address })
    }

    /// Create an integrated address for `address` with `payment_id`.
    pub fn integrate_address(&self, address: &str, payment_id: &str) -> Result<Vec<u8>, ZumError> {
        self.call(&Endpoint::IntegrateAddress {
            address,
            payment_id,
        })
    }

    /// All integrated addresses derived from the given address.
    pub fn get_integrated_addresses(&self, address: &str) -> Result<Vec<u8>, ZumError> {
        self.call(&Endpoint::GetIntegratedAddresses { address })
    }

    /// Service fee for sending `amount` ZUM.
    pub fn get_fee(&self, amount: f64) -> Result<Vec<u8>, ZumError> {
        self.call(&Endpoint::GetFee { amount })
    }

    /// Send a transaction. Empty `payment_id` / `extra` are not sent.
    pub fn create_transfer(
        &self,
        from: &str,
        to: &str,
        amount: f64,
        fee: f64,
        payment_id: &str,
        extra: &str,
    ) -> Result<Vec<u8>, ZumError> {
        self.call(&Endpoint::CreateTransfer {
            from,
            to,
            amount,
            fee,
            payment_id,
            extra,
        })
    }

    /// Details of the transaction with the given hash.
    pub fn get_transfer(&self, transaction_hash: &str) -> Result<Vec<u8>, ZumError> {
        self.call(&Endpoint::GetTransfer { transaction_hash })
    }

    /// Wallet container info and health check.
    pub fn get_wallet(&self) -> Result<Vec<u8>, ZumError> {
        self.call(&Endpoint::GetWallet)
    }

    /// Current status of the ZUM Services infrastructure.
    pub fn get_status(&self) -> Result<Vec<u8>, ZumError> {
        self.call(&Endpoint::GetStatus)
    }

    /// Validate the configuration, then send `endpoint`.
    pub fn call(&self, endpoint: &Endpoint<'_>) -> Result<Vec<u8>, ZumError> {
        self.config.validate()?;

        let path = endpoint.path();
        let result = match endpoint.method() {
            HttpMethod::Get => self.get(&path),
            HttpMethod::Delete => self.delete(&path),
            HttpMethod::Post => self.post(&path, &endpoint.form().unwrap_or_default()),
        };

        match result {
            Ok(body) => Ok(body),
            Err(e) => {
                error!(path = %path, error = %e, "ZUM Services request failed");
                match self.config.failure_mode {
                    FailureMode::Surface => Err(e.into()),
                    FailureMode::Collapse => Ok(Vec::new()),
                }
            }
        }
    }

    /// Build the request that `endpoint` would send, without sending it.
    pub fn build_request(&self, endpoint: &Endpoint<'_>) -> Result<HttpRequest, TransportError> {
        let path = endpoint.path();
        match endpoint.method() {
            HttpMethod::Get => self.get_request(&path),
            HttpMethod::Delete => self.delete_request(&path),
            HttpMethod::Post => self.post_request(&path, &endpoint.form().unwrap_or_default()),
        }
    }

    fn get(&self, path: &str) -> Result<Vec<u8>, TransportError> {
        let request = self.get_request(path)?;
        self.send(&request)
    }

    fn post(&self, path: &str, form: &FormBody) -> Result<Vec<u8>, TransportError> {
        let request = self.post_request(path, form)?;
        self.send(&request)
    }

    fn delete(&self, path: &str) -> Result<Vec<u8>, TransportError> {
        let request = self.delete_request(path)?;
        self.send(&request)
    }

    // GET and DELETE send the bare token; POST uses the Bearer scheme.
    // The server expects exactly this.

    fn get_request(&self, path: &str) -> Result<HttpRequest, TransportError> {
        Ok(HttpRequest::new(HttpMethod::Get, self.url(path)?, self.config.effective_timeout())
            .with_header("Authorization", self.config.access_token.as_str()))
    }

    fn post_request(&self, path: &str, form: &FormBody) -> Result<HttpRequest, TransportError> {
        let body = form.encode()?;
        Ok(
            HttpRequest::new(HttpMethod::Post, self.url(path)?, self.config.effective_timeout())
                .with_header("Authorization", format!("Bearer {}", self.config.access_token))
                .with_header("Content-Type", CONTENT_TYPE_FORM)
                .with_body(body),
        )
    }

    fn delete_request(&self, path: &str) -> Result<HttpRequest, TransportError> {
        Ok(
            HttpRequest::new(HttpMethod::Delete, self.url(path)?, self.config.effective_timeout())
                .with_header("Authorization", self.config.access_token.as_str()),
        )
    }

    fn url(&self, path: &str) -> Result<String, TransportError> {
        if path.is_empty() {
            return Err(TransportError::Build("no endpoint path supplied".to_string()));
        }
        Ok(format!("{}/{}", self.config.base_url.trim_end_matches('/'), path))
    }

    fn send(&self, request: &HttpRequest) -> Result<Vec<u8>, TransportError> {
        debug!(method = %request.method, url = %request.url, "sending request");
        let body = self.transport.execute(request)?;
        debug!(bytes = body.len(), "response body read");
        Ok(body)
    }
}
