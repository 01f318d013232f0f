use thiserror::Error;
use zum_types::TransportError;

#[derive(Debug, Error)]
pub enum ZumError {
    /// The client cannot make calls as configured (e.g. no access token).
    #[error("{0}")]
    Configuration(String),

    /// A configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

impl ZumError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
