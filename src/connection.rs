//! API key holder used to authenticate every request.

use crate::error::{CrelateError, Result};

/// A Crelate connection: the API key sent as `X-API-KEY`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    api_key: String,
}

impl Connection {
    /// Create a connection. The key is stored as given, without validation.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }

    /// The stored API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Whether a usable (non-blank) key is present.
    pub fn is_established(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Return the key, or fail if none is configured.
    pub fn require(&self) -> Result<&str> {
        if self.is_established() {
            Ok(&self.api_key)
        } else {
            Err(CrelateError::ConnectionNotEstablished)
        }
    }
}
