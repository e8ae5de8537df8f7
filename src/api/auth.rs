//! Request authentication
//!
//! Credentials are applied to the outgoing request through the
//! `Authenticator` seam so the client stays testable with fakes.

use reqwest::Request;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::error::{LineageError, Result};

/// Applies workspace credentials to an outgoing request
pub trait Authenticator: Send + Sync {
    /// Annotate the request with authentication headers
    fn authenticate(&self, request: &mut Request) -> Result<()>;
}

/// Bearer-token authenticator backed by the workspace config
#[derive(Debug, Clone)]
pub struct TokenAuthenticator {
    token: String,
}

impl TokenAuthenticator {
    /// Create an authenticator for the given access token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Authenticator for TokenAuthenticator {
    fn authenticate(&self, request: &mut Request) -> Result<()> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| LineageError::Auth(e.to_string()))?;
        value.set_sensitive(true);
        request.headers_mut().insert(AUTHORIZATION, value);
        Ok(())
    }
}
