//! Lineage API Client Module
//!
//! Thin client for the lineage-tracking REST endpoints. The endpoints
//! take their parameters as a JSON body on a GET request and answer
//! with an open-ended JSON object.

// Module declarations
pub mod auth;
pub mod client;
pub mod types;

// Re-export main types for convenience
pub use auth::{Authenticator, TokenAuthenticator};
pub use client::LineageClient;
pub use types::{ColumnLineageRequest, TableLineageRequest};
