//! Lineage API client
//!
//! Implements the request shape the lineage-tracking endpoints expect:
//! an authenticated HTTP GET whose JSON body carries the request
//! parameters. The response is an open-ended JSON object and is
//! returned undecoded beyond that.

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::api::auth::{Authenticator, TokenAuthenticator};
use crate::api::types::{ColumnLineageRequest, TableLineageRequest};
use crate::config::Config;
use crate::error::{LineageError, Result};

const TABLE_LINEAGE_PATH: &str = "api/2.0/lineage-tracking/table-lineage";
const COLUMN_LINEAGE_PATH: &str = "api/2.0/lineage-tracking/column-lineage";

/// Lineage API client
pub struct LineageClient {
    /// HTTP client
    client: Client,
    /// Workspace base URL
    host: String,
    /// Credential provider for outgoing requests
    authenticator: Box<dyn Authenticator>,
}

impl std::fmt::Debug for LineageClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineageClient")
            .field("host", &self.host)
            .field("authenticator", &"<dyn Authenticator>")
            .finish()
    }
}

impl LineageClient {
    /// Create a new client from the workspace configuration
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_authenticator(
            &config.workspace.host,
            Box::new(TokenAuthenticator::new(config.workspace.token.clone())),
        )
    }

    /// Create a client with a custom authenticator
    pub fn with_authenticator(host: &str, authenticator: Box<dyn Authenticator>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| LineageError::Network(e.to_string()))?;

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
            authenticator,
        })
    }

    /// Get table lineage for a fully qualified table name
    pub async fn table_lineage(
        &self,
        table_name: &str,
        include_entity_lineage: bool,
    ) -> Result<Map<String, Value>> {
        let request = TableLineageRequest {
            table_name: table_name.to_string(),
            include_entity_lineage,
        };
        self.execute(TABLE_LINEAGE_PATH, &request).await
    }

    /// Get column lineage for a table column
    pub async fn column_lineage(
        &self,
        table_name: &str,
        column_name: &str,
    ) -> Result<Map<String, Value>> {
        let request = ColumnLineageRequest {
            table_name: table_name.to_string(),
            column_name: column_name.to_string(),
        };
        self.execute(COLUMN_LINEAGE_PATH, &request).await
    }

    /// Build full API URL
    fn build_url(&self, path: &str) -> String {
        format!("{}/{}", self.host, path.trim_start_matches('/'))
    }

    /// Issue an authenticated GET carrying `body` as its JSON payload
    /// and decode the 200 response as a JSON object.
    ///
    /// The endpoints read their parameters from the body of a GET
    /// request. That shape is unusual but is what the server expects;
    /// do not switch it to a POST or a query string.
    async fn execute<B: Serialize>(&self, path: &str, body: &B) -> Result<Map<String, Value>> {
        let payload = serde_json::to_vec(body).map_err(|e| LineageError::Marshal(e.to_string()))?;

        let url = self.build_url(path);
        let mut request = self
            .client
            .request(Method::GET, &url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(payload)
            .build()
            .map_err(|e| LineageError::Request(e.to_string()))?;

        self.authenticator.authenticate(&mut request)?;

        debug!(%url, "executing lineage request");
        let response = self.client.execute(request).await?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LineageError::Read(e.to_string()))?;

        if status != StatusCode::OK {
            return Err(LineageError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| LineageError::Parse(e.to_string()))
    }
}
