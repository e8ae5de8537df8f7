use thiserror::Error;

/// lineagectl Error Types
///
/// One variant per step of the request sequence, so a failure message
/// always names the step that produced it.
#[derive(Error, Debug)]
pub enum LineageError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Request body could not be serialized
    #[error("failed to marshal request: {0}")]
    Marshal(String),

    /// HTTP request object could not be constructed
    #[error("failed to create request: {0}")]
    Request(String),

    /// The authenticator could not annotate the request
    #[error("failed to authenticate: {0}")]
    Auth(String),

    /// The HTTP call itself failed (DNS, connection, cancellation)
    #[error("failed to execute request: {0}")]
    Network(String),

    /// Response body could not be read
    #[error("failed to read response: {0}")]
    Read(String),

    /// Non-200 response; `body` is the server's own payload, verbatim
    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    /// 200 response whose body was not a JSON object
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Output sink failure
    #[error("failed to render response: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parameter validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<reqwest::Error> for LineageError {
    fn from(err: reqwest::Error) -> Self {
        LineageError::Network(err.to_string())
    }
}

impl LineageError {
    /// Check if error is authentication-related, either locally
    /// (the authenticator failed) or server-side (401/403)
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            LineageError::Auth(_)
                | LineageError::Api {
                    status: 401 | 403,
                    ..
                }
        )
    }

    /// HTTP status code carried by an API error
    pub fn status(&self) -> Option<u16> {
        match self {
            LineageError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// lineagectl Result type
pub type Result<T> = std::result::Result<T, LineageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_embeds_status_and_body() {
        let err = LineageError::Api {
            status: 403,
            body: r#"{"error_code": "PERMISSION_DENIED"}"#.to_string(),
        };
        let text = format!("{}", err);
        assert!(text.contains("403"));
        assert!(text.contains("PERMISSION_DENIED"));
    }

    #[test]
    fn test_is_auth_error() {
        assert!(LineageError::Auth("bad token".to_string()).is_auth_error());
        assert!(
            LineageError::Api {
                status: 401,
                body: String::new()
            }
            .is_auth_error()
        );
        assert!(
            LineageError::Api {
                status: 403,
                body: String::new()
            }
            .is_auth_error()
        );
        assert!(
            !LineageError::Api {
                status: 500,
                body: String::new()
            }
            .is_auth_error()
        );
        assert!(!LineageError::Parse("oops".to_string()).is_auth_error());
    }

    #[test]
    fn test_status_accessor() {
        let err = LineageError::Api {
            status: 404,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(LineageError::Config("x".to_string()).status(), None);
    }
}
