use std::fmt;

/// Custom error type for control plane operations
#[derive(Debug)]
pub enum CfError {
    /// HTTP request failed (DNS, connection, timeout, bad header)
    Http(reqwest::Error),
    /// Spaces response carried the invalid token marker
    InvalidAuthToken,
    /// Response body did not match the expected JSON shape
    Decode { context: String, message: String },
    /// Writing the report failed
    Output(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for CfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CfError::Http(e) => write!(f, "HTTP request failed: {}", e),
            CfError::InvalidAuthToken => write!(f, "Invalid Auth Token"),
            CfError::Decode { context, message } => {
                write!(f, "Failed to decode {}: {}", context, message)
            }
            CfError::Output(msg) => write!(f, "Output error: {}", msg),
            CfError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for CfError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CfError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CfError {
    fn from(err: reqwest::Error) -> Self {
        CfError::Http(err)
    }
}

impl From<serde_json::Error> for CfError {
    fn from(err: serde_json::Error) -> Self {
        CfError::Decode {
            context: "response".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for CfError {
    fn from(err: std::io::Error) -> Self {
        CfError::Output(err.to_string())
    }
}

/// Result type alias for control plane operations
pub type Result<T> = std::result::Result<T, CfError>;
