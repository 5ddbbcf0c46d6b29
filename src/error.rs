use std::fmt;

/// Custom error type for Atlassian provisioning operations
#[derive(Debug)]
pub enum AtlError {
    /// Transport-level failure (DNS, connection refused, timeout, body read)
    Http(reqwest::Error),
    /// API returned an error status for a command that needs success
    Api { status: u16, message: String },
    /// Credentials not found in any source
    CredentialsNotFound(String),
    /// Site (Jira/Confluence host) not found in any source
    SiteNotFound(String),
    /// Failed to read or parse credentials file
    Credentials(String),
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
    /// Base URL is empty or not absolute
    InvalidUrl(String),
    /// Malformed grant argument or preset name
    InvalidGrant(String),
}

impl fmt::Display for AtlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtlError::Http(e) => write!(f, "HTTP request failed: {}", e),
            AtlError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            AtlError::CredentialsNotFound(msg) => write!(f, "{}", msg),
            AtlError::SiteNotFound(msg) => write!(f, "{}", msg),
            AtlError::Credentials(msg) => write!(f, "{}", msg),
            AtlError::Json(msg) => write!(f, "JSON error: {}", msg),
            AtlError::Config(msg) => write!(f, "Configuration error: {}", msg),
            AtlError::InvalidUrl(msg) => write!(f, "Invalid base URL: {}", msg),
            AtlError::InvalidGrant(msg) => write!(f, "Invalid grant: {}", msg),
        }
    }
}

impl std::error::Error for AtlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AtlError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AtlError {
    fn from(err: reqwest::Error) -> Self {
        AtlError::Http(err)
    }
}

impl From<serde_json::Error> for AtlError {
    fn from(err: serde_json::Error) -> Self {
        AtlError::Json(err.to_string())
    }
}

impl From<std::io::Error> for AtlError {
    fn from(err: std::io::Error) -> Self {
        AtlError::Credentials(err.to_string())
    }
}

/// Result type alias for provisioning operations
pub type Result<T> = std::result::Result<T, AtlError>;
