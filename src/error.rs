use thiserror::Error;

/// Errors that can occur while talking to the source files API
#[derive(Error, Debug)]
pub enum ApiError {
    /// The remote rejected the request input (HTTP 400)
    #[error("Bad request ({status}): {body}")]
    BadRequest { status: u16, body: ErrorBody },

    /// Any other non-2xx response: not found, conflict, auth failure, server error
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: ErrorBody },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ApiError {
    /// Map a non-success status and its raw body onto the error taxonomy
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        let body = ErrorBody::parse(body);
        if status == 400 {
            ApiError::BadRequest { status, body }
        } else {
            ApiError::Http { status, body }
        }
    }

    /// Remote status code, if the error came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest { status, .. } | ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_bad_request(&self) -> bool {
        matches!(self, ApiError::BadRequest { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Http { status: 404, .. })
    }
}

/// Error payload returned by the remote
///
/// Kept structured when the body is JSON, otherwise as plain text.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Json(serde_json::Value),
    Text(String),
}

impl ErrorBody {
    fn parse(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(value) => ErrorBody::Json(value),
            Err(_) => ErrorBody::Text(String::from_utf8_lossy(body).into_owned()),
        }
    }
}

impl std::fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorBody::Json(value) => write!(f, "{}", value),
            ErrorBody::Text(text) => f.write_str(text),
        }
    }
}

/// Result type alias for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
