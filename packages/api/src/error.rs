//! Errors returned by [`ApiClient`](crate::ApiClient) calls.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// HTTP 401. The backend no longer accepts the credentials sent.
    #[error("unauthorized: {message}")]
    Unauthorized { message: String },

    /// Any other non-2xx status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// 2xx response whose envelope reports `success: false`.
    #[error("request rejected: {message}")]
    Rejected { message: String },

    /// 2xx response without a `data` payload where one is required.
    #[error("response did not contain any data")]
    MissingData,

    #[error("network error: {0}")]
    Network(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// HTTP status associated with the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let unauthorized = ApiError::Unauthorized {
            message: "jwt expired".into(),
        };
        assert!(unauthorized.is_unauthorized());
        assert_eq!(unauthorized.status(), Some(401));

        let missing = ApiError::Status {
            status: 404,
            message: "Not Found".into(),
        };
        assert!(!missing.is_unauthorized());
        assert_eq!(missing.status(), Some(404));

        assert_eq!(ApiError::Network("refused".into()).status(), None);
    }

    #[test]
    fn test_display() {
        let err = ApiError::Rejected {
            message: "Invalid credentials".into(),
        };
        assert_eq!(err.to_string(), "request rejected: Invalid credentials");
    }
}
