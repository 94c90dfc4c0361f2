//! The `{ success, data, error, message }` wrapper around every response body.

use serde::Deserialize;

use crate::error::ApiError;

/// Response envelope used by every backend endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Envelope<T> {
    /// Absent on some endpoints; only an explicit `false` is a rejection.
    pub success: Option<bool>,
    pub data: Option<T>,
    pub error: Option<String>,
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Human-readable reason supplied by the backend, `error` first.
    pub fn reason(&self) -> Option<&str> {
        let present = |m: &&str| !m.trim().is_empty();
        self.error
            .as_deref()
            .filter(present)
            .or(self.message.as_deref().filter(present))
    }

    /// Fail on `success: false`, otherwise drop the payload.
    pub fn into_ack(self) -> Result<(), ApiError> {
        if self.success == Some(false) {
            return Err(ApiError::Rejected {
                message: self.reason().unwrap_or("request was not successful").to_string(),
            });
        }
        Ok(())
    }

    /// Fail on `success: false` or a missing payload.
    pub fn into_data(self) -> Result<T, ApiError> {
        if self.success == Some(false) {
            return Err(ApiError::Rejected {
                message: self.reason().unwrap_or("request was not successful").to_string(),
            });
        }
        self.data.ok_or(ApiError::MissingData)
    }
}
