use reqwest::StatusCode;
use thiserror::Error;

/// A non-success response from the backend API.
///
/// `message` is the `error` field of the JSON body when the backend provided one, otherwise
/// the canonical reason phrase of the status, otherwise `HTTP <code>`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Build the error message used when the response body carries no `error` field
    pub fn from_status(status: StatusCode) -> Self {
        let message = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

        Self::new(status, message)
    }

    /// The backend reported the caller as unauthenticated
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }
}
