//! Error types for the Agora client.
//!
//! Domain-specific errors (API responses, configuration, upload validation) are defined in
//! submodules and aggregated into the crate-wide [`Error`] with `thiserror`, so the `?`
//! operator converts them automatically. [`Error::kind`] classifies an error into the
//! categories callers branch on (see [`kind`]).

pub mod api;
pub mod config;
pub mod kind;
pub mod upload;

use thiserror::Error;

use crate::error::{api::ApiError, config::ConfigError, upload::UploadError};

/// Main error type for the Agora client.
///
/// # Error Categories
/// - API errors (non-2xx responses, including an unrecovered 401)
/// - Configuration errors (missing/invalid environment variables)
/// - Upload validation errors (file too large, unsupported type)
/// - Transport errors (connection failures, invalid URLs)
/// - Local errors (JSON decoding, file IO)
#[derive(Error, Debug)]
pub enum Error {
    /// The backend answered with a non-success status.
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// A file was rejected before being uploaded.
    #[error(transparent)]
    UploadError(#[from] UploadError),
    /// The response was expected to be JSON but carried another content type.
    #[error("Expected a JSON response but received content type {0:?}")]
    UnexpectedContentType(Option<String>),
    /// HTTP transport error (connection, TLS, invalid URL, body streaming).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// JSON (de)serialization error.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
    /// Filesystem error while reading an upload or writing a download.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}
