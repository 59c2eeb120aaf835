use serde::{Deserialize, Serialize};

/// The response body the backend returns when an API request fails
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Acknowledgement returned by mutating endpoints
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct OkDto {
    #[serde(default)]
    pub ok: bool,
}
