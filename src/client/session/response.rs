use reqwest::{header::CONTENT_TYPE, Response};
use serde::de::DeserializeOwned;

use crate::{
    error::{api::ApiError, Error},
    model::api::ErrorDto,
};

/// Successful result of an API request
#[derive(Debug)]
pub enum ApiResponse {
    /// The parsed body of a response with a JSON content type
    Json(serde_json::Value),
    /// Any other response, left for the caller to consume (downloads, plain text)
    Raw(Response),
}

impl ApiResponse {
    /// Deserialize the JSON body into `T`
    pub fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        match self {
            Self::Json(value) => Ok(serde_json::from_value(value)?),
            Self::Raw(response) => Err(Error::UnexpectedContentType(content_type(&response))),
        }
    }

    pub fn into_raw(self) -> Option<Response> {
        match self {
            Self::Raw(response) => Some(response),
            Self::Json(_) => None,
        }
    }
}

/// A file fetched from the backend
#[derive(Clone, Debug)]
pub struct Download {
    /// File name suggested by the `Content-Disposition` header, if any
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl Download {
    pub(crate) async fn from_response(response: Response) -> Result<Self, Error> {
        let filename = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(disposition_filename);
        let content_type = content_type(&response);
        let bytes = response.bytes().await?.to_vec();

        Ok(Self {
            filename,
            content_type,
            bytes,
        })
    }
}

pub(crate) fn content_type(response: &Response) -> Option<String> {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub(crate) fn is_json(response: &Response) -> bool {
    content_type(response)
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false)
}

/// Convert a non-success response into an [`ApiError`], preferring the `error` field of a
/// JSON body over the status text
pub(crate) async fn read_api_error(response: Response) -> ApiError {
    let status = response.status();

    match response.bytes().await {
        Ok(body) => match serde_json::from_slice::<ErrorDto>(&body) {
            Ok(dto) if !dto.error.is_empty() => ApiError::new(status, dto.error),
            _ => ApiError::from_status(status),
        },
        Err(_) => ApiError::from_status(status),
    }
}

fn disposition_filename(header: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|param| {
        let value = param.strip_prefix("filename=")?;
        let value = value.trim_matches('"');

        (!value.is_empty()).then(|| value.to_string())
    })
}
