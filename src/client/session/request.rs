use reqwest::multipart::{Form, Part};
use serde::Serialize;

use crate::{client::upload::UploadFile, error::Error, model::language::Language};

/// Per-call switches for [`SessionClient::request`](super::SessionClient::request)
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestOptions {
    /// Return the raw response even when it carries a JSON content type
    pub raw: bool,
    /// Do not attempt refresh & retry when the first attempt answers 401
    pub skip_refresh: bool,
}

impl RequestOptions {
    pub fn raw() -> Self {
        Self {
            raw: true,
            ..Self::default()
        }
    }

    pub fn skip_refresh() -> Self {
        Self {
            skip_refresh: true,
            ..Self::default()
        }
    }
}

/// Body of an API request.
///
/// Bodies are kept in a re-sendable form because a request may be issued twice when the
/// first attempt triggers a session refresh.
#[derive(Clone, Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Sent with `Content-Type: application/json`
    Json(serde_json::Value),
    /// Sent as-is; the multipart boundary header is set by the HTTP client
    Multipart(MultipartForm),
}

impl RequestBody {
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self, Error> {
        Ok(Self::Json(serde_json::to_value(value)?))
    }
}

#[derive(Clone, Debug)]
enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: UploadFile },
}

/// A multipart form that can be rebuilt for every attempt of a request
#[derive(Clone, Debug, Default)]
pub struct MultipartForm {
    parts: Vec<FormPart>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(mut self, name: impl Into<String>, file: UploadFile) -> Self {
        self.parts.push(FormPart::File {
            name: name.into(),
            file,
        });
        self
    }

    pub(crate) fn to_form(&self) -> Result<Form, Error> {
        let mut form = Form::new();

        for part in &self.parts {
            form = match part {
                FormPart::Text { name, value } => form.text(name.clone(), value.clone()),
                FormPart::File { name, file } => {
                    let part = Part::bytes(file.bytes.clone())
                        .file_name(file.filename.clone())
                        .mime_str(file.content_type())?;
                    form.part(name.clone(), part)
                }
            };
        }

        Ok(form)
    }
}

/// Resolve `path` against the API base and tag it with the `lang` query parameter.
///
/// Absolute URLs are returned unchanged. Paths that already carry a `lang` parameter are only
/// prefixed with the base.
pub fn with_lang(base: &str, path: &str, language: Language) -> String {
    if is_absolute(path) {
        return path.to_string();
    }

    if path.contains("lang=") {
        return format!("{}{}", base, path);
    }

    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}{}{}lang={}", base, path, separator, language)
}

/// Resolve a file URL returned by the backend into one that can be fetched directly
pub fn normalize_file_url(base: &str, raw: &str) -> String {
    let raw = raw.trim();

    if raw.is_empty() || is_absolute(raw) {
        return raw.to_string();
    }

    if raw.starts_with('/') {
        format!("{}{}", base, raw)
    } else {
        format!("{}/{}", base, raw)
    }
}

fn is_absolute(path: &str) -> bool {
    let lower = path
        .get(..8)
        .unwrap_or(path)
        .to_ascii_lowercase();

    lower.starts_with("http://") || lower.starts_with("https://")
}
