//! Session-aware HTTP client for the backend API.
//!
//! [`SessionClient`] attaches the session cookie jar and the `lang` query parameter to every
//! call and recovers once from an expired access token: a 401 on the first attempt of a call
//! triggers a refresh through the shared [`RefreshGate`], after which the call is retried a
//! single time. A failed refresh surfaces the original 401.

pub mod refresh;
pub mod request;
pub mod response;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus_logger::tracing;
use parking_lot::RwLock;
use reqwest::{header::ACCEPT, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};

pub use refresh::{RefreshFailure, RefreshGate, RefreshResult};
pub use request::{MultipartForm, RequestBody, RequestOptions};
pub use response::{ApiResponse, Download};

use crate::{config::Config, error::Error, model::language::Language};

pub const REFRESH_PATH: &str = "/api/auth/refresh";

const APPLICATION_JSON: &str = "application/json";

pub struct SessionClient {
    http: reqwest::Client,
    base_url: String,
    language: RwLock<Language>,
    refresh: Arc<RefreshGate>,
}

impl SessionClient {
    /// Build a client with its own cookie store against `base_url`
    pub fn new(base_url: impl Into<String>, language: Language) -> Result<Self, Error> {
        let http = reqwest::Client::builder().cookie_store(true).build()?;

        Ok(Self::with_http_client(http, base_url, language))
    }

    /// Build a client on top of an existing HTTP client; the caller is responsible for giving
    /// it a cookie store
    pub fn with_http_client(
        http: reqwest::Client,
        base_url: impl Into<String>,
        language: Language,
    ) -> Self {
        let base_url: String = base_url.into();

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            language: RwLock::new(language),
            refresh: RefreshGate::new(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, Error> {
        Self::new(&config.api_base_url, config.language)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn language(&self) -> Language {
        *self.language.read()
    }

    /// Switch the language sent with subsequent requests
    pub fn set_language(&self, language: Language) {
        *self.language.write() = language;
    }

    /// Full request URL for a backend-relative path, tagged with the current language
    pub fn url(&self, path: &str) -> String {
        request::with_lang(&self.base_url, path, self.language())
    }

    /// Resolve a file URL returned by the backend
    pub fn file_url(&self, raw: &str) -> String {
        request::normalize_file_url(&self.base_url, raw)
    }

    /// The gate coordinating session refreshes for this client
    pub fn refresh_gate(&self) -> &Arc<RefreshGate> {
        &self.refresh
    }

    /// Issue a request, recovering once from an expired session.
    ///
    /// # Errors
    /// - `Error::ApiError` - non-success status, a 401 on the retried attempt, or the first
    ///   attempt's 401 when the session refresh failed
    /// - `Error::ReqwestError` - the request could not be sent or its body read
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        options: RequestOptions,
    ) -> Result<ApiResponse, Error> {
        let mut attempt = 0;

        loop {
            let response = self.send(&method, path, &body).await?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED && attempt == 0 && !options.skip_refresh {
                tracing::debug!(method = %method, path = %path, "Unauthenticated, refreshing session");

                let unauthorized = response::read_api_error(response).await;

                if let Err(failure) = self.refresh_session().await {
                    tracing::warn!(
                        method = %method,
                        path = %path,
                        reason = %failure.0,
                        "Session refresh failed"
                    );

                    return Err(unauthorized.into());
                }

                attempt += 1;
                continue;
            }

            if !status.is_success() {
                return Err(response::read_api_error(response).await.into());
            }

            if options.raw || !response::is_json(&response) {
                return Ok(ApiResponse::Raw(response));
            }

            return Ok(ApiResponse::Json(response.json().await?));
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.request(Method::GET, path, RequestBody::Empty, RequestOptions::default())
            .await?
            .json()
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, RequestBody::json(body)?, RequestOptions::default())
            .await?
            .json()
    }

    /// POST without a body, so no JSON content type is sent
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.request(Method::POST, path, RequestBody::Empty, RequestOptions::default())
            .await?
            .json()
    }

    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, RequestBody::json(body)?, RequestOptions::default())
            .await?
            .json()
    }

    pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, RequestBody::json(body)?, RequestOptions::default())
            .await?
            .json()
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.request(Method::DELETE, path, RequestBody::Empty, RequestOptions::default())
            .await?
            .json()
    }

    /// Send a multipart form with `POST` or `PUT`
    pub async fn upload<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: MultipartForm,
    ) -> Result<T, Error> {
        self.request(method, path, RequestBody::Multipart(form), RequestOptions::default())
            .await?
            .json()
    }

    /// Fetch a file as raw bytes
    pub async fn download(&self, path: &str) -> Result<Download, Error> {
        let response = self
            .request(Method::GET, path, RequestBody::Empty, RequestOptions::raw())
            .await?;

        match response {
            ApiResponse::Raw(response) => Download::from_response(response).await,
            ApiResponse::Json(value) => Ok(Download {
                filename: None,
                content_type: Some("application/json".to_string()),
                bytes: serde_json::to_vec(&value)?,
            }),
        }
    }

    /// Fetch a file and write it to `dest`; a directory destination receives the file under the
    /// name given by the backend, or `fallback_name` when it gives none
    pub async fn download_to(
        &self,
        path: &str,
        dest: &Path,
        fallback_name: &str,
    ) -> Result<PathBuf, Error> {
        let download = self.download(path).await?;

        let target = if tokio::fs::metadata(dest)
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
        {
            let name = download
                .filename
                .as_deref()
                .and_then(|name| Path::new(name).file_name())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(fallback_name));

            dest.join(name)
        } else {
            dest.to_path_buf()
        };

        tokio::fs::write(&target, &download.bytes).await?;
        tracing::debug!(
            path = %path,
            target = %target.display(),
            bytes = download.bytes.len(),
            "Saved download"
        );

        Ok(target)
    }

    async fn send(
        &self,
        method: &Method,
        path: &str,
        body: &RequestBody,
    ) -> Result<reqwest::Response, Error> {
        let request = self
            .http
            .request(method.clone(), self.url(path))
            .header(ACCEPT, APPLICATION_JSON);

        let request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(value),
            RequestBody::Multipart(form) => request.multipart(form.to_form()?),
        };

        Ok(request.send().await?)
    }

    /// Refresh the session through the shared gate; concurrent callers share one call
    async fn refresh_session(&self) -> RefreshResult {
        let http = self.http.clone();
        let url = self.url(REFRESH_PATH);

        self.refresh
            .run(move || async move {
                let response = http
                    .post(url)
                    .header(ACCEPT, APPLICATION_JSON)
                    .send()
                    .await
                    .map_err(|e| RefreshFailure(e.to_string()))?;

                if !response.status().is_success() {
                    return Err(RefreshFailure(format!(
                        "refresh rejected with status {}",
                        response.status()
                    )));
                }

                Ok(())
            })
            .await
    }
}
