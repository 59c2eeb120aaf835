//! Typed wrappers for the backend endpoints the portal calls.
//!
//! Each function issues its request through a [`SessionClient`](crate::client::SessionClient),
//! so every call shares the session cookie jar, language tagging and refresh handling.
//! File URLs in responses are resolved against the API base.

pub mod admin;
pub mod auth;
pub mod document;
pub mod export;
pub mod participant;
pub mod public;

/// Percent-encode a single path segment
pub(crate) fn segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
