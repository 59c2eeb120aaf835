//! Mock backend fixtures.
//!
//! - `auth` - login, logout, refresh & session endpoints
//! - `user` - factories for session payloads

pub mod auth;
pub mod user;
