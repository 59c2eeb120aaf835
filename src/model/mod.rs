pub mod admin;
pub mod api;
pub mod conference;
pub mod document;
pub mod language;
pub mod user;
