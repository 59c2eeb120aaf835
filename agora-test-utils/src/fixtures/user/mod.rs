//! Factories for the user payloads returned by the mock backend.

pub mod factory;
