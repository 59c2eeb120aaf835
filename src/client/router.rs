use std::collections::HashSet;

use crate::{client::guard::Requirement, model::user::Role};

/// Portal areas and the guards nested around them
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    VerifyEmail,
    /// Public conference pages (news, program, participants, materials, ...)
    Public(String),
    /// Registration form, only while registration is incomplete
    Register,
    /// Participant cabinet and everything under `/cabinet`
    Cabinet(String),
    /// Admin area and everything under `/admin`
    Admin(String),
}

impl Route {
    /// Resolve a path (query string ignored) to the area it belongs to
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = path.trim_end_matches('/');

        match path {
            "" => Route::Home,
            "/login" => Route::Login,
            "/verify-email" => Route::VerifyEmail,
            "/register" => Route::Register,
            _ => {
                if let Some(rest) = sub_path(path, "/cabinet") {
                    Route::Cabinet(rest.to_string())
                } else if let Some(rest) = sub_path(path, "/admin") {
                    Route::Admin(rest.to_string())
                } else {
                    Route::Public(path.to_string())
                }
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::VerifyEmail => "/verify-email".to_string(),
            Route::Public(path) => path.clone(),
            Route::Register => "/register".to_string(),
            Route::Cabinet(rest) => format!("/cabinet{}", rest),
            Route::Admin(rest) => format!("/admin{}", rest),
        }
    }

    /// Guards evaluated outermost first
    pub fn requirements(&self) -> Vec<Requirement> {
        match self {
            Route::Home | Route::Login | Route::VerifyEmail | Route::Public(_) => Vec::new(),
            Route::Register => vec![Requirement::IncompleteRegistration],
            Route::Cabinet(_) => vec![Requirement::CompletedRegistration],
            Route::Admin(_) => vec![
                Requirement::CompletedRegistration,
                Requirement::Role(HashSet::from([Role::Admin])),
            ],
        }
    }
}

/// `/admin` and `/admin/...` match, `/administrator` does not
fn sub_path<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;

    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}
