//! Route access decisions derived from the session state.
//!
//! [`decide`] is a pure function over a [`SessionState`] snapshot and a [`Requirement`]; it
//! never fails. [`RouteGuard`] wraps it for asynchronous navigation, waiting for the session
//! to resolve and dropping decisions for navigations that were superseded meanwhile.

pub mod route;


use std::collections::HashSet;

pub use route::{NavigationTicket, RouteGuard};

use crate::{client::store::SessionState, model::user::Role};

/// What a UI subtree demands of the session before it may render
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Requirement {
    /// Any logged in user
    Authenticated,
    /// Logged in with registration still waiting for review
    IncompleteRegistration,
    /// Logged in with registration reviewed
    CompletedRegistration,
    /// Logged in with at least one of the given roles
    Role(HashSet<Role>),
}

impl Requirement {
    pub fn any_role<I: IntoIterator<Item = Role>>(roles: I) -> Self {
        Self::Role(roles.into_iter().collect())
    }
}

/// Destination of a guard redirect
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Redirect {
    Login,
    Cabinet,
    Register,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Cabinet => "/cabinet",
            Self::Register => "/register",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    RedirectTo(Redirect),
    /// The session is still being fetched
    Pending,
    /// Render an in-place "access denied" message without navigating away
    Deny,
}

/// Decide whether a subtree guarded by `requirement` may render for `state`.
///
/// A failed role requirement denies in place instead of redirecting: a logged in user without
/// the role has no page they should be sent to.
pub fn decide(state: &SessionState, requirement: &Requirement) -> Decision {
    let session = match state {
        SessionState::Unresolved => return Decision::Pending,
        SessionState::Absent => return Decision::RedirectTo(Redirect::Login),
        SessionState::Present(session) => session,
    };

    match requirement {
        Requirement::Authenticated => Decision::Allow,
        Requirement::IncompleteRegistration if session.registration_complete() => {
            Decision::RedirectTo(Redirect::Cabinet)
        }
        Requirement::IncompleteRegistration => Decision::Allow,
        Requirement::CompletedRegistration if !session.registration_complete() => {
            Decision::RedirectTo(Redirect::Register)
        }
        Requirement::CompletedRegistration => Decision::Allow,
        Requirement::Role(roles) if session.has_any_role(roles) => Decision::Allow,
        Requirement::Role(_) => Decision::Deny,
    }
}

/// Decide for nested guards: the outermost requirement that does not allow wins
pub fn decide_all(state: &SessionState, requirements: &[Requirement]) -> Decision {
    requirements
        .iter()
        .map(|requirement| decide(state, requirement))
        .find(|decision| *decision != Decision::Allow)
        .unwrap_or(Decision::Allow)
}
