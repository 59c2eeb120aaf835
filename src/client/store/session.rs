use std::collections::HashSet;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use dioxus_logger::tracing;
use tokio::sync::watch;

use crate::{
    client::{api, session::SessionClient},
    model::user::{MeDto, RegistrationStatus, Role},
};

/// Identity & registration state of the logged in user, as last fetched from the backend
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub status: RegistrationStatus,
    pub roles: HashSet<Role>,
}

impl Session {
    /// Registration is complete once it has been reviewed, approved or not
    pub fn registration_complete(&self) -> bool {
        self.status != RegistrationStatus::Waiting
    }

    pub fn has_any_role(&self, roles: &HashSet<Role>) -> bool {
        !self.roles.is_disjoint(roles)
    }
}

impl From<MeDto> for Session {
    fn from(me: MeDto) -> Self {
        Self {
            user_id: me.id,
            email: me.email,
            status: me.status,
            roles: me.roles,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// The session has not been fetched yet
    #[default]
    Unresolved,
    /// No user is logged in
    Absent,
    Present(Session),
}

impl SessionState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Self::Unresolved)
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Present(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }
}

/// Holds the current [`SessionState`] and replaces it wholesale on every fetch.
///
/// Cloning the store yields another handle to the same state.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<watch::Sender<SessionState>>,
    /// Bumped by every fetch & clear; a fetch only applies its result if it is still the latest
    generation: Arc<AtomicU64>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    pub fn new() -> Self {
        let (state, _) = watch::channel(SessionState::Unresolved);

        Self {
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Wait until the session has been fetched at least once
    pub async fn resolved(&self) -> SessionState {
        let mut receiver = self.subscribe();

        let state = match receiver.wait_for(SessionState::is_resolved).await {
            Ok(state) => state.clone(),
            Err(_) => SessionState::Absent,
        };

        state
    }

    /// Fetch `GET /api/me` and replace the stored state with the result.
    ///
    /// Any failure, including a terminal 401, resolves the session as absent. A result that
    /// arrives after a newer fetch or a [`clear`](Self::clear) started is discarded.
    pub async fn refetch(&self, client: &SessionClient) -> SessionState {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let next = match api::auth::fetch_me(client).await {
            Ok(me) if !me.id.is_empty() => SessionState::Present(me.into()),
            Ok(_) => {
                tracing::debug!("Session has no user ID, treating user as logged out");

                SessionState::Absent
            }
            Err(err) => {
                tracing::debug!(error = %err, "Failed to fetch session, treating user as logged out");

                SessionState::Absent
            }
        };

        if self.generation.load(Ordering::SeqCst) != generation {
            tracing::debug!("Discarding superseded session fetch");

            return self.state();
        }

        self.state.send_replace(next.clone());
        next
    }

    /// Discard the session, e.g. on logout
    pub fn clear(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(SessionState::Absent);
    }

    /// Replace the state directly, for hydrating from an already known session
    pub fn set(&self, state: SessionState) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.state.send_replace(state);
    }
}
