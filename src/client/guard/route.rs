use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use dioxus_logger::tracing;

use crate::client::{
    guard::{decide_all, Decision, Requirement},
    router::Route,
    store::SessionStore,
};

/// Identifies one navigation; only the latest ticket may apply a guard decision
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationTicket(u64);

/// Evaluates route requirements against a [`SessionStore`] for the current navigation
#[derive(Clone)]
pub struct RouteGuard {
    store: SessionStore,
    navigation: Arc<AtomicU64>,
}

impl RouteGuard {
    pub fn new(store: SessionStore) -> Self {
        Self {
            store,
            navigation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start a navigation, superseding every earlier one
    pub fn begin_navigation(&self) -> NavigationTicket {
        NavigationTicket(self.navigation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: NavigationTicket) -> bool {
        self.navigation.load(Ordering::SeqCst) == ticket.0
    }

    /// Decide against the current snapshot without waiting; `Pending` while unresolved
    pub fn peek(&self, requirement: &Requirement) -> Decision {
        decide_all(&self.store.state(), std::slice::from_ref(requirement))
    }

    /// Begin a navigation and decide once the session is resolved.
    ///
    /// Returns `None` when another navigation began before the session resolved; the view that
    /// asked has been replaced and must not act on the decision.
    pub async fn check(&self, requirement: &Requirement) -> Option<Decision> {
        let ticket = self.begin_navigation();

        self.check_with(ticket, std::slice::from_ref(requirement))
            .await
    }

    /// Begin a navigation to `route` and decide against all of its nested guards
    pub async fn navigate(&self, route: &Route) -> Option<Decision> {
        let ticket = self.begin_navigation();

        self.check_with(ticket, &route.requirements()).await
    }

    /// Decide for an already started navigation
    pub async fn check_with(
        &self,
        ticket: NavigationTicket,
        requirements: &[Requirement],
    ) -> Option<Decision> {
        let state = self.store.resolved().await;

        if !self.is_current(ticket) {
            tracing::debug!(
                ?requirements,
                "Dropping guard decision for superseded navigation"
            );

            return None;
        }

        Some(decide_all(&state, requirements))
    }
}
