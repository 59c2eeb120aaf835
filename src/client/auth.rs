use dioxus_logger::tracing;

use crate::{
    client::{
        api,
        session::SessionClient,
        store::{SessionState, SessionStore},
    },
    error::Error,
    model::{api::OkDto, user::LoginDto},
};

/// Authentication flows that keep the [`SessionStore`] in step with the backend
pub struct AuthService<'a> {
    client: &'a SessionClient,
    store: &'a SessionStore,
}

impl<'a> AuthService<'a> {
    pub fn new(client: &'a SessionClient, store: &'a SessionStore) -> Self {
        Self { client, store }
    }

    /// Log in and refetch the session
    ///
    /// # Returns
    /// - `Ok(SessionState)` - The session as fetched after logging in
    /// - `Err(Error)` - The backend rejected the credentials; the session is left untouched
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionState, Error> {
        let login: LoginDto = api::auth::login(self.client, email, password).await?;
        tracing::debug!(user_id = %login.user_id, "Logged in");

        Ok(self.store.refetch(self.client).await)
    }

    /// Log out; the session is discarded even when the backend call fails
    pub async fn logout(&self) -> Result<(), Error> {
        let result = api::auth::logout(self.client).await;
        self.store.clear();

        if let Err(err) = &result {
            tracing::debug!(error = %err, "Logout request failed, session discarded locally");
        }

        result.map(|_| ())
    }

    /// Create an account; the user logs in separately after verifying their email
    pub async fn register(&self, email: &str, password: &str) -> Result<OkDto, Error> {
        api::auth::register_account(self.client, email, password).await
    }

    pub async fn verify_email(&self, token: &str) -> Result<OkDto, Error> {
        api::auth::verify_email(self.client, token).await
    }

    /// Refetch the session, e.g. after submitting the registration form
    pub async fn refresh_session(&self) -> SessionState {
        self.store.refetch(self.client).await
    }
}
