use agora::{
    client::{AuthService, RouteGuard, SessionClient, SessionStore},
    model::language::Language,
};
use mockito::{Mock, Server, ServerGuard};

use crate::error::TestError;

pub struct TestSetup {
    pub server: ServerGuard,
    pub client: SessionClient,
    pub store: SessionStore,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    /// Start a mock backend and a client pointed at it
    ///
    /// # Arguments
    /// - `language` - UI language the client appends to every request
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Mock server, client with an empty cookie jar and an unresolved store
    /// - `Err(TestError::AgoraError)` - The HTTP client could not be built
    pub async fn new(language: Language) -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let client = SessionClient::new(server.url(), language)?;

        Ok(TestSetup {
            server,
            client,
            store: SessionStore::new(),
            mocks: Vec::new(),
        })
    }

    pub fn auth_service(&self) -> AuthService<'_> {
        AuthService::new(&self.client, &self.store)
    }

    pub fn route_guard(&self) -> RouteGuard {
        RouteGuard::new(self.store.clone())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
