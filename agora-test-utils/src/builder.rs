//! Declarative test builder.
//!
//! Queues mock endpoints on a [`TestBuilder`] and creates them all in `build()`, returning a
//! [`TestSetup`] whose client talks to the mock backend.

use agora::model::{language::Language, user::MeDto};
use mockito::Mock;

use crate::{error::TestError, TestSetup};

enum RefreshEndpoint {
    Succeeding(usize),
    Failing(usize),
}

/// Builder for declarative test initialization.
///
/// Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    language: Language,

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    refresh_endpoints: Vec<RefreshEndpoint>,
    login_endpoints: Vec<(MeDto, usize)>,
    logout_endpoints: Vec<usize>,
    me_endpoints: Vec<(MeDto, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no mock endpoints and the default language.
    pub fn new() -> Self {
        Self {
            language: Language::default(),
            mock_builders: Vec::new(),
            refresh_endpoints: Vec::new(),
            login_endpoints: Vec::new(),
            logout_endpoints: Vec::new(),
            me_endpoints: Vec::new(),
        }
    }

    /// Set the language the client appends to requests.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Add a refresh endpoint that succeeds and sets the refreshed access cookie.
    ///
    /// # Arguments
    /// - `expected_requests` - Number of times the endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_refresh_endpoint(mut self, expected_requests: usize) -> Self {
        self.refresh_endpoints
            .push(RefreshEndpoint::Succeeding(expected_requests));
        self
    }

    /// Add a refresh endpoint that rejects the refresh token with 401.
    pub fn with_failing_refresh_endpoint(mut self, expected_requests: usize) -> Self {
        self.refresh_endpoints
            .push(RefreshEndpoint::Failing(expected_requests));
        self
    }

    /// Add a login endpoint accepting the test credentials and answering for `me`.
    pub fn with_login_endpoint(mut self, me: MeDto, expected_requests: usize) -> Self {
        self.login_endpoints.push((me, expected_requests));
        self
    }

    pub fn with_logout_endpoint(mut self, expected_requests: usize) -> Self {
        self.logout_endpoints.push(expected_requests);
        self
    }

    /// Add a `GET /api/me` endpoint answering for `me`.
    pub fn with_me_endpoint(mut self, me: MeDto, expected_requests: usize) -> Self {
        self.me_endpoints.push((me, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control.
    ///
    /// # Arguments
    /// - `setup` - Closure that receives the mock server and returns a configured Mock
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Start the mock server and create all queued endpoints.
    ///
    /// # Returns
    /// - `Ok(TestSetup)` - Mock backend with its endpoints and a client pointed at it
    /// - `Err(TestError::AgoraError)` - The HTTP client could not be built
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut setup = TestSetup::new(self.language).await?;

        // Custom endpoints are created first so they take precedence over the shortcuts
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for endpoint in self.refresh_endpoints {
            mocks.push(match endpoint {
                RefreshEndpoint::Succeeding(expected) => {
                    setup.auth().create_refresh_endpoint(expected)
                }
                RefreshEndpoint::Failing(expected) => {
                    setup.auth().create_failing_refresh_endpoint(expected)
                }
            });
        }

        for (me, expected) in self.login_endpoints {
            mocks.push(setup.auth().create_login_endpoint(&me, expected));
        }

        for expected in self.logout_endpoints {
            mocks.push(setup.auth().create_logout_endpoint(expected));
        }

        for (me, expected) in self.me_endpoints {
            mocks.push(setup.auth().create_me_endpoint(&me, expected));
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks.extend(mocks);

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
