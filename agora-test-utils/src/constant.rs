//! Constant values shared by the test fixtures.
//!
//! None of these are real accounts; they only need to agree between the mock endpoints and the
//! assertions of a test.

/// User ID returned by the mock session endpoints
pub static TEST_USER_ID: &str = "00000000-0000-0000-0000-000000000001";

/// Email of the mock user
pub static TEST_EMAIL: &str = "participant@example.com";

/// Password accepted by the mock login endpoint
pub static TEST_PASSWORD: &str = "correct horse battery staple";

/// Cookie set by the mock refresh endpoint; protected endpoints only succeed when it is sent
pub static REFRESHED_COOKIE: &str = "access_token=refreshed";
