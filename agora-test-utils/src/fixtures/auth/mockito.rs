//! Mock endpoints for the authentication & session API.
//!
//! Every mock ignores the query string since the client appends `lang` to each request; tests
//! that care about the language match on it explicitly.

use agora::model::user::MeDto;
use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{
    constant::{REFRESHED_COOKIE, TEST_EMAIL, TEST_PASSWORD},
    fixtures::{auth::AuthFixtures, user::factory},
};

impl<'a> AuthFixtures<'a> {
    /// Create a refresh endpoint that succeeds and sets the refreshed access cookie.
    ///
    /// # Arguments
    /// - `expected_requests` - Number of times the refresh endpoint should be called
    pub fn create_refresh_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/api/auth/refresh")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("set-cookie", &format!("{}; Path=/; HttpOnly", REFRESHED_COOKIE))
            .with_body(json!({ "ok": true }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a refresh endpoint rejecting the refresh token.
    pub fn create_failing_refresh_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/api/auth/refresh")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "invalid refresh token" }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a login endpoint accepting the test credentials and answering for `me`.
    pub fn create_login_endpoint(&mut self, me: &MeDto, expected_requests: usize) -> Mock {
        let body = serde_json::to_string(&factory::login_dto(me)).unwrap();

        self.setup
            .server
            .mock("POST", "/api/auth/login")
            .match_query(Matcher::Any)
            .match_body(Matcher::PartialJson(
                json!({ "email": TEST_EMAIL, "password": TEST_PASSWORD }),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("set-cookie", &format!("{}; Path=/; HttpOnly", REFRESHED_COOKIE))
            .with_body(body)
            .expect(expected_requests)
            .create()
    }

    /// Create a login endpoint rejecting any credentials.
    pub fn create_rejected_login_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/api/auth/login")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "invalid credentials" }).to_string())
            .expect(expected_requests)
            .create()
    }

    pub fn create_logout_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", "/api/auth/logout")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_header("set-cookie", "access_token=; Path=/; Max-Age=0")
            .with_body(json!({ "ok": true }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a `GET /api/me` endpoint answering for `me` regardless of cookies.
    pub fn create_me_endpoint(&mut self, me: &MeDto, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", "/api/me")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(me).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create an endpoint that only succeeds once the refreshed access cookie is sent.
    ///
    /// Creates two mocks for `method` `path`:
    /// 1. Without the cookie - 401 with an `unauthorized` error message
    /// 2. With the cookie - 200 with `body`
    ///
    /// # Arguments
    /// - `expected_rejections` - Number of requests expected without the cookie
    /// - `expected_successes` - Number of requests expected with the cookie
    ///
    /// # Returns
    /// - `Vec<Mock>` - The rejecting mock followed by the succeeding mock
    pub fn create_protected_endpoint(
        &mut self,
        method: &str,
        path: &str,
        body: serde_json::Value,
        expected_rejections: usize,
        expected_successes: usize,
    ) -> Vec<Mock> {
        let rejecting = self
            .setup
            .server
            .mock(method, path)
            .match_query(Matcher::Any)
            .match_header("cookie", Matcher::Missing)
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "unauthorized" }).to_string())
            .expect(expected_rejections)
            .create();

        let succeeding = self
            .setup
            .server
            .mock(method, path)
            .match_query(Matcher::Any)
            .match_header("cookie", Matcher::Regex(REFRESHED_COOKIE.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_successes)
            .create();

        vec![rejecting, succeeding]
    }

    /// Create an endpoint rejecting every request as unauthenticated.
    pub fn create_unauthorized_endpoint(
        &mut self,
        method: &str,
        path: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock(method, path)
            .match_query(Matcher::Any)
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "unauthorized" }).to_string())
            .expect(expected_requests)
            .create()
    }
}
