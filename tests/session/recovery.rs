//! Tests for recovering from an expired session.
//!
//! A 401 on the first attempt of a call refreshes the session once and retries the call; a
//! failed refresh or a second 401 surfaces the error to the caller.

use agora::{
    client::session::{RequestBody, RequestOptions},
    error::{kind::ErrorKind, Error},
};
use agora_test_utils::constant::REFRESHED_COOKIE;
use mockito::Matcher;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use super::*;

#[tokio::test]
/// Expect a 401 to be recovered from by refreshing the session & retrying once
async fn retries_after_refreshing_session() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_refresh_endpoint(1).build().await?;
    let body = json!([{ "id": "1", "title": "Opening" }]);
    let mocks = test
        .auth()
        .create_protected_endpoint("GET", "/api/participant/talks", body.clone(), 1, 1);
    test.mocks.extend(mocks);

    let result: Value = test.client.get("/api/participant/talks").await?;

    assert_eq!(result, body);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the refreshed session to be reused by later calls without another refresh
async fn reuses_refreshed_session_for_later_calls() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_refresh_endpoint(1).build().await?;
    let mocks = test
        .auth()
        .create_protected_endpoint("GET", "/api/participant/profile", json!({}), 1, 2);
    test.mocks.extend(mocks);

    let _: Value = test.client.get("/api/participant/profile").await?;
    let _: Value = test.client.get("/api/participant/profile").await?;

    assert!(!test.client.refresh_gate().is_in_flight());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the original 401 error when the session refresh fails
async fn returns_original_error_when_refresh_fails() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_failing_refresh_endpoint(1)
        .build()
        .await?;
    let mock = test
        .auth()
        .create_unauthorized_endpoint("GET", "/api/participant/talks", 1);
    test.mocks.push(mock);

    let result = test.client.get::<Value>("/api/participant/talks").await;

    match result {
        Err(Error::ApiError(err)) => {
            assert_eq!(err.status, StatusCode::UNAUTHORIZED);
            assert_eq!(err.message, "unauthorized");
        }
        other => panic!("expected unauthorized API error, got {:?}", other),
    }
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a 401 on the retried call to be returned without a second refresh
async fn does_not_refresh_twice_for_one_call() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_refresh_endpoint(1).build().await?;
    let mock = test
        .auth()
        .create_unauthorized_endpoint("GET", "/api/participant/talks", 2);
    test.mocks.push(mock);

    let err = test
        .client
        .get::<Value>("/api/participant/talks")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TerminalAuth);
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect no refresh when the caller opted out of recovery
async fn skip_refresh_returns_unauthorized_immediately() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_refresh_endpoint(0).build().await?;
    let mock = test
        .auth()
        .create_unauthorized_endpoint("POST", "/api/auth/logout", 1);
    test.mocks.push(mock);

    let result = test
        .client
        .request(
            Method::POST,
            "/api/auth/logout",
            RequestBody::Empty,
            RequestOptions::skip_refresh(),
        )
        .await;

    assert!(result.unwrap_err().is_unauthorized());
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect non-401 errors to be returned without touching the session
async fn other_errors_do_not_refresh() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_refresh_endpoint(0)
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/admin/users")
                .match_query(Matcher::Any)
                .with_status(403)
                .with_header("content-type", "application/json")
                .with_body(r#"{"error":"forbidden"}"#)
                .create()
        })
        .build()
        .await?;

    let err = test
        .client
        .get::<Value>("/api/admin/users")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Request);
    assert_eq!(err.to_string(), "forbidden");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect the retried request to resend its JSON body
async fn retry_resends_request_body() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_refresh_endpoint(1).build().await?;
    let payload = json!({ "title": "Opening" });
    let mocks = vec![
        test.server
            .mock("POST", "/api/participant/talks")
            .match_query(Matcher::Any)
            .match_header("cookie", Matcher::Missing)
            .match_body(Matcher::Json(payload.clone()))
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"unauthorized"}"#)
            .expect(1)
            .create(),
        test.server
            .mock("POST", "/api/participant/talks")
            .match_query(Matcher::Any)
            .match_header("cookie", Matcher::Regex(REFRESHED_COOKIE.to_string()))
            .match_body(Matcher::Json(payload.clone()))
            .with_status(201)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id":"42"}"#)
            .expect(1)
            .create(),
    ];
    test.mocks.extend(mocks);

    let created: Value = test.client.post("/api/participant/talks", &payload).await?;

    assert_eq!(created, json!({ "id": "42" }));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect concurrent 401s to share a single session refresh & all be retried
async fn concurrent_401s_share_one_refresh() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_refresh_endpoint(1).build().await?;
    let body = json!({ "ok": true });
    let mocks = test
        .auth()
        .create_protected_endpoint("GET", "/api/participant/talks", body.clone(), 5, 5);
    test.mocks.extend(mocks);

    let calls = (0..5).map(|_| test.client.get::<Value>("/api/participant/talks"));
    let results = futures::future::join_all(calls).await;

    for result in results {
        assert_eq!(result?, body);
    }
    assert_eq!(test.client.refresh_gate().generation(), 1);
    assert!(!test.client.refresh_gate().is_in_flight());
    test.assert_mocks();

    Ok(())
}
