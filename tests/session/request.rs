use agora::{
    client::session::{ApiResponse, MultipartForm, RequestBody, RequestOptions},
    client::upload::UploadFile,
    error::Error,
    model::language::Language,
};
use mockito::Matcher;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

use super::*;

mod language_tests {
    use super::*;

    #[tokio::test]
    /// Expect the client language to be appended as the `lang` query parameter
    async fn appends_client_language() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_language(Language::En)
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", "/api/public/news")
                    .match_query(Matcher::Exact("lang=en".to_string()))
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body("[]")
                    .create()
            })
            .build()
            .await?;

        let news: Vec<Value> = test.client.get("/api/public/news").await?;

        assert!(news.is_empty());
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect `lang` to follow existing query parameters
    async fn appends_language_after_existing_query() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", "/api/auth/verify-email")
                    .match_query(Matcher::AllOf(vec![
                        Matcher::UrlEncoded("token".to_string(), "abc".to_string()),
                        Matcher::UrlEncoded("lang".to_string(), "ru".to_string()),
                    ]))
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"ok":true}"#)
                    .create()
            })
            .build()
            .await?;

        let _: Value = test.client.get("/api/auth/verify-email?token=abc").await?;

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect an explicit `lang` parameter to be left as the only one
    async fn preserves_explicit_language() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_language(Language::En)
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", "/api/public/pages/about")
                    .match_query(Matcher::Exact("lang=ru".to_string()))
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"title":"О конференции","body":""}"#)
                    .create()
            })
            .build()
            .await?;

        let _: Value = test.client.get("/api/public/pages/about?lang=ru").await?;

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect a language switch to apply to subsequent requests
    async fn language_switch_applies_to_later_requests() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", "/api/public/sections")
                    .match_query(Matcher::Exact("lang=en".to_string()))
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body("[]")
                    .create()
            })
            .build()
            .await?;

        test.client.set_language(Language::En);
        let _: Value = test.client.get("/api/public/sections").await?;

        test.assert_mocks();

        Ok(())
    }
}

mod body_tests {
    use super::*;

    #[tokio::test]
    /// Expect JSON bodies to be sent with a JSON content type
    async fn sends_json_body() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", "/api/auth/register")
                    .match_query(Matcher::Any)
                    .match_header("content-type", "application/json")
                    .match_header("accept", "application/json")
                    .match_body(Matcher::Json(json!({ "email": "a@b.c", "password": "pw" })))
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"ok":true}"#)
                    .create()
            })
            .build()
            .await?;

        let _: Value = test
            .client
            .post("/api/auth/register", &json!({ "email": "a@b.c", "password": "pw" }))
            .await?;

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect multipart bodies to carry their own boundary content type
    async fn sends_multipart_body() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", "/api/files/consent")
                    .match_query(Matcher::Any)
                    .match_header(
                        "content-type",
                        Matcher::Regex("^multipart/form-data; boundary=".to_string()),
                    )
                    .match_body(Matcher::Regex("DATA_PROCESSING".to_string()))
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"ok":true,"url":"/uploads/consent.pdf"}"#)
                    .create()
            })
            .build()
            .await?;

        let form = MultipartForm::new()
            .file("file", UploadFile::new("consent.pdf", b"%PDF-1.7".to_vec()))
            .text("type", "DATA_PROCESSING");
        let _: Value = test
            .client
            .upload(Method::POST, "/api/files/consent", form)
            .await?;

        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect bodyless requests to send no content type
    async fn sends_no_content_type_without_body() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("DELETE", "/api/participant/talks/7")
                    .match_query(Matcher::Any)
                    .match_header("content-type", Matcher::Missing)
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"ok":true}"#)
                    .create()
            })
            .build()
            .await?;

        let _: Value = test.client.delete("/api/participant/talks/7").await?;

        test.assert_mocks();

        Ok(())
    }
}

mod response_tests {
    use super::*;

    #[tokio::test]
    /// Expect the `error` field of a JSON error body to become the error message
    async fn extracts_error_message_from_body() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("POST", "/api/auth/register")
                    .match_query(Matcher::Any)
                    .with_status(409)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"error":"email already registered"}"#)
                    .create()
            })
            .build()
            .await?;

        let result = test
            .client
            .post::<Value, _>("/api/auth/register", &json!({}))
            .await;

        match result {
            Err(Error::ApiError(err)) => {
                assert_eq!(err.status, StatusCode::CONFLICT);
                assert_eq!(err.message, "email already registered");
            }
            other => panic!("expected API error, got {:?}", other),
        }

        Ok(())
    }

    #[tokio::test]
    /// Expect the status reason when the error body is not JSON
    async fn falls_back_to_status_reason() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", "/api/public/news")
                    .match_query(Matcher::Any)
                    .with_status(500)
                    .with_header("content-type", "text/plain")
                    .with_body("panic")
                    .create()
            })
            .build()
            .await?;

        let err = test
            .client
            .get::<Value>("/api/public/news")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Internal Server Error");

        Ok(())
    }

    #[tokio::test]
    /// Expect non-JSON success responses to be handed back raw
    async fn returns_raw_response_for_other_content_types() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", "/api/public/program-file")
                    .match_query(Matcher::Any)
                    .with_status(200)
                    .with_header("content-type", "text/plain")
                    .with_body("program")
                    .expect(2)
                    .create()
            })
            .build()
            .await?;

        let response = test
            .client
            .request(
                Method::GET,
                "/api/public/program-file",
                RequestBody::Empty,
                RequestOptions::default(),
            )
            .await?;
        assert!(matches!(response, ApiResponse::Raw(_)));

        let err = test
            .client
            .get::<Value>("/api/public/program-file")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedContentType(Some(ref content_type)) if content_type == "text/plain"
        ));
        test.assert_mocks();

        Ok(())
    }

    #[tokio::test]
    /// Expect raw requests to skip JSON parsing even for JSON responses
    async fn raw_option_skips_parsing() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_mock_endpoint(|server| {
                server
                    .mock("GET", "/api/me")
                    .match_query(Matcher::Any)
                    .with_status(200)
                    .with_header("content-type", "application/json")
                    .with_body(r#"{"id":"1"}"#)
                    .create()
            })
            .build()
            .await?;

        let response = test
            .client
            .request(
                Method::GET,
                "/api/me",
                RequestBody::Empty,
                RequestOptions::raw(),
            )
            .await?;

        let body = response.into_raw().unwrap().text().await.unwrap();
        assert_eq!(body, r#"{"id":"1"}"#);

        Ok(())
    }
}
