use agora::{
    client::{api::participant, upload::UploadFile},
    error::{upload::UploadError, Error},
    model::admin::ConsentType,
};

use super::*;

#[tokio::test]
/// Expect an oversized consent form to be rejected without contacting the backend
async fn oversized_consent_is_rejected_locally() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/files/consent")
                .match_query(Matcher::Any)
                .with_status(200)
                .expect(0)
                .create()
        })
        .build()
        .await?;

    let mut bytes = b"%PDF-1.7\n".to_vec();
    bytes.resize(5 * 1024 * 1024 + 1, b' ');
    let file = UploadFile::new("consent.pdf", bytes);

    let result = participant::upload_consent(&test.client, ConsentType::DataProcessing, file).await;

    assert!(matches!(
        result,
        Err(Error::UploadError(UploadError::FileTooLarge { .. }))
    ));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect an unsupported talk file type to be rejected without contacting the backend
async fn unsupported_talk_file_is_rejected_locally() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let file = UploadFile::new("slides.png", vec![0x89, b'P', b'N', b'G']);
    let result = participant::upload_talk_file(&test.client, "7", file).await;

    assert!(matches!(
        result,
        Err(Error::UploadError(UploadError::UnsupportedFileType(_)))
    ));

    Ok(())
}

#[tokio::test]
/// Expect an accepted consent upload to return an absolute file URL
async fn consent_upload_resolves_file_url() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/api/files/consent")
                .match_query(Matcher::Any)
                .match_body(Matcher::AllOf(vec![
                    Matcher::Regex(r#"name="type""#.to_string()),
                    Matcher::Regex("DATA_TRANSFER".to_string()),
                    Matcher::Regex(r#"filename="consent.pdf""#.to_string()),
                ]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(r#"{"ok":true,"key":"consents/1.pdf","url":"/uploads/consents/1.pdf"}"#)
                .create()
        })
        .build()
        .await?;

    let file = UploadFile::new("consent.pdf", b"%PDF-1.7\n".to_vec());
    let uploaded =
        participant::upload_consent(&test.client, ConsentType::DataTransfer, file).await?;

    assert_eq!(
        uploaded.url,
        format!("{}/uploads/consents/1.pdf", test.server.url())
    );
    assert_eq!(uploaded.key.as_deref(), Some("consents/1.pdf"));
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect talks to decode authors stored as a JSON string
async fn talks_decode_stringified_authors() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/participant/talks")
                .match_query(Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(
                    serde_json::json!([{
                        "id": "7",
                        "title": "Opening",
                        "affiliation": "ITMO",
                        "abstract": "...",
                        "kind": "ORAL",
                        "fileUrl": "uploads/talks/7.pdf",
                        "authors": "[{\"fullName\":\"Anna Ivanova\",\"affiliation\":\"ITMO\"}]"
                    }])
                    .to_string(),
                )
                .create()
        })
        .build()
        .await?;

    let talks = participant::fetch_talks(&test.client).await?;

    assert_eq!(talks[0].authors.len(), 1);
    assert_eq!(talks[0].authors[0].full_name, "Anna Ivanova");
    assert_eq!(
        talks[0].file_url.as_deref(),
        Some(format!("{}/uploads/talks/7.pdf", test.server.url()).as_str())
    );

    Ok(())
}
