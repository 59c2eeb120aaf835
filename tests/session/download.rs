use std::path::PathBuf;

use mockito::Matcher;

use super::*;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("agora-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[tokio::test]
/// Expect downloads to carry the body bytes & the suggested file name
async fn download_returns_bytes_and_filename() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/admin/exports/participants.csv")
                .match_query(Matcher::Any)
                .with_status(200)
                .with_header("content-type", "text/csv")
                .with_header(
                    "content-disposition",
                    r#"attachment; filename="participants.csv""#,
                )
                .with_body("name;email\n")
                .create()
        })
        .build()
        .await?;

    let download = test
        .client
        .download("/api/admin/exports/participants.csv")
        .await?;

    assert_eq!(download.filename.as_deref(), Some("participants.csv"));
    assert_eq!(download.content_type.as_deref(), Some("text/csv"));
    assert_eq!(download.bytes, b"name;email\n");
    test.assert_mocks();

    Ok(())
}

#[tokio::test]
/// Expect a download into a directory to use the fallback name when none is suggested
async fn download_to_directory_uses_fallback_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/documents/templates/consent")
                .match_query(Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/pdf")
                .with_body("%PDF-1.7")
                .create()
        })
        .build()
        .await?;
    let dir = scratch_dir("fallback");

    let target = test
        .client
        .download_to("/api/documents/templates/consent", &dir, "consent.pdf")
        .await?;

    assert_eq!(target, dir.join("consent.pdf"));
    assert_eq!(std::fs::read(&target)?, b"%PDF-1.7");
    std::fs::remove_dir_all(&dir)?;

    Ok(())
}

#[tokio::test]
/// Expect a suggested file name to be stripped of any directories
async fn download_to_directory_strips_suggested_path() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/api/admin/exports/talks_by_section.xlsx")
                .match_query(Matcher::Any)
                .with_status(200)
                .with_header("content-type", "application/octet-stream")
                .with_header(
                    "content-disposition",
                    r#"attachment; filename="../talks.xlsx""#,
                )
                .with_body("PK")
                .create()
        })
        .build()
        .await?;
    let dir = scratch_dir("strip");

    let target = test
        .client
        .download_to("/api/admin/exports/talks_by_section.xlsx", &dir, "fallback.xlsx")
        .await?;

    assert_eq!(target, dir.join("talks.xlsx"));
    std::fs::remove_dir_all(&dir)?;

    Ok(())
}
