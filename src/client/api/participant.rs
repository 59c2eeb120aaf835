use reqwest::Method;

use crate::{
    client::{
        api::segment,
        session::{MultipartForm, SessionClient},
        upload::{FileCheck, UploadFile},
    },
    error::Error,
    model::{
        admin::ConsentType,
        api::OkDto,
        conference::{CreatedDto, ProfileDto, TalkDto, TalkInputDto},
        document::UploadedFileDto,
    },
};

pub async fn fetch_profile(client: &SessionClient) -> Result<ProfileDto, Error> {
    client.get("/api/participant/profile").await
}

pub async fn update_profile(client: &SessionClient, profile: &ProfileDto) -> Result<OkDto, Error> {
    client.put("/api/participant/profile", profile).await
}

/// Submit the registration form; the session's status changes once the backend accepts it
pub async fn submit_registration(
    client: &SessionClient,
    profile: &ProfileDto,
) -> Result<OkDto, Error> {
    client.post("/api/registration/submit", profile).await
}

pub async fn fetch_talks(client: &SessionClient) -> Result<Vec<TalkDto>, Error> {
    let talks: Vec<TalkDto> = client.get("/api/participant/talks").await?;

    Ok(talks
        .into_iter()
        .map(|talk| with_file_url(client, talk))
        .collect())
}

pub async fn fetch_talk(client: &SessionClient, id: &str) -> Result<TalkDto, Error> {
    let talk = client
        .get(&format!("/api/participant/talks/{}", segment(id)))
        .await?;

    Ok(with_file_url(client, talk))
}

pub async fn create_talk(client: &SessionClient, talk: &TalkInputDto) -> Result<CreatedDto, Error> {
    client.post("/api/participant/talks", talk).await
}

pub async fn update_talk(
    client: &SessionClient,
    id: &str,
    talk: &TalkInputDto,
) -> Result<OkDto, Error> {
    client
        .put(&format!("/api/participant/talks/{}", segment(id)), talk)
        .await
}

pub async fn delete_talk(client: &SessionClient, id: &str) -> Result<OkDto, Error> {
    client
        .delete(&format!("/api/participant/talks/{}", segment(id)))
        .await
}

/// Attach the manuscript of a talk
pub async fn upload_talk_file(
    client: &SessionClient,
    id: &str,
    file: UploadFile,
) -> Result<UploadedFileDto, Error> {
    FileCheck::TALK_FILE.validate(&file)?;

    let form = MultipartForm::new().file("file", file);
    let uploaded = client
        .upload(
            Method::POST,
            &format!("/api/participant/talks/{}/file", segment(id)),
            form,
        )
        .await?;

    Ok(resolve_uploaded(client, uploaded))
}

/// Upload a signed personal data consent form
pub async fn upload_consent(
    client: &SessionClient,
    consent_type: ConsentType,
    file: UploadFile,
) -> Result<UploadedFileDto, Error> {
    FileCheck::CONSENT.validate(&file)?;

    let consent_type = match consent_type {
        ConsentType::DataProcessing => "DATA_PROCESSING",
        ConsentType::DataTransfer => "DATA_TRANSFER",
    };
    let form = MultipartForm::new()
        .file("file", file)
        .text("type", consent_type);
    let uploaded = client
        .upload(Method::POST, "/api/files/consent", form)
        .await?;

    Ok(resolve_uploaded(client, uploaded))
}

/// Upload a signed copy of a document template, optionally tied to one of the user's talks
pub async fn upload_signed_document(
    client: &SessionClient,
    document_type: &str,
    talk_id: Option<&str>,
    file: UploadFile,
) -> Result<UploadedFileDto, Error> {
    FileCheck::SIGNED_DOCUMENT.validate(&file)?;

    let mut form = MultipartForm::new()
        .file("file", file)
        .text("type", document_type);
    if let Some(talk_id) = talk_id {
        form = form.text("talk_id", talk_id);
    }

    let uploaded = client
        .upload(Method::POST, "/api/participant/documents/signed", form)
        .await?;

    Ok(resolve_uploaded(client, uploaded))
}

fn with_file_url(client: &SessionClient, mut talk: TalkDto) -> TalkDto {
    talk.file_url = talk.file_url.as_deref().map(|url| client.file_url(url));
    talk
}

pub(crate) fn resolve_uploaded(client: &SessionClient, mut uploaded: UploadedFileDto) -> UploadedFileDto {
    uploaded.url = client.file_url(&uploaded.url);
    uploaded
}
