use serde::Serialize;

use crate::{
    client::{api::segment, session::SessionClient},
    error::Error,
    model::{
        admin::{
            AdminTalkDto, AdminUserDto, AuditLogDto, ConsentFileDto, NewsDto, NewsInputDto,
            PageDto, PageInputDto, SectionDto, SectionInputDto, SectionResponsiblesDto,
            StatusDto, TalkPlacementDto,
        },
        api::OkDto,
        user::RegistrationStatus,
    },
};

pub async fn fetch_users(client: &SessionClient) -> Result<Vec<AdminUserDto>, Error> {
    client.get("/api/admin/users").await
}

/// Approve or reject a participant's registration
pub async fn set_user_status(
    client: &SessionClient,
    user_id: &str,
    status: RegistrationStatus,
) -> Result<StatusDto, Error> {
    client
        .patch(
            &format!("/api/admin/users/{}/status", segment(user_id)),
            &StatusDto { status },
        )
        .await
}

#[derive(Serialize)]
struct ResetPasswordDto<'a> {
    email: &'a str,
}

pub async fn reset_user_password(client: &SessionClient, email: &str) -> Result<OkDto, Error> {
    client
        .post("/api/admin/users/reset-password", &ResetPasswordDto { email })
        .await
}

pub async fn fetch_user_consents(
    client: &SessionClient,
    user_id: &str,
) -> Result<Vec<ConsentFileDto>, Error> {
    let consents: Vec<ConsentFileDto> = client
        .get(&format!("/api/admin/users/{}/consents", segment(user_id)))
        .await?;

    Ok(consents
        .into_iter()
        .map(|mut consent| {
            consent.file_url = client.file_url(&consent.file_url);
            consent
        })
        .collect())
}

pub async fn fetch_sections(client: &SessionClient) -> Result<Vec<SectionDto>, Error> {
    client.get("/api/admin/sections").await
}

pub async fn create_section(
    client: &SessionClient,
    section: &SectionInputDto,
) -> Result<OkDto, Error> {
    client.post("/api/admin/sections", section).await
}

pub async fn fetch_section_responsibles(
    client: &SessionClient,
) -> Result<Vec<SectionResponsiblesDto>, Error> {
    client.get("/api/admin/section-responsibles").await
}

#[derive(Serialize)]
struct ResponsiblesDto<'a> {
    emails: &'a [String],
}

/// Replace the reviewers responsible for a section
pub async fn set_section_responsibles(
    client: &SessionClient,
    section_id: &str,
    emails: &[String],
) -> Result<OkDto, Error> {
    client
        .put(
            &format!("/api/admin/sections/{}/responsibles", segment(section_id)),
            &ResponsiblesDto { emails },
        )
        .await
}

pub async fn fetch_news(client: &SessionClient) -> Result<Vec<NewsDto>, Error> {
    client.get("/api/admin/news").await
}

pub async fn create_news(client: &SessionClient, news: &NewsInputDto) -> Result<OkDto, Error> {
    client.post("/api/admin/news", news).await
}

pub async fn update_news(
    client: &SessionClient,
    id: &str,
    news: &NewsInputDto,
) -> Result<OkDto, Error> {
    client
        .put(&format!("/api/admin/news/{}", segment(id)), news)
        .await
}

pub async fn delete_news(client: &SessionClient, id: &str) -> Result<OkDto, Error> {
    client
        .delete(&format!("/api/admin/news/{}", segment(id)))
        .await
}

pub async fn fetch_pages(client: &SessionClient) -> Result<Vec<PageDto>, Error> {
    client.get("/api/admin/pages").await
}

/// Create or replace the page stored under `slug`
pub async fn upsert_page(
    client: &SessionClient,
    slug: &str,
    page: &PageInputDto,
) -> Result<OkDto, Error> {
    client
        .put(&format!("/api/admin/pages/{}", segment(slug)), page)
        .await
}

pub async fn fetch_talks(client: &SessionClient) -> Result<Vec<AdminTalkDto>, Error> {
    let talks: Vec<AdminTalkDto> = client.get("/api/admin/talks").await?;

    Ok(talks
        .into_iter()
        .map(|mut talk| {
            talk.file_url = talk.file_url.as_deref().map(|url| client.file_url(url));
            talk
        })
        .collect())
}

pub async fn set_talk_status(
    client: &SessionClient,
    talk_id: &str,
    status: RegistrationStatus,
) -> Result<StatusDto, Error> {
    client
        .patch(
            &format!("/api/admin/talks/{}/status", segment(talk_id)),
            &StatusDto { status },
        )
        .await
}

/// Assign a talk to a section & schedule slot
pub async fn update_talk(
    client: &SessionClient,
    talk_id: &str,
    placement: &TalkPlacementDto,
) -> Result<OkDto, Error> {
    client
        .put(&format!("/api/admin/talks/{}", segment(talk_id)), placement)
        .await
}

pub async fn fetch_audit_log(client: &SessionClient) -> Result<Vec<AuditLogDto>, Error> {
    client.get("/api/admin/audit").await
}
