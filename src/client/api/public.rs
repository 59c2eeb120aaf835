use crate::{
    client::{api::segment, session::SessionClient},
    error::Error,
    model::{
        admin::AdminTalkDto,
        conference::{
            MaterialDto, PublicNewsItemDto, PublicPageDto, PublicParticipantDto, PublicSectionDto,
        },
        document::ProgramFileDto,
    },
};

pub async fn fetch_page(client: &SessionClient, slug: &str) -> Result<PublicPageDto, Error> {
    client
        .get(&format!("/api/public/pages/{}", segment(slug)))
        .await
}

pub async fn fetch_news_list(client: &SessionClient) -> Result<Vec<PublicNewsItemDto>, Error> {
    client.get("/api/public/news").await
}

pub async fn fetch_news_item(client: &SessionClient, id: &str) -> Result<PublicNewsItemDto, Error> {
    client.get(&format!("/api/public/news/{}", segment(id))).await
}

pub async fn fetch_participants(
    client: &SessionClient,
) -> Result<Vec<PublicParticipantDto>, Error> {
    client.get("/api/public/participants").await
}

pub async fn fetch_materials(client: &SessionClient) -> Result<Vec<MaterialDto>, Error> {
    let mut materials: Vec<MaterialDto> = client.get("/api/public/materials").await?;

    for material in &mut materials {
        material.file_url = client.file_url(&material.file_url);
    }

    Ok(materials)
}

pub async fn fetch_sections(client: &SessionClient) -> Result<Vec<PublicSectionDto>, Error> {
    client.get("/api/public/sections").await
}

/// Approved talks with their schedule
pub async fn fetch_program(client: &SessionClient) -> Result<Vec<AdminTalkDto>, Error> {
    let mut talks: Vec<AdminTalkDto> = client.get("/api/public/program").await?;

    for talk in &mut talks {
        talk.file_url = talk.file_url.as_deref().map(|url| client.file_url(url));
    }

    Ok(talks)
}

/// The published program file, or `None` when there is none or it cannot be fetched
pub async fn fetch_program_file(client: &SessionClient) -> Option<ProgramFileDto> {
    match client.get::<ProgramFileDto>("/api/public/program-file").await {
        Ok(file) => Some(file),
        Err(err) => {
            dioxus_logger::tracing::debug!(error = %err, "No program file available");

            None
        }
    }
}
