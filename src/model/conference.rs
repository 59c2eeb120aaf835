use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::model::user::RegistrationStatus;

/// A static informational page rendered in the current language
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PublicPageDto {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicNewsItemDto {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub pinned: bool,
    pub published_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicParticipantDto {
    pub full_name: String,
    pub affiliation: String,
    pub city: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicSectionDto {
    pub id: String,
    pub title: String,
    pub title_ru: String,
    pub title_en: String,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

/// Conference material published by the organizers
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialDto {
    pub id: String,
    pub title: String,
    pub title_ru: String,
    pub title_en: String,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub description_ru: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    pub file_url: String,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub mime_type: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// Descriptive fields sent alongside an uploaded material
#[derive(Clone, Debug, Default)]
pub struct MaterialInputDto {
    pub kind: Option<String>,
    pub title_ru: String,
    pub title_en: String,
    pub description_ru: Option<String>,
    pub description_en: Option<String>,
}

/// Participant profile, also used as the registration submission body
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    #[serde(default, alias = "userID", alias = "UserID", skip_serializing)]
    pub user_id: Option<String>,
    #[serde(default, alias = "Surname")]
    pub surname: String,
    #[serde(default, alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Patronymic")]
    pub patronymic: String,
    #[serde(default, alias = "BirthDate")]
    pub birth_date: String,
    #[serde(default, alias = "City")]
    pub city: String,
    #[serde(default, alias = "AcademicDegree")]
    pub academic_degree: Option<String>,
    #[serde(default, alias = "Affiliation")]
    pub affiliation: String,
    #[serde(default, alias = "Position")]
    pub position: String,
    #[serde(default, alias = "Phone")]
    pub phone: String,
    #[serde(default, alias = "PostalAddress")]
    pub postal_address: String,
    #[serde(default, alias = "ConsentDataProcessing")]
    pub consent_data_processing: bool,
    #[serde(default, alias = "ConsentDataTransfer")]
    pub consent_data_transfer: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TalkKind {
    Plenary,
    Oral,
    Poster,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkAuthorDto {
    pub full_name: String,
    pub affiliation: String,
}

/// A talk as seen by the participant who submitted it
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkDto {
    pub id: String,
    pub title: String,
    pub affiliation: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub kind: TalkKind,
    #[serde(default = "default_talk_status", alias = "Status")]
    pub status: RegistrationStatus,
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_authors")]
    pub authors: Vec<TalkAuthorDto>,
}

/// Body for creating or updating a talk
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkInputDto {
    pub title: String,
    pub affiliation: String,
    #[serde(rename = "abstract")]
    pub summary: String,
    pub kind: TalkKind,
    pub section_id: Option<String>,
    pub authors: Vec<TalkAuthorDto>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CreatedDto {
    pub id: String,
}

fn default_talk_status() -> RegistrationStatus {
    RegistrationStatus::Waiting
}

/// Talk authors arrive either as a JSON array or as a string containing one
pub(crate) fn deserialize_authors<'de, D>(deserializer: D) -> Result<Vec<TalkAuthorDto>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Authors {
        Encoded(String),
        List(Vec<TalkAuthorDto>),
    }

    match Option::<Authors>::deserialize(deserializer)? {
        Some(Authors::List(authors)) => Ok(authors),
        Some(Authors::Encoded(raw)) if raw.trim().is_empty() => Ok(Vec::new()),
        Some(Authors::Encoded(raw)) => serde_json::from_str(&raw).map_err(serde::de::Error::custom),
        None => Ok(Vec::new()),
    }
}
