use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::user::{RegistrationStatus, Role};

/// A user row in the administrative user table
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserDto {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(alias = "Status")]
    pub status: RegistrationStatus,
    #[serde(default, alias = "Roles")]
    pub roles: HashSet<Role>,
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
    #[serde(default, alias = "ConsentAccepted")]
    pub consent_accepted: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsentType {
    DataProcessing,
    DataTransfer,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsentFileDto {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "UserID")]
    pub user_id: String,
    #[serde(alias = "ConsentType")]
    pub consent_type: ConsentType,
    #[serde(alias = "FileURL")]
    pub file_url: String,
    #[serde(default, alias = "FileSize")]
    pub file_size: Option<u64>,
    #[serde(default, alias = "MimeType")]
    pub mime_type: Option<String>,
    #[serde(alias = "UploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

/// Body for `PATCH /api/admin/{users,talks}/{id}/status`
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StatusDto {
    pub status: RegistrationStatus,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDto {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "TitleRu")]
    pub title_ru: String,
    #[serde(alias = "TitleEn")]
    pub title_en: String,
    #[serde(default, alias = "SortOrder")]
    pub sort_order: i32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionInputDto {
    pub title_ru: String,
    pub title_en: String,
    pub sort_order: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionResponsiblesDto {
    #[serde(alias = "sectionID", alias = "SectionID")]
    pub section_id: String,
    #[serde(default, alias = "sectionTitleRU", alias = "SectionTitleRu")]
    pub section_title_ru: String,
    #[serde(default, alias = "sectionTitleEN", alias = "SectionTitleEn")]
    pub section_title_en: String,
    #[serde(default)]
    pub emails: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDto {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "TitleRu")]
    pub title_ru: String,
    #[serde(alias = "TitleEn")]
    pub title_en: String,
    #[serde(alias = "BodyRu")]
    pub body_ru: String,
    #[serde(alias = "BodyEn")]
    pub body_en: String,
    #[serde(default, alias = "Pinned")]
    pub pinned: bool,
    #[serde(alias = "PublishedAt")]
    pub published_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsInputDto {
    pub title_ru: String,
    pub title_en: String,
    pub body_ru: String,
    pub body_en: String,
    pub pinned: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    #[serde(alias = "Slug")]
    pub slug: String,
    #[serde(alias = "TitleRu")]
    pub title_ru: String,
    #[serde(alias = "BodyRu")]
    pub body_ru: String,
    #[serde(alias = "TitleEn")]
    pub title_en: String,
    #[serde(alias = "BodyEn")]
    pub body_en: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInputDto {
    pub title_ru: String,
    pub body_ru: String,
    pub title_en: String,
    pub body_en: String,
}

/// A talk row in the administrative program table, also used for the public program
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTalkDto {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "Title")]
    pub title: String,
    #[serde(alias = "Kind")]
    pub kind: String,
    #[serde(default = "default_admin_talk_status", alias = "Status")]
    pub status: RegistrationStatus,
    #[serde(default, alias = "SectionID")]
    pub section_id: Option<String>,
    #[serde(default, alias = "SectionTitleRu")]
    pub section_title_ru: Option<String>,
    #[serde(default, alias = "SectionTitleEn")]
    pub section_title_en: Option<String>,
    #[serde(default, alias = "FileURL")]
    pub file_url: Option<String>,
    #[serde(default, alias = "SpeakerFullName")]
    pub speaker_full_name: String,
    #[serde(default, alias = "SpeakerCity")]
    pub speaker_city: String,
    #[serde(default, alias = "SpeakerAffiliation")]
    pub speaker_affiliation: String,
    #[serde(default = "empty_json_list", rename = "authorsJSON", alias = "AuthorsJSON")]
    pub authors_json: String,
    #[serde(default, rename = "abstract", alias = "Abstract")]
    pub summary: String,
    #[serde(default, alias = "ScheduleTime")]
    pub schedule_time: Option<DateTime<Utc>>,
}

/// Body for `PUT /api/admin/talks/{id}`
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TalkPlacementDto {
    pub section_id: Option<String>,
    pub schedule_time: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogDto {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(default, rename = "actorUserID", alias = "ActorUserID")]
    pub actor_user_id: Option<String>,
    #[serde(alias = "Action")]
    pub action: String,
    #[serde(alias = "Entity")]
    pub entity: String,
    #[serde(default, rename = "entityID", alias = "EntityID")]
    pub entity_id: Option<String>,
    #[serde(alias = "CreatedAt")]
    pub created_at: DateTime<Utc>,
}

fn default_admin_talk_status() -> RegistrationStatus {
    RegistrationStatus::Waiting
}

fn empty_json_list() -> String {
    "[]".to_string()
}
