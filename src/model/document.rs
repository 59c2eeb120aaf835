use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A downloadable document template managed by the organizers
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTemplateDto {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(default, alias = "Description")]
    pub description: Option<String>,
    #[serde(alias = "DocumentType")]
    pub document_type: String,
    #[serde(rename = "fileURL", alias = "fileUrl", alias = "FileURL")]
    pub file_url: String,
    #[serde(default, alias = "FileSize")]
    pub file_size: Option<u64>,
    #[serde(default, alias = "MimeType")]
    pub mime_type: Option<String>,
    #[serde(default = "first_version", alias = "Version")]
    pub version: u32,
    #[serde(default = "active", alias = "IsActive")]
    pub is_active: bool,
    #[serde(alias = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(alias = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// The currently published conference program file
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgramFileDto {
    #[serde(alias = "ID")]
    pub id: String,
    #[serde(alias = "Filename")]
    pub filename: String,
    #[serde(default, alias = "file_path", alias = "FilePath")]
    pub file_path: String,
    #[serde(alias = "uploaded_at", alias = "UploadedAt")]
    pub uploaded_at: DateTime<Utc>,
}

/// Response of the file upload endpoints
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadedFileDto {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub key: Option<String>,
    pub url: String,
}

fn first_version() -> u32 {
    1
}

fn active() -> bool {
    true
}
