use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Role tags assigned by the backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Participant,
    Admin,
    SectionAdmin,
}

/// Review status of a participant's registration
///
/// The same tag set is reused by the backend for talk review status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    Waiting,
    Approved,
    Rejected,
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Waiting => "WAITING",
            Self::Approved => "APPROVED",
            Self::Rejected => "REJECTED",
        };

        f.write_str(tag)
    }
}

/// Response of `GET /api/me`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeDto {
    #[serde(alias = "ID", alias = "userId")]
    pub id: String,
    #[serde(alias = "Email")]
    pub email: String,
    #[serde(alias = "Status")]
    pub status: RegistrationStatus,
    #[serde(default, alias = "Roles")]
    pub roles: HashSet<Role>,
}

/// Credentials body for login & account registration
#[derive(Clone, Serialize)]
pub struct CredentialsDto<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response of `POST /api/auth/login`
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDto {
    #[serde(default)]
    pub ok: bool,
    pub user_id: String,
    #[serde(default)]
    pub roles: HashSet<Role>,
    pub status: RegistrationStatus,
    pub email: String,
}
