use std::path::{Path, PathBuf};

use crate::{client::session::SessionClient, error::Error};

/// Spreadsheet exports available to administrators
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Export {
    ParticipantsCsv,
    ParticipantsXlsx,
    TalksBySectionXlsx,
}

impl Export {
    pub const ALL: [Export; 3] = [
        Export::ParticipantsCsv,
        Export::ParticipantsXlsx,
        Export::TalksBySectionXlsx,
    ];

    pub fn filename(&self) -> &'static str {
        match self {
            Self::ParticipantsCsv => "participants.csv",
            Self::ParticipantsXlsx => "participants.xlsx",
            Self::TalksBySectionXlsx => "talks_by_section.xlsx",
        }
    }

    pub fn path(&self) -> String {
        format!("/api/admin/exports/{}", self.filename())
    }
}

/// Download an export to `dest`; a directory destination receives the export's file name
pub async fn download_export(
    client: &SessionClient,
    export: Export,
    dest: &Path,
) -> Result<PathBuf, Error> {
    client
        .download_to(&export.path(), dest, export.filename())
        .await
}
