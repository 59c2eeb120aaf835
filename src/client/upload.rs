//! Pre-flight validation of files before they are uploaded.
//!
//! The limits and MIME allowlists mirror what the backend enforces for each upload endpoint,
//! so a rejected file fails locally instead of after a full upload.

use std::path::Path;

use crate::error::{upload::UploadError, Error};

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MIME_XLS: &str = "application/vnd.ms-excel";
pub const MIME_XLSX: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
pub const MIME_TEXT: &str = "text/plain";
pub const MIME_ZIP: &str = "application/zip";
pub const MIME_OLE: &str = "application/x-ole-storage";
pub const MIME_OCTET_STREAM: &str = "application/octet-stream";

const MIB: u64 = 1 << 20;
const DOCUMENTS: &[&str] = &[MIME_PDF, MIME_DOC, MIME_DOCX];
const MATERIALS: &[&str] = &[MIME_PDF, MIME_DOC, MIME_DOCX, MIME_XLS, MIME_XLSX, MIME_TEXT];

/// A file read into memory for upload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    pub async fn from_path(path: &Path) -> Result<Self, Error> {
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self { filename, bytes })
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Lower-cased extension including the dot, e.g. `.pdf`
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.filename)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_ascii_lowercase()))
    }

    /// MIME type derived from the file extension, falling back to `application/octet-stream`
    pub fn content_type(&self) -> &'static str {
        self.extension()
            .as_deref()
            .and_then(mime_by_extension)
            .unwrap_or(MIME_OCTET_STREAM)
    }
}

/// Size limit & MIME allowlist for one kind of upload
#[derive(Clone, Copy, Debug)]
pub struct FileCheck {
    pub max_bytes: u64,
    pub allowed: &'static [&'static str],
}

impl FileCheck {
    /// Signed personal data consent forms
    pub const CONSENT: Self = Self {
        max_bytes: 5 * MIB,
        allowed: DOCUMENTS,
    };

    /// Signed documents attached to a participant or talk
    pub const SIGNED_DOCUMENT: Self = Self {
        max_bytes: 5 * MIB,
        allowed: DOCUMENTS,
    };

    /// Talk manuscripts
    pub const TALK_FILE: Self = Self {
        max_bytes: 10 * MIB,
        allowed: DOCUMENTS,
    };

    /// Conference program published by the organizers
    pub const PROGRAM_FILE: Self = Self {
        max_bytes: 10 * MIB,
        allowed: DOCUMENTS,
    };

    /// Materials published by the organizers
    pub const MATERIAL: Self = Self {
        max_bytes: 25 * MIB,
        allowed: MATERIALS,
    };

    /// Validate `file`, returning the MIME type it will be stored as
    pub fn validate(&self, file: &UploadFile) -> Result<&'static str, UploadError> {
        if self.max_bytes > 0 && file.size() > self.max_bytes {
            return Err(UploadError::FileTooLarge {
                filename: file.filename.clone(),
                size: file.size(),
                max: self.max_bytes,
            });
        }

        let extension = file.extension();
        let sniffed = sniff(&file.bytes);
        let by_extension = extension.as_deref().and_then(mime_by_extension);

        if self.allows(sniffed) {
            return Ok(sniffed);
        }

        // Office documents sniff as generic OLE/zip containers, so the extension decides
        match by_extension {
            Some(mime) if self.allows(mime) => Ok(mime),
            _ => Err(UploadError::UnsupportedFileType(file.filename.clone())),
        }
    }

    fn allows(&self, mime: &str) -> bool {
        self.allowed.contains(&mime)
    }
}

fn mime_by_extension(extension: &str) -> Option<&'static str> {
    match extension {
        ".pdf" => Some(MIME_PDF),
        ".doc" => Some(MIME_DOC),
        ".docx" => Some(MIME_DOCX),
        ".xls" => Some(MIME_XLS),
        ".xlsx" => Some(MIME_XLSX),
        ".txt" => Some(MIME_TEXT),
        _ => None,
    }
}

/// Detect a MIME type from the leading bytes of a file
fn sniff(bytes: &[u8]) -> &'static str {
    let head = &bytes[..bytes.len().min(512)];
    let trimmed = trim_leading_whitespace(head);

    if trimmed.starts_with(b"%PDF-") {
        MIME_PDF
    } else if head.starts_with(&[0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1]) {
        MIME_OLE
    } else if head.starts_with(b"PK\x03\x04") {
        MIME_ZIP
    } else if !head.is_empty() && looks_like_text(head) {
        MIME_TEXT
    } else {
        MIME_OCTET_STREAM
    }
}

fn trim_leading_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());

    &bytes[start..]
}

fn looks_like_text(bytes: &[u8]) -> bool {
    let valid = match std::str::from_utf8(bytes) {
        Ok(_) => true,
        // A multi-byte character may be cut at the sniffing boundary
        Err(e) => e.error_len().is_none(),
    };

    valid
        && !bytes
            .iter()
            .any(|&b| b < 0x09 || (b > 0x0D && b < 0x20 && b != 0x1B))
}
