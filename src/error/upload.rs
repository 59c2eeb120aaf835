use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("File {filename:?} is too large: {size} bytes exceeds the {max} byte limit")]
    FileTooLarge {
        filename: String,
        size: u64,
        max: u64,
    },
    #[error("File {0:?} has an unsupported file type")]
    UnsupportedFileType(String),
}
