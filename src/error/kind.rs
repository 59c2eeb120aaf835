use super::Error;

/// Category of an error as seen by the caller of the session client
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The backend still reports the caller as unauthenticated after refresh & retry; the
    /// session should be treated as absent
    TerminalAuth,
    /// Any other non-success response; shown inline, never retried automatically
    Request,
    /// The request never produced a response (connection, TLS, invalid URL)
    Transport,
    /// The failure happened locally (validation, decoding, file IO, configuration)
    Client,
}

impl Error {
    /// Determine the error category based upon application Error type
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ApiError(err) if err.is_unauthorized() => ErrorKind::TerminalAuth,
            Self::ApiError(_) => ErrorKind::Request,

            // A status-bearing reqwest error comes from `error_for_status`, which the session
            // client does not use; anything else here is a transport failure
            Self::ReqwestError(err) if err.is_decode() => ErrorKind::Client,
            Self::ReqwestError(_) => ErrorKind::Transport,

            Self::ConfigError(_) => ErrorKind::Client,
            Self::UploadError(_) => ErrorKind::Client,
            Self::UnexpectedContentType(_) => ErrorKind::Client,
            Self::JsonError(_) => ErrorKind::Client,
            Self::IoError(_) => ErrorKind::Client,
        }
    }

    /// Returns true when the error means the session is gone
    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::TerminalAuth
    }
}
