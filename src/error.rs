use std::io;

use thiserror::Error;

pub(crate) type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed request line: {0}")]
    Malformed(#[from] Malformed),

    #[error("unsupported http version: {0}")]
    UnsupportedVersion(String),

    #[error("incomplete request: connection closed")]
    IncompleteRequest,

    #[error("request line longer than {0} bytes")]
    LineTooLong(usize),

    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("read cancelled")]
    Cancelled,

    #[error("request line already read")]
    AlreadyDone,

    #[error("request line read failed earlier")]
    Aborted,

    #[cfg(feature = "http_crate")]
    #[error("http: {0}")]
    Http(#[from] http::Error),
}

/// What is wrong with a request line that has a terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Malformed {
    #[error("expected 3 parts, got {0}")]
    FieldCount(usize),

    #[error("not utf-8")]
    NotUtf8,

    #[error("invalid method")]
    Method,

    #[error("invalid target")]
    Target,

    #[error("invalid version format")]
    VersionPrefix,
}

impl Error {
    /// Whether the peer sent something that isn't an acceptable request line.
    ///
    /// Everything else is either a transport problem or misuse of the reader.
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            Error::Malformed(_)
                | Error::UnsupportedVersion(_)
                | Error::IncompleteRequest
                | Error::LineTooLong(_)
        )
    }
}
