use std::fmt;
use thiserror::Error;

/// Error returned while loading credentials or signing a request.
///
/// The message is meant for humans, match on [`Error::kind`] instead.
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No provider produced an access key.
    CredentialMissing,
    /// The access key can't be used as an HMAC key, for example it is not base64.
    CredentialInvalid,
    /// The request lacks something the signature covers, or a signed header
    /// can't be represented.
    RequestInvalid,
    /// The body could not be drained under [`crate::body::BodyReadPolicy::Strict`].
    BodyUnreadable,
    /// Connection string or config values are malformed.
    ConfigInvalid,
    /// Anything else.
    Unexpected,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorKind::CredentialMissing => "credential missing",
            ErrorKind::CredentialInvalid => "credential invalid",
            ErrorKind::RequestInvalid => "request invalid",
            ErrorKind::BodyUnreadable => "body unreadable",
            ErrorKind::ConfigInvalid => "config invalid",
            ErrorKind::Unexpected => "unexpected",
        };
        f.write_str(s)
    }
}

impl Error {
    /// Create a new error of `kind`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Message without the kind prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether retrying with another access key could help.
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::CredentialMissing | ErrorKind::CredentialInvalid
        )
    }

    /// See [`ErrorKind::CredentialMissing`].
    pub fn credential_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialMissing, message)
    }

    /// See [`ErrorKind::CredentialInvalid`].
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// See [`ErrorKind::RequestInvalid`].
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// See [`ErrorKind::BodyUnreadable`].
    pub fn body_unreadable(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BodyUnreadable, message)
    }

    /// See [`ErrorKind::ConfigInvalid`].
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// See [`ErrorKind::Unexpected`].
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

/// Result with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

// Building a request or a signed header value fails the same way: the value
// can't go on the wire.
impl From<http::Error> for Error {
    fn from(err: http::Error) -> Self {
        Self::request_invalid("failed to build request").with_source(err)
    }
}

impl From<http::header::InvalidHeaderValue> for Error {
    fn from(err: http::header::InvalidHeaderValue) -> Self {
        Self::request_invalid("signed header value is not valid").with_source(err)
    }
}
