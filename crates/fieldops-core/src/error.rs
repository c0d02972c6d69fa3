//! Failure taxonomy for calls against the remote REST API.

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The one recognized failure kind for remote calls.
///
/// Every non-success status collapses into [`FetchError::Status`]; callers
/// only distinguish transient from terminal failures via
/// [`FetchError::is_transient`].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{method} {url} could not be sent: {source}")]
    Transport {
        method: String,
        url: String,
        source: BoxError,
    },
    #[error("{method} {url} returned status {status}")]
    Status {
        method: String,
        url: String,
        status: u16,
    },
    #[error("response from {url} could not be decoded: {source}")]
    Decode { url: String, source: BoxError },
    #[error("invalid url: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    pub fn transport(method: &str, url: &str, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            method: method.to_owned(),
            url: url.to_owned(),
            source: source.into(),
        }
    }

    pub fn status(method: &str, url: &str, status: u16) -> Self {
        Self::Status {
            method: method.to_owned(),
            url: url.to_owned(),
            status,
        }
    }

    pub fn decode(url: &str, source: impl Into<BoxError>) -> Self {
        Self::Decode {
            url: url.to_owned(),
            source: source.into(),
        }
    }

    /// Whether repeating the same call may succeed without operator action.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Status { status, .. } => matches!(status, 408 | 429 | 500..=599),
            Self::Decode { .. } | Self::InvalidUrl(_) => false,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "TRANSPORT",
            Self::Status { .. } => "STATUS",
            Self::Decode { .. } => "DECODE",
            Self::InvalidUrl(_) => "INVALID_URL",
        }
    }
}
