//! Session token storage.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::session::{SessionAccessor, SessionToken};

/// Key the token is stored under inside the session file.
pub const TOKEN_KEY: &str = "token";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("cannot access session file {path}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("session file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A fixed token, or none. Used when the token is passed on the command line
/// and in tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSession(Option<SessionToken>);

impl StaticSession {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(SessionToken::new(token)))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }
}

impl SessionAccessor for StaticSession {
    fn token(&self) -> Option<SessionToken> {
        self.0.clone()
    }
}

/// Token persisted as `{"token": "<value>"}` in a JSON file.
///
/// The file is read on every access. A missing file or a missing key is the
/// unauthenticated state, not an error.
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn store(&self, token: &str) -> Result<(), SessionError> {
        let mut entries = self.read()?;
        entries.insert(TOKEN_KEY.to_owned(), token.to_owned());
        self.write(&entries)
    }

    /// Remove the stored token. Clearing an absent token succeeds.
    pub fn clear(&self) -> Result<(), SessionError> {
        let mut entries = self.read()?;
        if entries.remove(TOKEN_KEY).is_none() {
            return Ok(());
        }
        self.write(&entries)
    }

    fn read(&self) -> Result<BTreeMap<String, String>, SessionError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(SessionError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&contents).map_err(|source| SessionError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), SessionError> {
        let io_err = |source: io::Error| SessionError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(entries).map_err(|source| SessionError::Json {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)
    }
}

impl SessionAccessor for FileSession {
    fn token(&self) -> Option<SessionToken> {
        match self.read() {
            Ok(mut entries) => entries.remove(TOKEN_KEY).map(SessionToken::new),
            Err(err) => {
                warn!(error = %err, "ignoring unreadable session file");
                None
            }
        }
    }
}
