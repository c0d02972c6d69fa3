use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use fieldops_core::config::Config;
use fieldops_core::tracing::LogFormat;

use crate::infra::form::WriteEncoding;

/// Admin client configuration loaded from `FIELDOPS_*` environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AdminConfig {
    /// Base URL of the REST API. Env var: `FIELDOPS_API_URL`.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// JSON file holding the session token. Env var: `FIELDOPS_SESSION_FILE`.
    #[serde(default = "default_session_file")]
    pub session_file: PathBuf,
    /// `multipart` or `urlencoded`. Env var: `FIELDOPS_WRITE_ENCODING`.
    #[serde(default)]
    pub write_encoding: WriteEncoding,
    /// Per-request timeout in seconds (default 30). Env var: `FIELDOPS_REQUEST_TIMEOUT_SECS`.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// `compact` or `json`. Env var: `FIELDOPS_LOG_FORMAT`.
    #[serde(default)]
    pub log_format: LogFormat,
}

impl Config for AdminConfig {
    const PREFIX: &'static str = "FIELDOPS_";
}

impl AdminConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_api_url() -> String {
    "http://127.0.0.1:8000".to_owned()
}

fn default_session_file() -> PathBuf {
    PathBuf::from(".fieldops/session.json")
}

fn default_timeout_secs() -> u64 {
    30
}
