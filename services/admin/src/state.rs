use fieldops_core::error::FetchError;

use crate::config::AdminConfig;
use crate::infra::http::HttpApi;
use crate::infra::session::FileSession;

/// Process-wide state shared by every command.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: AdminConfig,
    pub session: FileSession,
}

impl AppState {
    pub fn new(config: AdminConfig) -> Self {
        let session = FileSession::new(config.session_file.clone());
        Self { config, session }
    }

    /// Resource client authenticated through the stored session.
    pub fn api(&self) -> Result<HttpApi<&FileSession>, FetchError> {
        HttpApi::new(
            &self.config.api_url,
            &self.session,
            self.config.write_encoding,
            self.config.request_timeout(),
        )
    }
}
