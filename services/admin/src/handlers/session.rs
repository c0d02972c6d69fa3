//! `login`, `logout` and `whoami` commands.
//!
//! No authentication endpoint is called: the operator supplies a token issued
//! by the server and it is stored for later requests.

use tracing::info;

use crate::domain::session::SessionAccessor;
use crate::infra::session::{FileSession, SessionError};

pub fn login(session: &FileSession, token: &str) -> Result<String, SessionError> {
    let token = token.trim();
    session.store(token)?;
    info!(path = %session.path().display(), "session token stored");
    Ok(format!("Token stored in {}", session.path().display()))
}

pub fn logout(session: &FileSession) -> Result<String, SessionError> {
    session.clear()?;
    info!(path = %session.path().display(), "session token cleared");
    Ok("Logged out".to_owned())
}

pub fn whoami(session: &impl SessionAccessor, api_url: &str) -> String {
    match session.token() {
        Some(_) => format!("Authenticated against {api_url}"),
        None => format!("No token stored; requests to {api_url} are sent unauthenticated"),
    }
}
