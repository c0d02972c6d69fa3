use std::fmt;

/// Bearer credential sent as `Authorization: Token <value>`.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// Session accessor: supplies the stored token to every outbound request.
///
/// No refresh, expiry or revocation handling. `None` is a valid,
/// unauthenticated state; requests are still sent.
pub trait SessionAccessor: Send + Sync {
    fn token(&self) -> Option<SessionToken>;
}

impl<S: SessionAccessor> SessionAccessor for &S {
    fn token(&self) -> Option<SessionToken> {
        (**self).token()
    }
}
