//! `reqwest` adapter for [`ResourcePort`].

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, Response};
use tracing::debug;
use url::Url;

use fieldops_core::error::FetchError;
use fieldops_domain::{Entity, EntityKind, RecordId};

use crate::domain::repository::ResourcePort;
use crate::domain::session::SessionAccessor;
use crate::infra::form::WriteEncoding;

/// Resource client talking to the remote REST API.
///
/// The session is supplied at construction and consulted on every request,
/// so a token stored after the client was built is picked up.
pub struct HttpApi<S> {
    client: Client,
    base: Url,
    session: S,
    encoding: WriteEncoding,
}

impl<S: SessionAccessor> HttpApi<S> {
    pub fn new(
        base_url: &str,
        session: S,
        encoding: WriteEncoding,
        timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::transport("BUILD", base_url, e))?;
        Ok(Self {
            client,
            base: parse_base(base_url)?,
            session,
            encoding,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn collection_url(&self, kind: EntityKind) -> Result<Url, FetchError> {
        self.join(kind.endpoint())
    }

    fn record_url(&self, kind: EntityKind, id: &RecordId) -> Result<Url, FetchError> {
        self.join(&format!("{}{id}/", kind.endpoint()))
    }

    fn join(&self, path: &str) -> Result<Url, FetchError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| FetchError::InvalidUrl(format!("{path}: {e}")))
    }

    fn request(&self, method: Method, url: &Url) -> RequestBuilder {
        let builder = self.client.request(method, url.clone());
        match self.session.token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Token {}", token.expose())),
            None => builder,
        }
    }

    async fn send(
        &self,
        method: Method,
        url: &Url,
        builder: RequestBuilder,
    ) -> Result<Response, FetchError> {
        debug!(%method, %url, "sending request");
        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::transport(method.as_str(), url.as_str(), e))?;
        let status = response.status();
        if !status.is_success() {
            debug!(%method, %url, status = status.as_u16(), "request failed");
            return Err(FetchError::status(
                method.as_str(),
                url.as_str(),
                status.as_u16(),
            ));
        }
        Ok(response)
    }
}

impl<S: SessionAccessor> ResourcePort for HttpApi<S> {
    async fn list<E: Entity>(&self) -> Result<Vec<E>, FetchError> {
        let url = self.collection_url(E::KIND)?;
        let builder = self
            .request(Method::GET, &url)
            .header(ACCEPT, "application/json");
        let response = self.send(Method::GET, &url, builder).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::transport("GET", url.as_str(), e))?;
        serde_json::from_slice(&body).map_err(|e| FetchError::decode(url.as_str(), e))
    }

    async fn create<E: Entity>(&self, record: &E) -> Result<(), FetchError> {
        let url = self.collection_url(E::KIND)?;
        let builder = self
            .encoding
            .apply(self.request(Method::POST, &url), &record.form_fields());
        self.send(Method::POST, &url, builder).await?;
        Ok(())
    }

    async fn update<E: Entity>(&self, id: &RecordId, record: &E) -> Result<(), FetchError> {
        let url = self.record_url(E::KIND, id)?;
        let builder = self
            .encoding
            .apply(self.request(Method::PUT, &url), &record.form_fields());
        self.send(Method::PUT, &url, builder).await?;
        Ok(())
    }

    async fn remove<E: Entity>(&self, id: &RecordId) -> Result<(), FetchError> {
        let url = self.record_url(E::KIND, id)?;
        let builder = self.request(Method::DELETE, &url);
        self.send(Method::DELETE, &url, builder).await?;
        Ok(())
    }
}

/// Parse the API base, forcing a trailing slash so endpoint paths append to
/// any path prefix instead of replacing its last segment.
fn parse_base(base_url: &str) -> Result<Url, FetchError> {
    let mut base =
        Url::parse(base_url).map_err(|e| FetchError::InvalidUrl(format!("{base_url}: {e}")))?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    Ok(base)
}
