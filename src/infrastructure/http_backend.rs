//! `reqwest` implementation of the backend port.

use super::dto::{AnalyzeRequest, DomainBody, HistoryBody, StatusBody};
use crate::domain::backend::{BackendError, BackendResult, DomainBackend};
use crate::domain::entities::{DomainReport, HistoryEntry};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

/// Backend client talking JSON over HTTP.
///
/// A call succeeds only when the response status is in the 2xx range and the
/// body decodes into the expected shape.
#[derive(Debug, Clone)]
pub struct HttpDomainBackend {
    client: Client,
    base_url: Url,
}

impl HttpDomainBackend {
    /// Creates a client for the backend at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: with_trailing_slash(base_url),
        })
    }

    /// Base URL every endpoint is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> BackendResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| BackendError::Transport(format!("invalid endpoint {path}: {e}")))
    }
}

#[async_trait]
impl DomainBackend for HttpDomainBackend {
    async fn analyze_domain(&self, domain_name: &str) -> BackendResult<DomainReport> {
        let url = self.endpoint("domain")?;

        let response = self
            .client
            .post(url)
            .json(&AnalyzeRequest { domain_name })
            .send()
            .await
            .map_err(transport)?;

        let body: DomainBody = decode(response).await?;
        Ok(body.into())
    }

    async fn last_domains(&self) -> BackendResult<Vec<HistoryEntry>> {
        let url = self.endpoint("get-last-domains")?;

        let response = self.client.get(url).send().await.map_err(transport)?;

        let body: Vec<HistoryBody> = decode(response).await?;
        Ok(body.into_iter().map(HistoryEntry::from).collect())
    }

    async fn status(&self) -> BackendResult<()> {
        let url = self.endpoint("status")?;

        let response = self.client.get(url).send().await.map_err(transport)?;

        let body: StatusBody = decode(response).await?;
        if body.status == "OK" {
            Ok(())
        } else {
            Err(BackendError::Decode(format!(
                "backend reported status {:?}",
                body.status
            )))
        }
    }
}

/// Checks the status range, then decodes the JSON body.
async fn decode<T: DeserializeOwned>(response: Response) -> BackendResult<T> {
    let status = response.status();
    if !status.is_success() {
        tracing::debug!(%status, url = %response.url(), "backend returned non-success status");
        return Err(BackendError::UnexpectedStatus {
            status: status.as_u16(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| BackendError::Decode(e.to_string()))
}

fn transport(err: reqwest::Error) -> BackendError {
    BackendError::Transport(err.to_string())
}

/// `Url::join` replaces the last path segment unless the base ends with `/`.
fn with_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url
}
