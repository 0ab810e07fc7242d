//! Transport seam for lookup endpoints
//!
//! `ReferenceDataClient` only needs "GET this path, give me JSON". The
//! production implementation is [`HttpTransport`]; tests supply their own.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

use crate::config::RefDataConfig;
use crate::error::{RefDataError, Result};
use crate::session::SessionTokenProvider;

/// Fetches a lookup endpoint and returns its JSON body
#[async_trait]
pub trait LookupTransport: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value>;
}

/// reqwest-backed transport with bearer auth from the session
pub struct HttpTransport {
    http: Client,
    base_url: Url,
    token: Arc<dyn SessionTokenProvider>,
}

impl HttpTransport {
    pub fn new(
        base_url: Url,
        timeout: std::time::Duration,
        token: Arc<dyn SessionTokenProvider>,
    ) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    pub fn from_config(
        config: &RefDataConfig,
        token: Arc<dyn SessionTokenProvider>,
    ) -> Result<Self> {
        Self::new(config.base_url()?, config.request_timeout(), token)
    }

    /// Full URL for an endpoint path
    ///
    /// Paths are appended to the base URL verbatim, so a base of
    /// `https://host/api` and path `/assets/generated-codes` gives
    /// `https://host/api/assets/generated-codes`.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl LookupTransport for HttpTransport {
    async fn get_json(&self, path: &str) -> Result<Value> {
        let url = self.url_for(path);

        let mut request = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = self.token.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RefDataError::Status {
                status: status.as_u16(),
                path: path.to_string(),
                body: body.chars().take(200).collect(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| RefDataError::Decode {
            path: path.to_string(),
            source,
        })
    }
}
