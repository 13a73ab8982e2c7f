//! HTTP client for the GitHub search API

use super::types::SearchEnvelope;
use crate::config::GithubSettings;
use crate::error::UpstreamError;
use crate::query::is_blank;
use crate::search::{RepositorySource, SearchOutcome};
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// GitHub API client with the accept, user agent and auth headers preset
#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    base_url: Url,
}

impl GithubClient {
    /// Create a new client with custom settings
    pub fn with_settings(settings: &GithubSettings) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_str(&settings.accept)?);

        if let Some(token) = settings.token.as_deref().filter(|t| !is_blank(t)) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let timeout = Duration::try_from_secs_f64(settings.request_timeout).map_err(|e| {
            anyhow::anyhow!("invalid request_timeout {}: {}", settings.request_timeout, e)
        })?;

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(settings.user_agent.clone())
            .timeout(timeout)
            .pool_max_idle_per_host(settings.pool_maxsize)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            base_url: Url::parse(&settings.base_url)?,
        })
    }

    /// Base URL every path is resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn resolve(&self, path: &str) -> Result<Url, UpstreamError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{}{}", base, path))?)
    }
}

#[async_trait]
impl RepositorySource for GithubClient {
    async fn fetch(&self, path: &str) -> Result<Option<SearchOutcome>, UpstreamError> {
        let url = self.resolve(path)?;
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Http {
                status: status.as_u16(),
                message: text,
            });
        }

        let body = text.trim();
        if body.is_empty() || body == "null" {
            return Ok(None);
        }

        let envelope: SearchEnvelope = serde_json::from_str(body)?;
        if envelope.incomplete_results {
            warn!("GitHub reported incomplete results for {}", path);
        }

        Ok(Some(envelope.into()))
    }
}
