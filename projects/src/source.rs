//! RepoSource trait and its GitHub-over-HTTP implementation
//!
//! ## Architecture
//!
//! - `RepoSource` trait defined here; the resolver only talks to this seam
//! - `HttpRepoSource` calls the listing API and the raw file host via reqwest
//! - Tests substitute in-memory sources or point `HttpRepoSource` at wiremock

use crate::config::FolioConfig;
use crate::endpoints::Endpoints;
use crate::errors::{FolioError, Result};
use crate::model::{ProjectMetadata, RepositorySummary};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderValue};

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Upstream of repository summaries and per-repository metadata
#[async_trait]
pub trait RepoSource: Send + Sync {
    /// List up to `per_page` repositories owned by `account`.
    ///
    /// Any failure here is a listing failure for the whole gallery.
    async fn list_repositories(
        &self,
        account: &str,
        per_page: u32,
    ) -> Result<Vec<RepositorySummary>>;

    /// Fetch `project.json` for one repository.
    ///
    /// `Ok(None)` means the repository does not take part in the gallery
    /// (any non-success status). `Err` covers transport and decode failures;
    /// callers treat both as a soft exclusion.
    async fn fetch_metadata(&self, account: &str, repo: &str) -> Result<Option<ProjectMetadata>>;
}

/// GitHub REST + raw.githubusercontent.com source
#[derive(Debug, Clone)]
pub struct HttpRepoSource {
    client: Client,
    endpoints: Endpoints,
}

impl HttpRepoSource {
    /// Build a source whose requests carry the configured user agent and timeout
    pub fn new(config: &FolioConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| FolioError::config_with_source("failed to build HTTP client", e))?;

        Ok(Self {
            client,
            endpoints: Endpoints::from_config(config)?,
        })
    }
}

#[async_trait]
impl RepoSource for HttpRepoSource {
    async fn list_repositories(
        &self,
        account: &str,
        per_page: u32,
    ) -> Result<Vec<RepositorySummary>> {
        let url = self.endpoints.repos_url(account, per_page);

        let response = self
            .client
            .get(url.clone())
            .header(ACCEPT, HeaderValue::from_static(GITHUB_JSON))
            .send()
            .await
            .map_err(|e| FolioError::listing_with_source(format!("GET {url}"), e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(%url, status = status.as_u16(), body = %body, "listing rejected");
            return Err(FolioError::listing(format!(
                "GET {url}: HTTP {}",
                status.as_u16()
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FolioError::listing_with_source(format!("GET {url}: body"), e))?;

        serde_json::from_slice(&bytes).map_err(|e| {
            FolioError::listing_with_source(format!("GET {url}: unexpected listing payload"), e)
        })
    }

    async fn fetch_metadata(&self, account: &str, repo: &str) -> Result<Option<ProjectMetadata>> {
        let url = self.endpoints.metadata_url(account, repo);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| FolioError::metadata_with_source(repo, format!("GET {url}"), e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(repo, status = status.as_u16(), "no project metadata");
            return Ok(None);
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FolioError::metadata_with_source(repo, "failed to read body", e))?;

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|e| FolioError::metadata_with_source(repo, "malformed project.json", e))
    }
}
