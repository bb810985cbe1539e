//! Turns an account's repositories into gallery project records.
//!
//! 1. List up to `per_page` repositories (failure propagates).
//! 2. Fetch every repository's `project.json` concurrently, bounded by
//!    `max_concurrent_fetches` and a per-fetch deadline.
//! 3. Build a record for each repository whose metadata decoded.
//!
//! Anything that goes wrong for a single repository excludes that repository
//! and nothing else.

use crate::config::FolioConfig;
use crate::endpoints::Endpoints;
use crate::errors::{FolioError, Result};
use crate::fallback;
use crate::model::{ProjectRecord, RepositorySummary};
use crate::source::{HttpRepoSource, RepoSource};
use folio_async_utils::{DeadlineErr, OrCancelExt};
use futures::StreamExt;
use futures::future;
use futures::stream;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Knobs for one resolver instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    pub per_page: u32,
    pub max_concurrent_fetches: usize,
    pub fetch_timeout: Duration,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self::from_config(&FolioConfig::default())
    }
}

impl ResolverOptions {
    pub fn from_config(config: &FolioConfig) -> Self {
        Self {
            per_page: config.per_page,
            max_concurrent_fetches: config.max_concurrent_fetches.max(1),
            fetch_timeout: config.request_timeout(),
        }
    }
}

pub struct ProjectResolver<S = HttpRepoSource> {
    source: S,
    endpoints: Endpoints,
    options: ResolverOptions,
}

impl ProjectResolver<HttpRepoSource> {
    /// Resolver talking to the hosts named in `config`
    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        Ok(Self::new(
            HttpRepoSource::new(config)?,
            Endpoints::from_config(config)?,
            ResolverOptions::from_config(config),
        ))
    }
}

impl<S: RepoSource> ProjectResolver<S> {
    pub fn new(source: S, endpoints: Endpoints, options: ResolverOptions) -> Self {
        Self {
            source,
            endpoints,
            options,
        }
    }

    /// Resolve the showcased projects of `account`.
    ///
    /// An absent or blank account yields no projects and performs no network
    /// access. Result order is unspecified; see [`crate::sort_for_display`].
    pub async fn resolve_projects(&self, account: Option<&str>) -> Result<Vec<ProjectRecord>> {
        self.resolve_projects_until(account, &CancellationToken::new())
            .await
    }

    /// Like [`Self::resolve_projects`], abandoning in-flight requests and
    /// returning [`FolioError::Cancelled`] once `token` fires.
    pub async fn resolve_projects_until(
        &self,
        account: Option<&str>,
        token: &CancellationToken,
    ) -> Result<Vec<ProjectRecord>> {
        let Some(account) = account.map(str::trim).filter(|a| !a.is_empty()) else {
            tracing::debug!("no account configured; gallery disabled");
            return Ok(Vec::new());
        };

        let repos = self
            .source
            .list_repositories(account, self.options.per_page)
            .or_cancel(token)
            .await
            .map_err(|_| FolioError::Cancelled)??;

        tracing::info!(account, repositories = repos.len(), "listed repositories");

        let records: Vec<ProjectRecord> = stream::iter(&repos)
            .map(|repo| self.resolve_one(account, repo, token))
            .buffer_unordered(self.options.max_concurrent_fetches)
            .filter_map(future::ready)
            .collect::<Vec<_>>()
            .or_cancel(token)
            .await
            .map_err(|_| FolioError::Cancelled)?;

        tracing::info!(
            account,
            projects = records.len(),
            excluded = repos.len() - records.len(),
            "resolved gallery projects"
        );
        Ok(records)
    }

    async fn resolve_one(
        &self,
        account: &str,
        repo: &RepositorySummary,
        token: &CancellationToken,
    ) -> Option<ProjectRecord> {
        let fetched = self
            .source
            .fetch_metadata(account, &repo.name)
            .or_cancel_within(token, self.options.fetch_timeout)
            .await;

        match fetched {
            Ok(Ok(Some(meta))) => {
                let thumbnail = self.endpoints.thumbnail_url(account, &repo.name).into();
                tracing::debug!(repo = %repo.name, "showcased");
                Some(fallback::build_record(&meta, repo, thumbnail))
            }
            Ok(Ok(None)) => None,
            Ok(Err(err)) => {
                tracing::warn!(
                    repo = %repo.name,
                    category = err.category().as_str(),
                    error = %err,
                    "excluding repository"
                );
                None
            }
            Err(DeadlineErr::TimedOut(limit)) => {
                tracing::warn!(
                    repo = %repo.name,
                    timeout_ms = limit.as_millis() as u64,
                    "metadata fetch timed out; excluding repository"
                );
                None
            }
            Err(DeadlineErr::Cancelled) => None,
        }
    }
}
