//! Gallery configuration loading
//!
//! Loads configuration from `~/.config/folio/folio.toml` (or `FOLIO_CONFIG` env),
//! then lets `FOLIO_GITHUB_USERNAME` override the account. A missing account
//! disables the gallery; it is not an error.

use crate::errors::{FolioError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// Upper bound imposed by the listing endpoint's page size.
pub const MAX_PER_PAGE: u32 = 100;

/// Root configuration for the project gallery
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FolioConfig {
    /// Code-hosting account whose repositories are scanned
    #[serde(default)]
    pub account: Option<String>,

    /// Base URL of the repository listing API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Base URL serving raw repository files (metadata and thumbnails)
    #[serde(default = "default_raw_base_url")]
    pub raw_base_url: String,

    /// Repositories requested from the listing call
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Metadata fetches allowed in flight at once
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,

    /// Per-request timeout in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Image shown when a project's thumbnail fails to load
    #[serde(default = "default_placeholder_thumbnail")]
    pub placeholder_thumbnail: String,
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_raw_base_url() -> String {
    "https://raw.githubusercontent.com".to_string()
}

fn default_per_page() -> u32 {
    MAX_PER_PAGE
}

fn default_max_concurrent_fetches() -> usize {
    10
}

fn default_request_timeout_ms() -> u64 {
    5_000
}

fn default_user_agent() -> String {
    format!("folio/{}", env!("CARGO_PKG_VERSION"))
}

fn default_placeholder_thumbnail() -> String {
    "/placeholder.svg".to_string()
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            account: None,
            api_base_url: default_api_base_url(),
            raw_base_url: default_raw_base_url(),
            per_page: default_per_page(),
            max_concurrent_fetches: default_max_concurrent_fetches(),
            request_timeout_ms: default_request_timeout_ms(),
            user_agent: default_user_agent(),
            placeholder_thumbnail: default_placeholder_thumbnail(),
        }
    }
}

impl FolioConfig {
    /// Environment variable overriding the config file path
    pub const ENV_CONFIG_PATH: &'static str = "FOLIO_CONFIG";

    /// Environment variable carrying the account identifier
    pub const ENV_ACCOUNT: &'static str = "FOLIO_GITHUB_USERNAME";

    pub const DEFAULT_CONFIG_FILENAME: &'static str = "folio.toml";

    /// Load configuration from the default location
    ///
    /// Priority:
    /// 1. `FOLIO_CONFIG` environment variable
    /// 2. `~/.config/folio/folio.toml`
    ///
    /// If the config file doesn't exist, returns default configuration.
    /// `FOLIO_GITHUB_USERNAME` is applied on top in both cases.
    pub fn load() -> Result<Self> {
        let path = Self::resolve_config_path();

        let mut cfg = if path.exists() {
            Self::load_from_path(&path)?
        } else {
            tracing::info!(
                path = %path.display(),
                "folio config not found, using defaults"
            );
            Self::default()
        };

        cfg.apply_account_override(std::env::var(Self::ENV_ACCOUNT).ok());
        Ok(cfg)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            FolioError::config_with_source(
                format!("failed to read config at {}", path.display()),
                e,
            )
        })?;

        Self::parse(&contents)
    }

    /// Parse configuration from TOML string
    pub fn parse(contents: &str) -> Result<Self> {
        let mut cfg: FolioConfig = toml::from_str(contents)
            .map_err(|e| FolioError::config_with_source("failed to parse config", e))?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Replace the account when the override is non-blank
    pub fn apply_account_override(&mut self, account: Option<String>) {
        if let Some(account) = account
            && !account.trim().is_empty()
        {
            self.account = Some(account.trim().to_string());
        }
    }

    /// The configured account, if it names anyone
    pub fn account(&self) -> Option<&str> {
        self.account
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    fn resolve_config_path() -> PathBuf {
        if let Ok(path) = std::env::var(Self::ENV_CONFIG_PATH) {
            return PathBuf::from(path);
        }

        dirs::home_dir()
            .map(|h| {
                h.join(".config")
                    .join("folio")
                    .join(Self::DEFAULT_CONFIG_FILENAME)
            })
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_CONFIG_FILENAME))
    }

    /// Validate configuration, clamping values the endpoints cannot honor
    pub fn validate(&mut self) -> Result<()> {
        for (name, value) in [
            ("api_base_url", &self.api_base_url),
            ("raw_base_url", &self.raw_base_url),
        ] {
            Url::parse(value)
                .map_err(|e| FolioError::config_with_source(format!("invalid {name}"), e))?;
        }

        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            tracing::warn!(
                per_page = self.per_page,
                "per_page out of range, clamping to 1..={MAX_PER_PAGE}"
            );
            self.per_page = self.per_page.clamp(1, MAX_PER_PAGE);
        }

        if self.max_concurrent_fetches == 0 {
            tracing::warn!("max_concurrent_fetches is 0; using 1");
            self.max_concurrent_fetches = 1;
        }

        if self.request_timeout_ms == 0 {
            return Err(FolioError::config("request_timeout_ms must be positive"));
        }

        Ok(())
    }
}
