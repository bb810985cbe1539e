//! Project resolution error types
//!
//! Default policy: failures inside a single repository are soft (log + exclude
//! that repository). Only a failed listing call escapes the resolver, and the
//! gallery still degrades it to the empty state.

use thiserror::Error;

/// Error category for structured logging and behavior mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// `folio.toml` or env misconfigured
    ConfigError,
    /// The repository listing call failed
    UpstreamListing,
    /// A single repository's metadata could not be fetched or decoded
    SoftExclusion,
    /// Resolution abandoned because its owner was torn down
    Cancelled,
}

impl ErrorCategory {
    /// Machine-readable code for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigError => "CONFIG_ERROR",
            Self::UpstreamListing => "UPSTREAM_LISTING",
            Self::SoftExclusion => "SOFT_EXCLUSION",
            Self::Cancelled => "CANCELLED",
        }
    }
}

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum FolioError {
    #[error("config error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("repository listing failed: {message}")]
    Listing {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("metadata fetch failed for {repo}: {message}")]
    Metadata {
        repo: String,
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    #[error("project resolution cancelled")]
    Cancelled,
}

impl FolioError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Config { .. } => ErrorCategory::ConfigError,
            Self::Listing { .. } => ErrorCategory::UpstreamListing,
            Self::Metadata { .. } => ErrorCategory::SoftExclusion,
            Self::Cancelled => ErrorCategory::Cancelled,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn listing(message: impl Into<String>) -> Self {
        Self::Listing {
            message: message.into(),
            source: None,
        }
    }

    pub fn listing_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Listing {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn metadata(repo: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Metadata {
            repo: repo.into(),
            message: message.into(),
            source: None,
        }
    }

    pub fn metadata_with_source(
        repo: impl Into<String>,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Metadata {
            repo: repo.into(),
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Result type for project resolution
pub type Result<T> = std::result::Result<T, FolioError>;
