//! Project gallery resolution for the folio portfolio.
//!
//! Discovers an account's public repositories, keeps the ones that ship a
//! `project.json`, and normalizes them into display-ready [`ProjectRecord`]s.
//!
//! ```rust,ignore
//! let config = FolioConfig::load()?;
//! let resolver = ProjectResolver::from_config(&config)?;
//! let mut projects = resolver.resolve_projects(config.account()).await?;
//! sort_for_display(&mut projects);
//! ```

pub mod card;
pub mod config;
pub mod endpoints;
pub mod errors;
pub mod fallback;
pub mod gallery;
pub mod model;
pub mod ordering;
pub mod resolver;
pub mod source;

pub use card::{MAX_CARD_TAGS, ProjectCard};
pub use config::FolioConfig;
pub use endpoints::Endpoints;
pub use errors::{ErrorCategory, FolioError, Result};
pub use gallery::{GalleryLoader, GalleryState};
pub use model::{ProjectMetadata, ProjectRecord, RepositorySummary};
pub use ordering::{parse_date_millis, sort_for_display};
pub use resolver::{ProjectResolver, ResolverOptions};
pub use source::{HttpRepoSource, RepoSource};
