//! Addresses of the listing call and the per-repository raw files.
//!
//! Account and repository names are appended as percent-encoded path
//! segments, so a hostile repository name cannot escape its directory.

use crate::config::FolioConfig;
use crate::errors::{FolioError, Result};
use url::Url;

/// Branch the metadata and thumbnail are read from.
pub const DEFAULT_BRANCH: &str = "main";
pub const METADATA_FILENAME: &str = "project.json";
pub const THUMBNAIL_FILENAME: &str = "thumbnail.png";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    api_base: Url,
    raw_base: Url,
}

impl Endpoints {
    pub fn new(api_base: &str, raw_base: &str) -> Result<Self> {
        Ok(Self {
            api_base: parse_base("api_base_url", api_base)?,
            raw_base: parse_base("raw_base_url", raw_base)?,
        })
    }

    pub fn from_config(config: &FolioConfig) -> Result<Self> {
        Self::new(&config.api_base_url, &config.raw_base_url)
    }

    /// `{api}/users/{account}/repos?per_page={per_page}`
    pub fn repos_url(&self, account: &str, per_page: u32) -> Url {
        let mut url = join_segments(&self.api_base, &["users", account, "repos"]);
        url.query_pairs_mut()
            .append_pair("per_page", &per_page.to_string());
        url
    }

    /// `{raw}/{account}/{repo}/main/project.json`
    pub fn metadata_url(&self, account: &str, repo: &str) -> Url {
        join_segments(
            &self.raw_base,
            &[account, repo, DEFAULT_BRANCH, METADATA_FILENAME],
        )
    }

    /// `{raw}/{account}/{repo}/main/thumbnail.png`, whether or not the image exists.
    pub fn thumbnail_url(&self, account: &str, repo: &str) -> Url {
        join_segments(
            &self.raw_base,
            &[account, repo, DEFAULT_BRANCH, THUMBNAIL_FILENAME],
        )
    }
}

fn parse_base(name: &str, value: &str) -> Result<Url> {
    let url = Url::parse(value)
        .map_err(|e| FolioError::config_with_source(format!("invalid {name}"), e))?;
    if url.cannot_be_a_base() {
        return Err(FolioError::config(format!(
            "{name} cannot carry path segments: {value}"
        )));
    }
    Ok(url)
}

fn join_segments(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    // Bases are checked in `parse_base`, so this only skips when the invariant
    // was broken by a caller constructing `Endpoints` some other way.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}
