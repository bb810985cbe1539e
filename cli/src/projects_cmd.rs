use anyhow::Context;
use clap::Args;
use folio_projects::{FolioConfig, GalleryLoader, GalleryState, ProjectCard, ProjectResolver};
use std::path::PathBuf;
use std::sync::Arc;

/// Shown when the gallery has nothing to display.
pub const EMPTY_GALLERY_MESSAGE: &str = "No works to show yet.";

#[derive(Debug, Args)]
pub struct ProjectsArgs {
    /// Account to scan (overrides config and FOLIO_GITHUB_USERNAME)
    #[arg(long)]
    pub account: Option<String>,

    /// Config file (defaults to FOLIO_CONFIG or ~/.config/folio/folio.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the projects as JSON
    #[arg(long)]
    pub json: bool,

    /// Metadata fetches allowed in flight at once
    #[arg(long, value_name = "N")]
    pub concurrency: Option<usize>,

    /// Per-request timeout in milliseconds
    #[arg(long, value_name = "MS")]
    pub timeout_ms: Option<u64>,
}

impl ProjectsArgs {
    fn load_config(&self) -> anyhow::Result<FolioConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let mut config = FolioConfig::load_from_path(path)?;
                config.apply_account_override(std::env::var(FolioConfig::ENV_ACCOUNT).ok());
                config
            }
            None => FolioConfig::load()?,
        };

        config.apply_account_override(self.account.clone());
        if let Some(n) = self.concurrency {
            config.max_concurrent_fetches = n;
        }
        if let Some(ms) = self.timeout_ms {
            config.request_timeout_ms = ms;
        }
        config
            .validate()
            .context("invalid command line overrides")?;
        Ok(config)
    }
}

pub async fn run_projects(args: ProjectsArgs) -> i32 {
    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return 1;
        }
    };

    let resolver = match ProjectResolver::from_config(&config) {
        Ok(resolver) => Arc::new(resolver),
        Err(e) => {
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let mut loader = GalleryLoader::spawn(resolver, config.account().map(str::to_string));
    let state = loader.settled().await;

    if args.json {
        match serde_json::to_string_pretty(state.projects()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to encode projects: {e}");
                return 1;
            }
        }
        return 0;
    }

    print!("{}", render_gallery(&state, &config.placeholder_thumbnail));
    0
}

/// Plain-text rendering of a settled gallery.
pub fn render_gallery(state: &GalleryState, placeholder: &str) -> String {
    let records = state.projects();
    if records.is_empty() {
        return format!("{EMPTY_GALLERY_MESSAGE}\n");
    }

    let mut out = String::new();
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        render_card(&mut out, &ProjectCard::from_record(record, placeholder));
    }
    out
}

fn render_card(out: &mut String, card: &ProjectCard<'_>) {
    match card.date {
        Some(date) => out.push_str(&format!("{} ({date})\n", card.title)),
        None => out.push_str(&format!("{}\n", card.title)),
    }
    if !card.description.is_empty() {
        out.push_str(&format!("  {}\n", card.description));
    }
    if !card.tags.is_empty() {
        let tags: Vec<String> = card.tags.iter().map(|t| format!("#{t}")).collect();
        out.push_str(&format!("  {}\n", tags.join(" ")));
    }
    out.push_str(&format!("  Demo   -> {}\n", card.demo_link));
    out.push_str(&format!("  GitHub -> {}\n", card.source_link));
    out.push_str(&format!(
        "  Image  -> {} [{}] (fallback {})\n",
        card.thumbnail,
        card.thumbnail_alt(),
        card.fallback_thumbnail
    ));
}
