//! `folio` command line: preview the project gallery and the parallax math
//! without a browser.

pub mod parallax_cmd;
pub mod projects_cmd;

use clap::{Parser, Subcommand};

/// Portfolio gallery tools
#[derive(Debug, Parser)]
#[command(name = "folio", version)]
pub struct FolioCli {
    #[command(subcommand)]
    pub command: FolioSubcommand,
}

impl FolioCli {
    /// Run the selected subcommand and return the process exit code.
    pub async fn run(self) -> i32 {
        match self.command {
            FolioSubcommand::Projects(args) => projects_cmd::run_projects(args).await,
            FolioSubcommand::Parallax(args) => parallax_cmd::run_parallax(args),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum FolioSubcommand {
    /// Resolve the showcased projects of an account and print the gallery
    ///
    /// Repositories without a `project.json` on `main` are skipped. An
    /// unreachable listing API prints the empty gallery rather than failing.
    Projects(projects_cmd::ProjectsArgs),

    /// Print the styling variables for one pointer position
    Parallax(parallax_cmd::ParallaxArgs),
}
