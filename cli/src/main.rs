use clap::Parser;
use folio_cli::FolioCli;

#[tokio::main]
async fn main() {
    // Logs go to stderr so `--json` output stays machine readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("folio v{} starting", env!("CARGO_PKG_VERSION"));

    let code = FolioCli::parse().run().await;
    std::process::exit(code);
}
