//! Serve the bundled entity stores over HTTP.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use recordstore::{http, init_logging, Catalog, Settings};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "recordstore", version, about = "JSON-file-backed CRUD endpoints")]
struct Cli {
    /// Settings file (TOML). Defaults to ./recordstore.toml when present.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 127.0.0.1:5000
    #[arg(long)]
    bind: Option<String>,

    /// Directory holding the backing JSON files
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
    if let Some(bind) = cli.bind {
        settings.bind = bind;
    }
    if let Some(data_dir) = cli.data_dir {
        settings.data_dir = data_dir;
    }
    settings.validate()?;

    init_logging(&settings.logging)?;
    info!(
        bind = %settings.bind,
        data_dir = %settings.data_dir.display(),
        id_policy = ?settings.store.id_policy,
        reload_each_operation = settings.store.reload_each_operation,
        "starting record store"
    );

    let catalog = Catalog::open(&settings.data_dir, settings.store.clone())
        .with_context(|| format!("opening stores in {}", settings.data_dir.display()))?;
    http::serve(catalog, &settings.bind)
        .await
        .with_context(|| format!("serving on {}", settings.bind))?;
    Ok(())
}
