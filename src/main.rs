use anyhow::Result;
use clap::Parser;

use flipvid_core::gateways::CatalogGateway as _;
use flipvid_db_sqlite::{run_embedded_database_migrations, Connections};
use flipvid_gateways::ManifestGateway;

mod cfg;

use cfg::Cfg;

#[derive(Debug, Parser)]
#[command(version, about = "Video course platform with per-video discussions")]
struct Args {
    /// Database file, overrides DATABASE_URL.
    #[arg(long)]
    db_url: Option<String>,

    /// Course manifest URL, overrides MANIFEST_URL.
    #[arg(long)]
    manifest_url: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    dotenvy::dotenv().ok();

    let args = Args::parse();
    let mut cfg = Cfg::from_env_or_default();
    if let Some(db_url) = args.db_url {
        cfg.db_url = db_url;
    }
    if let Some(manifest_url) = args.manifest_url {
        cfg.manifest_url = manifest_url;
    }

    log::info!("Opening database {}", cfg.db_url);
    let connections = Connections::init(&cfg.db_url, cfg.db_connection_pool_size)?;
    run_embedded_database_migrations(connections.exclusive()?);

    // The manifest is fetched before the async runtime starts because
    // the HTTP client blocks.
    let catalog = ManifestGateway::new(cfg.manifest_url).load_phases()?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(flipvid_webserver::run(connections, catalog));
    Ok(())
}
