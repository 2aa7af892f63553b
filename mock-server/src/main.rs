use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use mock_server::Store;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mock-server")]
#[command(about = "In-memory /todos service for local development")]
struct Args {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value = "5000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// JSON file with initial todos (array, or an object with a `todos` array)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str())))
        .with_target(false)
        .compact()
        .init();

    let store = match &args.db {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let store = Store::from_json(&raw).with_context(|| format!("parsing {}", path.display()))?;
            info!(count = store.len(), path = %path.display(), "seeded store");
            store
        }
        None => Store::default(),
    };

    let addr = format!("{}:{}", args.host, args.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("listening on {}", listener.local_addr()?);
    mock_server::run_with(listener, store).await?;
    Ok(())
}
