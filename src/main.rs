//! PAYE engine HTTP server.

use std::net::SocketAddr;

use clap::Parser;
use paye_engine::api::{create_router, AppState};
use paye_engine::config::ConfigLoader;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the tax year's YAML rate tables
    #[arg(short, long, default_value = "./config/2025-26")]
    config: String,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing PAYE engine server");

    let loader = ConfigLoader::load(&args.config)?;
    let app = create_router(AppState::new(loader));

    let addr: SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
