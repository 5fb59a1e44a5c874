//! Briefly — text summary, keyword and sentiment server.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use briefly_core::Config;
use briefly_server::{build_router, AppState};

fn print_usage() {
    println!("Briefly — extractive summaries, keywords and sentiment over HTTP");
    println!();
    println!("Usage: briefly [command]");
    println!();
    println!("Commands:");
    println!("  (none)   Start the server");
    println!("  help     Show this help message");
    println!();
    println!("Environment:");
    println!("  PORT                        Listen port (default 8000)");
    println!("  BRIEFLY_BIND_ADDR           Listen address (default 0.0.0.0)");
    println!("  BRIEFLY_ALLOWED_ORIGINS     Comma-separated CORS origins");
    println!("  BRIEFLY_FETCH_TIMEOUT_SECS  Page fetch timeout (default 10)");
    println!("  BRIEFLY_USER_AGENT          User-Agent for page fetches");
    println!("  RUST_LOG                    Log filter (default info)");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        match args[1].as_str() {
            "--help" | "-h" | "help" => {
                print_usage();
                return Ok(());
            }
            _ => {
                eprintln!("Unknown command: {}. Use 'briefly help' for usage.", args[1]);
                std::process::exit(1);
            }
        }
    }

    let config = Config::from_env()?;
    let addr = config.listen_addr();
    info!(
        origins = ?config.allowed_origins,
        fetch_timeout_secs = config.fetch_timeout_secs,
        "Configuration loaded"
    );

    let state = Arc::new(AppState::new(config)?);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Briefly server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
