//! Mantra Web - HTTP server for affirmation posters.
//!
//! Serves the poster page, the refresh trigger, and the printable document,
//! delegating all generation work to the mantra-pipeline crate.

use axum::http::Request;
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use mantra_web::{AppState, Config, router};

/// Mantra Web - affirmation poster server.
#[derive(Parser, Debug)]
#[command(name = "mantra-web")]
#[command(about = "Affirmation poster server", long_about = None)]
struct Args {
    /// Path to .env file (optional).
    #[arg(long, env = "DOTENV_PATH", default_value = ".env")]
    dotenv: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env file if it exists
    if std::path::Path::new(&args.dotenv).exists() {
        dotenvy::from_path(&args.dotenv)?;
        eprintln!("Loaded environment from {}", args.dotenv);
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a missing credential fails startup, not a request
    let config = Config::from_env();
    config.pipeline.validate()?;
    let bind_addr = config.bind_addr.clone();

    // Create application state
    let state = AppState::new(config);

    // Build router with middleware
    let app = router(state).layer(
        TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
            tracing::span!(
                Level::INFO,
                "http_request",
                method = %request.method(),
                path = %request.uri().path(),
            )
        }),
    );

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "starting poster server");

    axum::serve(listener, app).await?;

    Ok(())
}
