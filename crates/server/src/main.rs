use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nollywatch_core::{load_config, MovieAggregator, MovieCatalog, TaglineService, TmdbClient};

use nollywatch_server::api::create_router;
use nollywatch_server::state::AppState;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    init_tracing();

    // The config file is optional; the service boots from environment
    // variables and defaults alone.
    let config_path = std::env::var("NOLLYWATCH_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("nollywatch.toml"));

    info!("Loading configuration from {:?}", config_path);
    let config = load_config(&config_path)
        .with_context(|| format!("Failed to load config from {:?}", config_path))?;

    info!("Home region: {}", config.tmdb.region);

    // Feeds refuse to serve without an upstream credential; they never
    // fabricate data.
    let catalog: Option<Arc<dyn MovieCatalog>> = if config.tmdb.api_key.is_empty() {
        info!("TMDB API key not configured; movie feeds will return a configuration error");
        None
    } else {
        info!("Initializing TMDB client");
        let client = TmdbClient::new(&config.tmdb).context("Failed to create TMDB client")?;
        Some(Arc::new(client))
    };
    let aggregator = MovieAggregator::new(catalog, &config.tmdb);

    // Tagline generation degrades to a canned string when unconfigured.
    let tagline = TaglineService::from_config(&config.tagline)
        .context("Failed to create tagline service")?;
    if tagline.is_configured() {
        info!("Tagline model: {}", config.tagline.model);
    } else {
        info!("Gemini API key not configured; taglines will use the fallback string");
    }

    let addr = SocketAddr::new(config.server.host, config.server.port);
    let state = Arc::new(AppState::new(config, aggregator, tagline));
    let app = create_router(state);

    info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Shut down");
    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolve when either Ctrl+C or SIGTERM arrives.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        let mut term = signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler");
        tokio::select! {
            _ = signal::ctrl_c() => {}
            _ = term.recv() => {}
        }
    }

    #[cfg(not(unix))]
    {
        let _ = signal::ctrl_c().await;
    }
}
