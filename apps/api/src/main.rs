mod config;
mod errors;
mod extraction;
mod matching;
mod resume;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::name::{CapitalizedNameRecognizer, PersonRecognizer};
use crate::extraction::pdf::PdfTextExtractor;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Parser API v{}", env!("CARGO_PKG_VERSION"));

    std::fs::create_dir_all(&config.upload_dir).with_context(|| {
        format!(
            "Upload directory '{}' is not usable",
            config.upload_dir.display()
        )
    })?;
    info!("Staging uploads in {}", config.upload_dir.display());

    // Name recognizer is built once; a bad stopwords file aborts startup
    let name_recognizer = build_name_recognizer(&config)?;
    info!("Name recognizer initialized");

    let state = AppState {
        config: config.clone(),
        text_extractor: Arc::new(PdfTextExtractor),
        name_recognizer,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_name_recognizer(config: &Config) -> Result<Arc<dyn PersonRecognizer>> {
    let recognizer = CapitalizedNameRecognizer::new();
    let recognizer = match &config.name_stopwords_path {
        Some(path) => {
            info!("Loading extra name stopwords from {}", path.display());
            recognizer.with_stopwords_file(path)?
        }
        None => recognizer,
    };
    Ok(Arc::new(recognizer))
}
