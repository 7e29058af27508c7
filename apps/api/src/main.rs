mod analysis;
mod config;
mod errors;
mod extract;
mod llm_client;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extract::PdfTextExtractor;
use crate::llm_client::{GeminiClient, GeminiConfig, LlmClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_PKG_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Compass v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let gemini = GeminiClient::new(GeminiConfig {
        api_key: config.google_api_key.clone(),
        model: config.gemini_model.clone(),
        api_base: config.gemini_api_base.clone(),
        timeout: Duration::from_secs(config.gemini_timeout_secs),
    })?;
    let llm = LlmClient::new(Arc::new(gemini));
    info!("LLM client initialized (model: {})", llm.model());

    let state = AppState {
        llm,
        extractor: Arc::new(PdfTextExtractor),
    };

    let app = build_router(state)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
