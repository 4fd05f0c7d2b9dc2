mod config;
mod documents;
mod errors;
mod fallback;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, GenerationMode};
use crate::fallback::{FallbackLibrary, FallbackProvider};
use crate::generation::source::{FallbackGenerator, LiveGenerator, TrainingGenerator};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Trainkit API v{}", env!("CARGO_PKG_VERSION"));

    // Fallback content: embedded library unless an operator supplied one
    let library = match &config.fallback_library_path {
        Some(path) => FallbackLibrary::from_path(path)
            .with_context(|| format!("loading FALLBACK_LIBRARY_PATH={}", path.display()))?,
        None => FallbackLibrary::embedded().context("embedded fallback library")?,
    };
    if library.is_empty() {
        warn!("Fallback library is empty; every fallback kit uses the generic template");
    } else {
        info!("Fallback library: {} kits", library.len());
    }
    let fallback = Arc::new(FallbackProvider::new(library));

    let generator = select_generator(&config, fallback.clone())?;

    let state = AppState {
        config: config.clone(),
        generator,
        fallback,
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Resolves GENERATION_MODE into the generator behind the plan and kit routes.
fn select_generator(
    config: &Config,
    fallback: Arc<FallbackProvider>,
) -> Result<Arc<dyn TrainingGenerator>> {
    if !config.uses_live_generation() {
        if config.generation_mode == GenerationMode::Auto {
            warn!("OPENAI_API_KEY not set; serving fallback content");
        }
        info!("Generator: fallback ({} mode)", config.generation_mode.as_str());
        return Ok(Arc::new(FallbackGenerator::new(fallback)));
    }

    let llm = LlmClient::new(config.llm.clone()).context("building HTTP client")?;
    if !llm.has_credentials() {
        warn!("GENERATION_MODE=live without OPENAI_API_KEY; generation requests will fail");
    }
    info!(
        "Generator: live (plan model: {}, kit model: {}, base url: {})",
        config.llm.plan_model, config.llm.kit_model, config.llm.base_url
    );
    Ok(Arc::new(LiveGenerator::new(llm)))
}
