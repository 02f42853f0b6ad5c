mod analysis;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::advisor::AiAdvisor;
use crate::analysis::catalog::SkillCatalog;
use crate::config::Config;
use crate::llm_client::{GeminiClient, GenerativeClient};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed required values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(&config.rust_log))),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillscan API v{}", env!("CARGO_PKG_VERSION"));

    // Load the skill catalog (read-only for the process lifetime)
    let catalog = SkillCatalog::load(config.skill_catalog_path.as_deref())?;
    info!("Skill catalog loaded: {} skills", catalog.len());
    if catalog.is_empty() {
        warn!("skill catalog is empty; every analysis will score 0");
    }

    // Initialize the generative client; a missing key degrades AI feedback
    // to static fallback tips instead of failing startup
    let client: Option<Arc<dyn GenerativeClient>> = match &config.gemini_api_key {
        Some(key) => {
            info!("Gemini client initialized (model: {})", config.gemini_model);
            Some(Arc::new(GeminiClient::new(key.clone())))
        }
        None => {
            warn!("GEMINI_API_KEY not set; AI feedback will use static fallback tips");
            None
        }
    };
    let advisor = AiAdvisor::new(client, config.gemini_model.clone());

    // Build app state
    let state = AppState {
        catalog: Arc::new(catalog),
        advisor: Arc::new(advisor),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Default log directive scoped to this crate, so hyper/tower internals stay
/// quiet unless RUST_LOG asks for them. Tracing targets use the underscore
/// form of the crate name.
fn default_filter(level: &str) -> String {
    format!("{}={}", env!("CARGO_PKG_NAME").replace('-', "_"), level)
}
