//! # NestQuest Binary
//!
//! The entry point that assembles the application based on compile-time features.

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use tracing_subscriber::EnvFilter;

use nq_configs::AppConfig;
use nq_web::{configure_routes, middleware, AppState};

// Feature-gated imports: the binary is assembled from whichever plugins
// are compiled in.
#[cfg(feature = "store-json")]
use nq_store_json::JsonStateStore;

#[cfg(feature = "ai-gemini")]
use nq_ai_gemini::GeminiClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;

    // 1. State persistence
    #[cfg(feature = "store-json")]
    let store = JsonStateStore::new(config.store.data_dir.clone());

    // 2. Generative recommendation client
    #[cfg(feature = "ai-gemini")]
    let recommender = GeminiClient::new(config.gemini.api_key.clone(), config.gemini.model.clone())?;

    // 3. Shared state, loaded once from the store
    let state = web::Data::new(AppState::new(Arc::new(store), Arc::new(recommender)).await);

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        "NestQuest starting"
    );

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(middleware::standard_middleware())
            .configure(configure_routes)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await?;
    Ok(())
}
