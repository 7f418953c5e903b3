use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use market_search_mock::config::{Config, SecurityConfig};
use market_search_mock::handlers::not_found;
use market_search_mock::routes::api;
use market_search_mock::services::MockSearchService;
use market_search_mock::AppState;

fn cors(security: &SecurityConfig) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if security.allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }
    security
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    info!("Configuration loaded successfully");

    let search = Arc::new(MockSearchService::new(config.search.clone()));
    let state = AppState {
        search,
        config: config.clone(),
        start_time: Instant::now(),
    };

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors(&state.config.security))
            .wrap(Logger::default())
            .service(api::config())
            .default_service(web::route().to(not_found))
    })
    .bind((config.server.host.as_str(), config.server.port))
    .with_context(|| {
        format!(
            "Failed to bind {}:{}",
            config.server.host, config.server.port
        )
    })?;

    info!(
        "Mock search service listening at http://{}:{}",
        config.server.host, config.server.port
    );

    server.workers(config.server.workers).run().await?;
    Ok(())
}
