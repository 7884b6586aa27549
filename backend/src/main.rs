//! AgriConnect - Sugarcane Farmer Assistance Backend
//!
//! Yield prediction, weather advisories, and farming guidelines for
//! sugarcane farmers in Uttar Pradesh, served over HTTP and a WhatsApp
//! chatbot webhook.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shared::catalog::SoilDistrictCatalog;
use shared::estimator::YieldEstimator;

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;

pub use config::Config;
use external::WeatherApiClient;
use services::{ChatbotService, EstimationService, WeatherAdvisoryService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub estimation: EstimationService,
    pub advisory: WeatherAdvisoryService,
    pub chatbot: ChatbotService,
    pub weather_client: WeatherApiClient,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agriconnect_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting AgriConnect Server");
    tracing::info!("Environment: {}", config.environment);

    let state = build_state(config);
    let app = create_app(state.clone());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], state.config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Build the shared application state. The catalogs are constructed once
/// here and are read-only for the lifetime of the process.
fn build_state(config: Config) -> AppState {
    let catalog = SoilDistrictCatalog::canonical();
    let weather_client = WeatherApiClient::new(
        config.weather.api_key.clone(),
        config.weather.api_endpoint.clone(),
    );

    AppState {
        estimation: EstimationService::new(catalog.clone()),
        advisory: WeatherAdvisoryService::new(),
        chatbot: ChatbotService::new(YieldEstimator::new(catalog)),
        weather_client,
        config: Arc::new(config),
    }
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "AgriConnect Sugarcane Assistance API v1.0"
}
