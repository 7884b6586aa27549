//! Route definitions for the AgriConnect backend

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Yield prediction
        .route("/predict/yield", post(handlers::predict_yield))
        .route("/predict/options", get(handlers::get_form_options))
        // Weather advisory
        .route("/weather/forecast", get(handlers::get_weather_forecast))
        // Farming guidelines
        .route("/guidelines", get(handlers::get_guidelines))
        // WhatsApp webhook (public - called by the messaging gateway)
        .route("/webhook/whatsapp", post(handlers::handle_whatsapp_webhook))
}
