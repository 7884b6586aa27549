//! HTTP handlers for the AgriConnect backend

pub mod chatbot;
pub mod estimation;
pub mod guidelines;
pub mod health;
pub mod weather;

pub use chatbot::handle_whatsapp_webhook;
pub use estimation::{get_form_options, predict_yield};
pub use guidelines::get_guidelines;
pub use health::health_check;
pub use weather::get_weather_forecast;
