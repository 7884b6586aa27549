//! Business logic services for the AgriConnect backend

pub mod chatbot;
pub mod estimation;
pub mod weather;

pub use chatbot::ChatbotService;
pub use estimation::EstimationService;
pub use weather::WeatherAdvisoryService;
