//! Error handling for the AgriConnect backend
//!
//! Provides consistent error responses in English and Hindi

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use shared::estimator::EstimateError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_hi: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    // Weather data errors
    #[error("Malformed weather data: {0}")]
    WeatherData(String),

    // External service errors
    #[error("Weather service unavailable")]
    WeatherServiceUnavailable,

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_hi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl From<EstimateError> for AppError {
    fn from(err: EstimateError) -> Self {
        let field = err.field().to_string();
        let (message, message_hi) = match &err {
            EstimateError::MissingField { field } => (
                format!("Missing required field: {}", field),
                format!("आवश्यक फ़ील्ड गायब है: {}", field),
            ),
            EstimateError::UnknownCode { field, value } => (
                format!("Unrecognized {}: {}", field, value),
                format!("अमान्य {}: {}", field, value),
            ),
            EstimateError::InvalidArea { reason } => (
                format!("Invalid area: {}", reason),
                "क्षेत्रफल एक धनात्मक संख्या होनी चाहिए".to_string(),
            ),
        };
        AppError::Validation {
            field,
            message,
            message_hi,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = match &self {
            AppError::Validation {
                field,
                message,
                message_hi,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: message.clone(),
                    message_hi: message_hi.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::ValidationError(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: format!("अमान्य इनपुट: {}", msg),
                    field: None,
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "NOT_FOUND".to_string(),
                    message_en: format!("{} not found", resource),
                    message_hi: format!("{} नहीं मिला", resource),
                    field: None,
                },
            ),
            AppError::WeatherData(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "WEATHER_DATA_ERROR".to_string(),
                    message_en: format!("Malformed weather data: {}", msg),
                    message_hi: "मौसम डेटा अधूरा या गलत है".to_string(),
                    field: None,
                },
            ),
            AppError::WeatherServiceUnavailable => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "WEATHER_SERVICE_UNAVAILABLE".to_string(),
                    message_en: "Weather service is temporarily unavailable".to_string(),
                    message_hi: "मौसम सेवा अस्थायी रूप से अनुपलब्ध है".to_string(),
                    field: None,
                },
            ),
            AppError::ExternalService(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "EXTERNAL_SERVICE_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: "बाहरी सेवा में त्रुटि".to_string(),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message_en: msg.clone(),
                    message_hi: "कॉन्फ़िगरेशन त्रुटि".to_string(),
                    field: None,
                },
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorDetail {
                        code: "INTERNAL_ERROR".to_string(),
                        message_en: "An internal error occurred".to_string(),
                        message_hi: "आंतरिक त्रुटि हुई".to_string(),
                        field: None,
                    },
                )
            }
            AppError::InternalError(err) => {
                tracing::error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorDetail {
                        code: "INTERNAL_ERROR".to_string(),
                        message_en: "An internal error occurred".to_string(),
                        message_hi: "आंतरिक त्रुटि हुई".to_string(),
                        field: None,
                    },
                )
            }
        };

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn estimate_errors_carry_the_offending_field() {
        let err: AppError = EstimateError::UnknownCode {
            field: "district",
            value: "Delhi".to_string(),
        }
        .into();

        match err {
            AppError::Validation { field, message, .. } => {
                assert_eq!(field, "district");
                assert!(message.contains("Delhi"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
