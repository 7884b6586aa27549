//! HTTP handlers for yield estimation endpoints

use axum::{extract::State, Json};
use serde::Serialize;

use shared::EstimateRequest;

use crate::error::AppResult;
use crate::services::estimation::FormOptions;
use crate::AppState;

/// Response for a yield prediction
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub quintals: u64,
}

/// Predict sugarcane yield from form input
/// POST /predict/yield
pub async fn predict_yield(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> AppResult<Json<PredictionResponse>> {
    let estimate = state.estimation.estimate(&request)?;

    tracing::debug!(
        district = request.district.as_deref().unwrap_or(""),
        quintals = estimate.quintals,
        "yield prediction served"
    );

    Ok(Json(PredictionResponse {
        quintals: estimate.quintals,
    }))
}

/// Catalog options for rendering the estimation form
/// GET /predict/options
pub async fn get_form_options(State(state): State<AppState>) -> Json<FormOptions> {
    Json(state.estimation.form_options())
}
