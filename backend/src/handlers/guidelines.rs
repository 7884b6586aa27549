//! HTTP handlers for farming guideline endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use shared::season::Season;
use shared::WeatherCondition;

use crate::error::{AppError, AppResult};
use crate::handlers::weather::parse_language;
use crate::services::weather::GuidelineView;
use crate::AppState;

/// Query parameters for the guidelines endpoint
#[derive(Debug, Deserialize)]
pub struct GuidelinesQuery {
    pub season: String,
    pub condition: String,
    pub lang: Option<String>,
}

/// Look up farming guidelines for a season and weather condition
/// GET /guidelines?season=monsoon&condition=rainy&lang=hi
pub async fn get_guidelines(
    State(state): State<AppState>,
    Query(query): Query<GuidelinesQuery>,
) -> AppResult<Json<GuidelineView>> {
    let season: Season = query
        .season
        .parse()
        .map_err(|_| AppError::ValidationError(format!("Unknown season: {}", query.season)))?;

    let condition: WeatherCondition = query.condition.parse().map_err(|_| {
        AppError::ValidationError(format!("Unknown condition: {}", query.condition))
    })?;

    let language = parse_language(query.lang.as_deref())?;

    Ok(Json(state.advisory.guideline_view(season, condition, language)))
}
