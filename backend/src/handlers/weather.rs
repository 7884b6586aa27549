//! HTTP handlers for weather advisory endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::Local;
use serde::Deserialize;

use shared::types::Language;

use crate::error::{AppError, AppResult};
use crate::services::weather::WeatherAdvisory;
use crate::AppState;

/// Query parameters for the forecast endpoint
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub district: String,
    pub days: Option<u8>,
    pub lang: Option<String>,
}

/// Fetch the forecast for a district and assemble the advisory
/// GET /weather/forecast?district=Lucknow&days=3&lang=hi
pub async fn get_weather_forecast(
    State(state): State<AppState>,
    Query(query): Query<ForecastQuery>,
) -> AppResult<Json<WeatherAdvisory>> {
    if state
        .estimation
        .estimator()
        .catalog()
        .district_factor(&query.district)
        .is_none()
    {
        return Err(AppError::NotFound(format!("District {}", query.district)));
    }

    let language = parse_language(query.lang.as_deref())?;
    let days = query.days.unwrap_or(state.config.weather.forecast_days);

    let samples = state
        .weather_client
        .fetch_hourly_forecast(&query.district, days)
        .await?;

    let advisory = state.advisory.build_advisory(
        &query.district,
        samples,
        Local::now().date_naive(),
        language,
    )?;

    Ok(Json(advisory))
}

pub(crate) fn parse_language(lang: Option<&str>) -> AppResult<Language> {
    match lang {
        None => Ok(Language::default()),
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::ValidationError(format!("Unsupported language: {}", raw))),
    }
}
