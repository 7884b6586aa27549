//! Weather provider client
//!
//! Fetches hourly forecasts from a WeatherAPI.com-compatible endpoint and
//! normalizes the provider payload into [`RawWeatherSample`]s. This is the
//! only place provider-specific field names appear; everything downstream
//! works on the normalized shape.

use chrono::NaiveDateTime;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use shared::RawWeatherSample;

use crate::error::{AppError, AppResult};

/// Hour timestamps arrive as provider-local "YYYY-MM-DD HH:MM" strings
const HOUR_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Weather provider client
#[derive(Clone)]
pub struct WeatherApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// Provider response for a forecast request
#[derive(Debug, Deserialize)]
struct WaForecastResponse {
    forecast: WaForecast,
}

#[derive(Debug, Deserialize)]
struct WaForecast {
    forecastday: Vec<WaForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WaForecastDay {
    hour: Vec<WaHour>,
}

#[derive(Debug, Deserialize)]
struct WaHour {
    time: String,
    temp_c: Option<f64>,
    condition: WaCondition,
    humidity: Option<i32>,
    wind_kph: Option<f64>,
    chance_of_rain: Option<i32>,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
}

impl WeatherApiClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch the hourly forecast for a location. `days` is capped by the
    /// provider, not by us.
    pub async fn fetch_hourly_forecast(
        &self,
        location: &str,
        days: u8,
    ) -> AppResult<Vec<RawWeatherSample>> {
        let url = format!(
            "{}/forecast.json?key={}&q={}&days={}",
            self.base_url, self.api_key, location, days
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!("Weather provider request failed: {}", e);
            AppError::WeatherServiceUnavailable
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("Weather provider error: {} - {}", status, body);
            return Err(AppError::ExternalService(format!(
                "Weather provider returned {}",
                status
            )));
        }

        let data: WaForecastResponse = response.json().await.map_err(|e| {
            AppError::ExternalService(format!("Failed to parse weather response: {}", e))
        })?;

        convert_forecast(data)
    }
}

/// Flatten the provider's day/hour nesting into raw samples, keeping the
/// provider-local timestamps untouched.
fn convert_forecast(data: WaForecastResponse) -> AppResult<Vec<RawWeatherSample>> {
    let mut samples = Vec::new();

    for day in data.forecast.forecastday {
        for hour in day.hour {
            let timestamp = NaiveDateTime::parse_from_str(&hour.time, HOUR_TIME_FORMAT)
                .map_err(|e| {
                    AppError::ExternalService(format!(
                        "Unparseable hour timestamp '{}': {}",
                        hour.time, e
                    ))
                })?;

            samples.push(RawWeatherSample {
                timestamp,
                temperature_celsius: hour.temp_c.and_then(Decimal::from_f64_retain),
                humidity_percent: hour.humidity,
                wind_speed_kph: hour.wind_kph.and_then(Decimal::from_f64_retain),
                condition_text: hour.condition.text,
                condition_icon: hour.condition.icon,
                precipitation_probability: hour.chance_of_rain,
            });
        }
    }

    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_payload_flattens_into_samples() {
        let payload = serde_json::json!({
            "location": { "name": "Lucknow" },
            "forecast": {
                "forecastday": [{
                    "date": "2024-06-01",
                    "hour": [
                        {
                            "time": "2024-06-01 00:00",
                            "temp_c": 28.4,
                            "condition": { "text": "Partly cloudy", "icon": "//cdn/116.png" },
                            "humidity": 70,
                            "wind_kph": 11.2,
                            "chance_of_rain": 10
                        },
                        {
                            "time": "2024-06-01 01:00",
                            "temp_c": 27.9,
                            "condition": { "text": "Clear", "icon": "//cdn/113.png" },
                            "humidity": 72,
                            "wind_kph": 9.7,
                            "chance_of_rain": 0
                        }
                    ]
                }]
            }
        });

        let data: WaForecastResponse = serde_json::from_value(payload).unwrap();
        let samples = convert_forecast(data).unwrap();

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].condition_text, "Partly cloudy");
        assert_eq!(samples[0].timestamp.to_string(), "2024-06-01 00:00:00");
        assert_eq!(samples[1].humidity_percent, Some(72));
    }

    #[test]
    fn missing_numeric_fields_stay_none() {
        let payload = serde_json::json!({
            "forecast": {
                "forecastday": [{
                    "hour": [{
                        "time": "2024-06-01 00:00",
                        "condition": { "text": "Clear", "icon": "//cdn/113.png" }
                    }]
                }]
            }
        });

        let data: WaForecastResponse = serde_json::from_value(payload).unwrap();
        let samples = convert_forecast(data).unwrap();
        assert!(samples[0].temperature_celsius.is_none());
        assert!(samples[0].precipitation_probability.is_none());
    }

    #[test]
    fn bad_timestamp_is_an_external_service_error() {
        let payload = serde_json::json!({
            "forecast": {
                "forecastday": [{
                    "hour": [{
                        "time": "June 1st, midnight",
                        "condition": { "text": "Clear", "icon": "//cdn/113.png" }
                    }]
                }]
            }
        });

        let data: WaForecastResponse = serde_json::from_value(payload).unwrap();
        assert!(matches!(
            convert_forecast(data),
            Err(AppError::ExternalService(_))
        ));
    }
}
