//! Weather data models
//!
//! Observation timestamps are provider-local (`NaiveDateTime`): the calendar
//! date a provider attaches to an hourly reading is the grouping key and is
//! never reinterpreted into another timezone.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An hourly weather observation as delivered by the provider boundary.
/// Numeric fields are optional because providers omit them on occasion;
/// [`crate::aggregator::WeatherAggregator`] decides what to do about that.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawWeatherSample {
    pub timestamp: NaiveDateTime,
    pub temperature_celsius: Option<Decimal>,
    pub humidity_percent: Option<i32>,
    pub wind_speed_kph: Option<Decimal>,
    pub condition_text: String,
    pub condition_icon: String,
    pub precipitation_probability: Option<i32>,
}

/// A fully validated hourly observation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSample {
    pub timestamp: NaiveDateTime,
    pub temperature_celsius: Decimal,
    pub humidity_percent: i32,
    pub wind_speed_kph: Decimal,
    pub condition_text: String,
    pub condition_icon: String,
    pub precipitation_probability: i32,
}

/// Coarse classification of a free-text weather description
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
}

impl WeatherCondition {
    /// Classify a description. The priority order is fixed: rain wins over
    /// cloud, and anything unrecognized is sunny. Total, never fails.
    pub fn classify(text: &str) -> Self {
        let text = text.to_lowercase();
        if text.contains("rain") || text.contains("drizzle") {
            WeatherCondition::Rainy
        } else if text.contains("cloud") || text.contains("overcast") {
            WeatherCondition::Cloudy
        } else {
            WeatherCondition::Sunny
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Cloudy => "cloudy",
            WeatherCondition::Rainy => "rainy",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::Rainy => "Rainy",
        }
    }

    pub fn label_hi(&self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "धूप",
            WeatherCondition::Cloudy => "बादल",
            WeatherCondition::Rainy => "बारिश",
        }
    }
}

impl std::str::FromStr for WeatherCondition {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sunny" => Ok(WeatherCondition::Sunny),
            "cloudy" => Ok(WeatherCondition::Cloudy),
            "rainy" => Ok(WeatherCondition::Rainy),
            _ => Err(()),
        }
    }
}

/// One day's worth of hourly observations, rolled up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWeatherSummary {
    pub date: NaiveDate,
    pub temp_max_celsius: Decimal,
    pub temp_min_celsius: Decimal,
    pub temp_mean_celsius: Decimal,
    pub humidity_mean_percent: Decimal,
    pub wind_mean_kph: Decimal,
    /// Description of the first observation of the day
    pub condition_text: String,
    pub condition: WeatherCondition,
    /// Probability from the first observation, taken as representative
    pub precipitation_probability: i32,
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_prefers_rain_over_cloud() {
        assert_eq!(
            WeatherCondition::classify("cloudy with rain"),
            WeatherCondition::Rainy
        );
        assert_eq!(
            WeatherCondition::classify("Cloudy with rain showers"),
            WeatherCondition::Rainy
        );
    }

    #[test]
    fn classify_matches_common_descriptions() {
        assert_eq!(
            WeatherCondition::classify("Light rain showers"),
            WeatherCondition::Rainy
        );
        assert_eq!(
            WeatherCondition::classify("Patchy light drizzle"),
            WeatherCondition::Rainy
        );
        assert_eq!(
            WeatherCondition::classify("Partly cloudy"),
            WeatherCondition::Cloudy
        );
        assert_eq!(
            WeatherCondition::classify("Overcast"),
            WeatherCondition::Cloudy
        );
        assert_eq!(
            WeatherCondition::classify("Clear sky"),
            WeatherCondition::Sunny
        );
    }

    #[test]
    fn classify_defaults_to_sunny() {
        assert_eq!(WeatherCondition::classify(""), WeatherCondition::Sunny);
        assert_eq!(WeatherCondition::classify("Mist"), WeatherCondition::Sunny);
        assert_eq!(
            WeatherCondition::classify("Thunderstorm"),
            WeatherCondition::Sunny
        );
    }
}
