//! Weather advisory assembly
//!
//! Turns a batch of raw hourly samples into the farmer-facing advisory:
//! daily summaries, the current season, and the matching farming guidelines.
//! Fetching the samples is the caller's job; this service is pure.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use shared::aggregator::{MalformedSamplePolicy, WeatherAggregator};
use shared::guidelines::GuidelineCatalog;
use shared::season::Season;
use shared::types::Language;
use shared::{DailyWeatherSummary, RawWeatherSample, WeatherCondition};

use crate::error::{AppError, AppResult};

/// Assembles weather advisories from normalized samples
#[derive(Debug, Clone)]
pub struct WeatherAdvisoryService {
    aggregator: WeatherAggregator,
    guidelines: GuidelineCatalog,
}

/// Farmer-facing advisory for one district
#[derive(Debug, Serialize)]
pub struct WeatherAdvisory {
    pub district: String,
    pub season: &'static str,
    pub season_label: &'static str,
    pub days: Vec<DailySummaryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidelines: Option<GuidelineView>,
}

/// One day of the advisory, with the condition localized
#[derive(Debug, Serialize)]
pub struct DailySummaryView {
    pub date: NaiveDate,
    pub temp_max_celsius: Decimal,
    pub temp_min_celsius: Decimal,
    pub temp_mean_celsius: Decimal,
    pub humidity_mean_percent: Decimal,
    pub wind_mean_kph: Decimal,
    pub condition: &'static str,
    pub condition_label: &'static str,
    pub condition_text: String,
    pub precipitation_probability: i32,
    pub icon: String,
}

/// Guidelines for the resolved (season, condition) pair
#[derive(Debug, Serialize)]
pub struct GuidelineView {
    pub season: &'static str,
    pub condition: &'static str,
    pub practices: Vec<String>,
    pub assets: Vec<AssetView>,
}

#[derive(Debug, Serialize)]
pub struct AssetView {
    pub path: &'static str,
    pub caption: String,
}

impl WeatherAdvisoryService {
    pub fn new() -> Self {
        Self {
            // The API path fails loudly on malformed provider data instead
            // of silently thinning the forecast.
            aggregator: WeatherAggregator::new(MalformedSamplePolicy::Reject),
            guidelines: GuidelineCatalog::canonical(),
        }
    }

    pub fn guidelines(&self) -> &GuidelineCatalog {
        &self.guidelines
    }

    /// Build the advisory for a district. `today` drives the season; the
    /// first forecast day's condition drives the guideline selection.
    pub fn build_advisory(
        &self,
        district: &str,
        samples: Vec<RawWeatherSample>,
        today: NaiveDate,
        language: Language,
    ) -> AppResult<WeatherAdvisory> {
        let summaries = self
            .aggregator
            .aggregate(samples)
            .map_err(|e| AppError::WeatherData(e.to_string()))?;

        let season = Season::for_date(today);
        let guidelines = summaries
            .first()
            .map(|day| self.guideline_view(season, day.condition, language));

        Ok(WeatherAdvisory {
            district: district.to_string(),
            season: season.code(),
            season_label: match language {
                Language::English => season.label_en(),
                Language::Hindi => season.label_hi(),
            },
            days: summaries
                .into_iter()
                .map(|day| summary_view(day, language))
                .collect(),
            guidelines,
        })
    }

    /// Localized guidelines for an explicit (season, condition) pair
    pub fn guideline_view(
        &self,
        season: Season,
        condition: WeatherCondition,
        language: Language,
    ) -> GuidelineView {
        let set = self.guidelines.select(season, condition);
        GuidelineView {
            season: season.code(),
            condition: condition.code(),
            practices: set
                .practices(language)
                .iter()
                .map(|p| p.to_string())
                .collect(),
            assets: set
                .assets
                .iter()
                .map(|asset| AssetView {
                    path: asset.path,
                    caption: asset.caption.get(language).to_string(),
                })
                .collect(),
        }
    }
}

impl Default for WeatherAdvisoryService {
    fn default() -> Self {
        Self::new()
    }
}

fn summary_view(day: DailyWeatherSummary, language: Language) -> DailySummaryView {
    DailySummaryView {
        date: day.date,
        temp_max_celsius: day.temp_max_celsius,
        temp_min_celsius: day.temp_min_celsius,
        temp_mean_celsius: day.temp_mean_celsius,
        humidity_mean_percent: day.humidity_mean_percent,
        wind_mean_kph: day.wind_mean_kph,
        condition: day.condition.code(),
        condition_label: match language {
            Language::English => day.condition.label_en(),
            Language::Hindi => day.condition.label_hi(),
        },
        condition_text: day.condition_text,
        precipitation_probability: day.precipitation_probability,
        icon: day.icon,
    }
}
