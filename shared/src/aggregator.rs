//! Normalization of raw hourly observations into daily summaries
//!
//! Samples are sorted chronologically, grouped by the calendar date of their
//! provider-local timestamp, and each group is rolled up into one
//! [`DailyWeatherSummary`]. The representative condition, icon and
//! precipitation probability come from the first observation of the day; a
//! deliberate simplification, not a statistical claim.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use thiserror::Error;

use crate::models::{DailyWeatherSummary, RawWeatherSample, WeatherCondition, WeatherSample};

/// Malformed sample (missing required numeric field) in the input
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Malformed weather sample at {timestamp}: missing {field}")]
pub struct WeatherDataError {
    pub timestamp: String,
    pub field: &'static str,
}

/// What to do with a sample missing a required numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedSamplePolicy {
    /// Fail the whole aggregation
    #[default]
    Reject,
    /// Drop the sample and aggregate the rest
    Skip,
}

/// Groups hourly samples into per-day summaries
#[derive(Debug, Clone, Default)]
pub struct WeatherAggregator {
    policy: MalformedSamplePolicy,
}

impl WeatherAggregator {
    pub fn new(policy: MalformedSamplePolicy) -> Self {
        Self { policy }
    }

    /// Aggregate raw samples into daily summaries, ascending by date.
    /// Empty input produces empty output.
    pub fn aggregate(
        &self,
        samples: Vec<RawWeatherSample>,
    ) -> Result<Vec<DailyWeatherSummary>, WeatherDataError> {
        let mut validated: Vec<WeatherSample> = Vec::with_capacity(samples.len());
        for raw in samples {
            match validate_sample(raw) {
                Ok(sample) => validated.push(sample),
                Err(err) => match self.policy {
                    MalformedSamplePolicy::Reject => return Err(err),
                    MalformedSamplePolicy::Skip => continue,
                },
            }
        }

        // Chronological order so "first sample of the day" is well defined
        // even when the provider delivers hours out of order.
        validated.sort_by_key(|s| s.timestamp);

        let mut days: BTreeMap<NaiveDate, Vec<WeatherSample>> = BTreeMap::new();
        for sample in validated {
            days.entry(sample.timestamp.date()).or_default().push(sample);
        }

        Ok(days
            .into_iter()
            .map(|(date, group)| summarize_day(date, &group))
            .collect())
    }
}

fn validate_sample(raw: RawWeatherSample) -> Result<WeatherSample, WeatherDataError> {
    let missing = |field: &'static str| WeatherDataError {
        timestamp: raw.timestamp.to_string(),
        field,
    };

    Ok(WeatherSample {
        temperature_celsius: raw.temperature_celsius.ok_or_else(|| missing("temperature"))?,
        humidity_percent: raw.humidity_percent.ok_or_else(|| missing("humidity"))?,
        wind_speed_kph: raw.wind_speed_kph.ok_or_else(|| missing("wind speed"))?,
        precipitation_probability: raw
            .precipitation_probability
            .ok_or_else(|| missing("precipitation probability"))?,
        timestamp: raw.timestamp,
        condition_text: raw.condition_text,
        condition_icon: raw.condition_icon,
    })
}

/// Roll one day's samples into a summary. Callers guarantee the group is
/// non-empty and chronologically sorted.
fn summarize_day(date: NaiveDate, group: &[WeatherSample]) -> DailyWeatherSummary {
    let count = Decimal::from(group.len());
    let first = &group[0];

    let mut temp_max = first.temperature_celsius;
    let mut temp_min = first.temperature_celsius;
    let mut temp_sum = Decimal::ZERO;
    let mut humidity_sum = Decimal::ZERO;
    let mut wind_sum = Decimal::ZERO;

    for sample in group {
        temp_max = temp_max.max(sample.temperature_celsius);
        temp_min = temp_min.min(sample.temperature_celsius);
        temp_sum += sample.temperature_celsius;
        humidity_sum += Decimal::from(sample.humidity_percent);
        wind_sum += sample.wind_speed_kph;
    }

    DailyWeatherSummary {
        date,
        temp_max_celsius: temp_max,
        temp_min_celsius: temp_min,
        temp_mean_celsius: mean(temp_sum, count),
        humidity_mean_percent: mean(humidity_sum, count),
        wind_mean_kph: mean(wind_sum, count),
        condition_text: first.condition_text.clone(),
        condition: WeatherCondition::classify(&first.condition_text),
        precipitation_probability: first.precipitation_probability,
        icon: first.condition_icon.clone(),
    }
}

// Means stay at full precision: rounding here can push the mean outside
// [min, max] when every sample in the group carries finer digits than the
// rounding keeps (e.g. a day of identical 20.04 degree readings).
fn mean(sum: Decimal, count: Decimal) -> Decimal {
    sum / count
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn ts(date: &str, hour: u32) -> NaiveDateTime {
        date.parse::<NaiveDate>()
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn sample(date: &str, hour: u32, temp: &str, condition: &str) -> RawWeatherSample {
        RawWeatherSample {
            timestamp: ts(date, hour),
            temperature_celsius: Some(temp.parse().unwrap()),
            humidity_percent: Some(70),
            wind_speed_kph: Some("10".parse().unwrap()),
            condition_text: condition.to_string(),
            condition_icon: format!("//cdn.example.com/{}.png", condition),
            precipitation_probability: Some(20),
        }
    }

    #[test]
    fn empty_input_produces_empty_output() {
        let aggregator = WeatherAggregator::default();
        assert!(aggregator.aggregate(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn twenty_four_hours_collapse_to_one_day() {
        let samples: Vec<_> = (0..24)
            .map(|h| sample("2024-06-01", h, &format!("{}", 20 + (h % 12)), "Sunny"))
            .collect();

        let summaries = WeatherAggregator::default().aggregate(samples).unwrap();
        assert_eq!(summaries.len(), 1);

        let day = &summaries[0];
        assert_eq!(day.date, "2024-06-01".parse::<NaiveDate>().unwrap());
        assert_eq!(day.temp_max_celsius, Decimal::from(31));
        assert_eq!(day.temp_min_celsius, Decimal::from(20));
    }

    #[test]
    fn one_summary_per_distinct_date_ascending() {
        let samples = vec![
            sample("2024-06-03", 9, "30", "Sunny"),
            sample("2024-06-01", 9, "25", "Partly cloudy"),
            sample("2024-06-02", 9, "27", "Light rain"),
        ];

        let summaries = WeatherAggregator::default().aggregate(samples).unwrap();
        let dates: Vec<String> = summaries.iter().map(|s| s.date.to_string()).collect();
        assert_eq!(dates, ["2024-06-01", "2024-06-02", "2024-06-03"]);
    }

    #[test]
    fn min_le_mean_le_max() {
        let samples = vec![
            sample("2024-06-01", 6, "21.5", "Sunny"),
            sample("2024-06-01", 12, "33.0", "Sunny"),
            sample("2024-06-01", 18, "27.2", "Sunny"),
        ];

        let day = &WeatherAggregator::default().aggregate(samples).unwrap()[0];
        assert!(day.temp_min_celsius <= day.temp_mean_celsius);
        assert!(day.temp_mean_celsius <= day.temp_max_celsius);
    }

    #[test]
    fn identical_high_precision_readings_keep_mean_in_bounds() {
        // 20.04 is representative of provider floats converted at full
        // precision; the mean must not be rounded below the minimum.
        let samples = vec![
            sample("2024-06-01", 6, "20.04", "Sunny"),
            sample("2024-06-01", 12, "20.04", "Sunny"),
            sample("2024-06-01", 18, "20.04", "Sunny"),
        ];

        let day = &WeatherAggregator::default().aggregate(samples).unwrap()[0];
        assert_eq!(day.temp_mean_celsius, "20.04".parse::<Decimal>().unwrap());
        assert!(day.temp_min_celsius <= day.temp_mean_celsius);
        assert!(day.temp_mean_celsius <= day.temp_max_celsius);
    }

    #[test]
    fn single_sample_day_has_min_equal_max() {
        let samples = vec![sample("2024-06-01", 9, "28", "Overcast")];
        let day = &WeatherAggregator::default().aggregate(samples).unwrap()[0];
        assert_eq!(day.temp_min_celsius, day.temp_max_celsius);
        assert_eq!(day.temp_mean_celsius, Decimal::from(28));
        assert_eq!(day.condition, WeatherCondition::Cloudy);
    }

    #[test]
    fn first_chronological_sample_wins_even_when_input_is_unordered() {
        let mut late = sample("2024-06-01", 15, "30", "Sunny");
        late.precipitation_probability = Some(5);
        let mut early = sample("2024-06-01", 3, "22", "Light rain");
        early.precipitation_probability = Some(80);

        let day = &WeatherAggregator::default()
            .aggregate(vec![late, early])
            .unwrap()[0];
        assert_eq!(day.condition_text, "Light rain");
        assert_eq!(day.condition, WeatherCondition::Rainy);
        assert_eq!(day.precipitation_probability, 80);
    }

    #[test]
    fn reject_policy_fails_on_missing_temperature() {
        let mut bad = sample("2024-06-01", 9, "28", "Sunny");
        bad.temperature_celsius = None;

        let err = WeatherAggregator::new(MalformedSamplePolicy::Reject)
            .aggregate(vec![sample("2024-06-01", 8, "27", "Sunny"), bad])
            .unwrap_err();
        assert_eq!(err.field, "temperature");
    }

    #[test]
    fn skip_policy_drops_the_malformed_sample() {
        let mut bad = sample("2024-06-01", 9, "40", "Sunny");
        bad.humidity_percent = None;

        let summaries = WeatherAggregator::new(MalformedSamplePolicy::Skip)
            .aggregate(vec![sample("2024-06-01", 8, "27", "Sunny"), bad])
            .unwrap();
        assert_eq!(summaries.len(), 1);
        // The 40 degree reading was dropped with its sample
        assert_eq!(summaries[0].temp_max_celsius, Decimal::from(27));
    }
}
