//! Cropping season calendar for the Uttar Pradesh sugarcane belt

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Season derived purely from the calendar month
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Summer,
    Monsoon,
    Winter,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Summer, Season::Monsoon, Season::Winter];

    /// March through May is summer, June through September is monsoon,
    /// everything else is winter. Total over all twelve months.
    pub fn from_month(month: u32) -> Self {
        match month {
            3..=5 => Season::Summer,
            6..=9 => Season::Monsoon,
            _ => Season::Winter,
        }
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Season::Summer => "summer",
            Season::Monsoon => "monsoon",
            Season::Winter => "winter",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            Season::Summer => "Summer",
            Season::Monsoon => "Monsoon",
            Season::Winter => "Winter",
        }
    }

    pub fn label_hi(&self) -> &'static str {
        match self {
            Season::Summer => "गर्मी",
            Season::Monsoon => "मानसून",
            Season::Winter => "सर्दी",
        }
    }
}

impl FromStr for Season {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summer" => Ok(Season::Summer),
            "monsoon" => Ok(Season::Monsoon),
            "winter" => Ok(Season::Winter),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_month_maps_to_a_season() {
        let expected = [
            Season::Winter,
            Season::Winter,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Monsoon,
            Season::Monsoon,
            Season::Monsoon,
            Season::Monsoon,
            Season::Winter,
            Season::Winter,
            Season::Winter,
        ];
        for (month, want) in (1u32..=12).zip(expected) {
            assert_eq!(Season::from_month(month), want, "month {}", month);
        }
    }

    #[test]
    fn boundary_months() {
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Summer);
        assert_eq!(Season::from_month(5), Season::Summer);
        assert_eq!(Season::from_month(6), Season::Monsoon);
        assert_eq!(Season::from_month(9), Season::Monsoon);
        assert_eq!(Season::from_month(10), Season::Winter);
    }

    #[test]
    fn from_date_uses_the_month() {
        let date = NaiveDate::from_ymd_opt(2024, 7, 15).unwrap();
        assert_eq!(Season::for_date(date), Season::Monsoon);
    }

    #[test]
    fn season_parses_from_code() {
        assert_eq!("monsoon".parse::<Season>(), Ok(Season::Monsoon));
        assert_eq!("Winter".parse::<Season>(), Ok(Season::Winter));
        assert!("spring".parse::<Season>().is_err());
    }
}
