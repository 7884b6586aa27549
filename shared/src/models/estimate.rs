//! Yield estimation models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Soil texture classes recognized by the yield catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SoilType {
    Alluvial,
    ClayLoam,
    SandyLoam,
    Loam,
    Clayey,
}

impl SoilType {
    pub const ALL: [SoilType; 5] = [
        SoilType::Alluvial,
        SoilType::ClayLoam,
        SoilType::SandyLoam,
        SoilType::Loam,
        SoilType::Clayey,
    ];

    /// Catalog code, matching the wire representation
    pub fn code(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "alluvial",
            SoilType::ClayLoam => "clayLoam",
            SoilType::SandyLoam => "sandyLoam",
            SoilType::Loam => "loam",
            SoilType::Clayey => "clayey",
        }
    }

    pub fn label_en(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "Alluvial Soil",
            SoilType::ClayLoam => "Clay Loam",
            SoilType::SandyLoam => "Sandy Loam",
            SoilType::Loam => "Loam",
            SoilType::Clayey => "Clayey",
        }
    }

    pub fn label_hi(&self) -> &'static str {
        match self {
            SoilType::Alluvial => "जलोढ़ मिट्टी",
            SoilType::ClayLoam => "चिकनी दोमट",
            SoilType::SandyLoam => "बलुई दोमट",
            SoilType::Loam => "दोमट",
            SoilType::Clayey => "चिकनी मिट्टी",
        }
    }
}

impl FromStr for SoilType {
    type Err = ();

    /// Case-insensitive: chat input arrives fully lowercased
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "alluvial" => Ok(SoilType::Alluvial),
            "clayloam" => Ok(SoilType::ClayLoam),
            "sandyloam" => Ok(SoilType::SandyLoam),
            "loam" => Ok(SoilType::Loam),
            "clayey" => Ok(SoilType::Clayey),
            _ => Err(()),
        }
    }
}

/// Area units accepted by the estimation form and the chat grammar
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    #[default]
    Acres,
    Hectares,
}

impl FromStr for AreaUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "acres" | "acre" => Ok(AreaUnit::Acres),
            "hectares" | "hectare" => Ok(AreaUnit::Hectares),
            _ => Err(()),
        }
    }
}

/// Conversion factor from hectares to acres used throughout the estimator
pub fn hectares_to_acres() -> Decimal {
    Decimal::new(247, 2)
}

/// A validated land area
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AreaMeasurement {
    pub value: Decimal,
    pub unit: AreaUnit,
}

impl AreaMeasurement {
    /// Area expressed in acres, the unit the catalog multipliers are keyed on
    pub fn in_acres(&self) -> Decimal {
        match self.unit {
            AreaUnit::Acres => self.value,
            AreaUnit::Hectares => self.value * hectares_to_acres(),
        }
    }
}

/// A computed yield estimate. Derived per request, never persisted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YieldEstimate {
    pub quintals: u64,
}

/// Raw estimation request as it arrives from a form or API client.
/// Fields are optional strings so validation can name the offending field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    pub soil_type: Option<String>,
    pub district: Option<String>,
    pub area: Option<String>,
    pub area_unit: Option<String>,
}
