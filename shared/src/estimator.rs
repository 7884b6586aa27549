//! Sugarcane yield estimation
//!
//! `quintals = round(soil_multiplier * district_factor * area_in_acres)`,
//! rounded half-up to the nearest whole quintal. Pure and deterministic:
//! identical inputs always produce identical estimates.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use crate::catalog::SoilDistrictCatalog;
use crate::models::{AreaMeasurement, AreaUnit, EstimateRequest, SoilType, YieldEstimate};

/// Validation failure for a single estimation input field
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EstimateError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Unrecognized {field}: {value}")]
    UnknownCode { field: &'static str, value: String },

    #[error("Invalid area: {reason}")]
    InvalidArea { reason: String },
}

impl EstimateError {
    /// The offending field, for field-labeled error rendering
    pub fn field(&self) -> &'static str {
        match self {
            EstimateError::MissingField { field } => field,
            EstimateError::UnknownCode { field, .. } => field,
            EstimateError::InvalidArea { .. } => "area",
        }
    }
}

/// Yield estimator over an injected catalog
#[derive(Debug, Clone)]
pub struct YieldEstimator {
    catalog: SoilDistrictCatalog,
}

impl YieldEstimator {
    pub fn new(catalog: SoilDistrictCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &SoilDistrictCatalog {
        &self.catalog
    }

    /// Validate a raw request and compute the estimate
    pub fn estimate_request(&self, request: &EstimateRequest) -> Result<YieldEstimate, EstimateError> {
        let soil_raw = require(request.soil_type.as_deref(), "soilType")?;
        let district = require(request.district.as_deref(), "district")?;
        let area_raw = require(request.area.as_deref(), "area")?;

        let soil: SoilType = soil_raw.parse().map_err(|_| EstimateError::UnknownCode {
            field: "soilType",
            value: soil_raw.to_string(),
        })?;

        let unit = match request.area_unit.as_deref() {
            None | Some("") => AreaUnit::Acres,
            Some(raw) => raw.parse().map_err(|_| EstimateError::UnknownCode {
                field: "areaUnit",
                value: raw.to_string(),
            })?,
        };

        let area = parse_area(area_raw, unit)?;

        self.estimate(soil, district, area)
    }

    /// Compute an estimate from already-typed inputs
    pub fn estimate(
        &self,
        soil: SoilType,
        district: &str,
        area: AreaMeasurement,
    ) -> Result<YieldEstimate, EstimateError> {
        let multiplier =
            self.catalog
                .soil_multiplier(soil)
                .ok_or_else(|| EstimateError::UnknownCode {
                    field: "soilType",
                    value: soil.code().to_string(),
                })?;

        let factor =
            self.catalog
                .district_factor(district)
                .ok_or_else(|| EstimateError::UnknownCode {
                    field: "district",
                    value: district.to_string(),
                })?;

        if area.value <= Decimal::ZERO {
            return Err(EstimateError::InvalidArea {
                reason: format!("area must be positive, got {}", area.value),
            });
        }

        let total = multiplier * factor * area.in_acres();
        let quintals = total
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u64()
            .ok_or_else(|| EstimateError::InvalidArea {
                reason: "area too large".to_string(),
            })?;

        Ok(YieldEstimate { quintals })
    }
}

fn require<'a>(value: Option<&'a str>, field: &'static str) -> Result<&'a str, EstimateError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim()),
        _ => Err(EstimateError::MissingField { field }),
    }
}

fn parse_area(raw: &str, unit: AreaUnit) -> Result<AreaMeasurement, EstimateError> {
    let value: Decimal = raw.trim().parse().map_err(|_| EstimateError::InvalidArea {
        reason: format!("'{}' is not a number", raw),
    })?;

    if value <= Decimal::ZERO {
        return Err(EstimateError::InvalidArea {
            reason: format!("area must be positive, got {}", value),
        });
    }

    Ok(AreaMeasurement { value, unit })
}
