//! Yield estimation service

use serde::Serialize;

use shared::catalog::SoilDistrictCatalog;
use shared::estimator::YieldEstimator;
use shared::{EstimateRequest, SoilType, YieldEstimate};

use crate::error::AppResult;

/// Thin service wrapper around the shared estimator, translating estimation
/// failures into API error payloads
#[derive(Debug, Clone)]
pub struct EstimationService {
    estimator: YieldEstimator,
}

/// Catalog options for rendering an estimation form
#[derive(Debug, Serialize)]
pub struct FormOptions {
    pub catalog_version: String,
    pub soil_types: Vec<SoilOption>,
    pub districts: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SoilOption {
    pub code: &'static str,
    pub label_en: &'static str,
    pub label_hi: &'static str,
}

impl EstimationService {
    pub fn new(catalog: SoilDistrictCatalog) -> Self {
        Self {
            estimator: YieldEstimator::new(catalog),
        }
    }

    pub fn estimator(&self) -> &YieldEstimator {
        &self.estimator
    }

    pub fn estimate(&self, request: &EstimateRequest) -> AppResult<YieldEstimate> {
        Ok(self.estimator.estimate_request(request)?)
    }

    pub fn form_options(&self) -> FormOptions {
        let catalog = self.estimator.catalog();
        FormOptions {
            catalog_version: catalog.version().to_string(),
            soil_types: SoilType::ALL
                .iter()
                .map(|soil| SoilOption {
                    code: soil.code(),
                    label_en: soil.label_en(),
                    label_hi: soil.label_hi(),
                })
                .collect(),
            districts: catalog
                .district_names()
                .iter()
                .map(|name| name.to_string())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn service() -> EstimationService {
        EstimationService::new(SoilDistrictCatalog::canonical())
    }

    #[test]
    fn valid_request_produces_an_estimate() {
        let estimate = service()
            .estimate(&EstimateRequest {
                soil_type: Some("alluvial".into()),
                district: Some("Lucknow".into()),
                area: Some("5".into()),
                area_unit: Some("acres".into()),
            })
            .unwrap();
        assert_eq!(estimate.quintals, 518);
    }

    #[test]
    fn invalid_request_becomes_a_validation_error() {
        let err = service()
            .estimate(&EstimateRequest {
                soil_type: Some("alluvial".into()),
                district: Some("Delhi".into()),
                area: Some("5".into()),
                area_unit: None,
            })
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "district"));
    }

    #[test]
    fn form_options_cover_the_whole_catalog() {
        let options = service().form_options();
        assert_eq!(options.soil_types.len(), 5);
        assert_eq!(options.districts.len(), 10);
        assert_eq!(options.catalog_version, "up-sugarcane-2024.1");
    }
}
