//! Soil and district yield catalogs
//!
//! The multipliers come in one canonical, versioned table injected into the
//! estimator at construction time. Earlier revisions of the product shipped
//! two diverging constant sets; `canonical()` is the messaging-webhook
//! revision, which is the one the product owner signed off on.

use rust_decimal::Decimal;
use std::collections::HashMap;

use crate::models::SoilType;

/// Version tag of the canonical constant set
pub const CATALOG_VERSION: &str = "up-sugarcane-2024.1";

/// Immutable lookup of soil-type yield multipliers and district factors.
/// Built once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct SoilDistrictCatalog {
    version: &'static str,
    soil_multipliers: HashMap<SoilType, Decimal>,
    /// Keyed by lowercased district name
    district_factors: HashMap<String, Decimal>,
    /// Display names in catalog order, for form rendering
    district_names: Vec<&'static str>,
}

impl SoilDistrictCatalog {
    /// The canonical Uttar Pradesh sugarcane catalog: quintals per acre by
    /// soil texture, and rainfall/fertility adjustment per district.
    pub fn canonical() -> Self {
        let soil_multipliers = HashMap::from([
            (SoilType::Alluvial, Decimal::from(90)),
            (SoilType::ClayLoam, Decimal::from(75)),
            (SoilType::SandyLoam, Decimal::from(65)),
            (SoilType::Loam, Decimal::from(85)),
            (SoilType::Clayey, Decimal::from(60)),
        ]);

        let district_names = vec![
            "Lucknow",
            "Kanpur",
            "Meerut",
            "Bareilly",
            "Moradabad",
            "Aligarh",
            "Saharanpur",
            "Gorakhpur",
            "Faizabad",
            "Jhansi",
        ];

        let district_factors = HashMap::from([
            ("lucknow".to_string(), Decimal::new(115, 2)),
            ("kanpur".to_string(), Decimal::new(105, 2)),
            ("meerut".to_string(), Decimal::new(125, 2)),
            ("bareilly".to_string(), Decimal::new(115, 2)),
            ("moradabad".to_string(), Decimal::new(110, 2)),
            ("aligarh".to_string(), Decimal::new(105, 2)),
            ("saharanpur".to_string(), Decimal::new(120, 2)),
            ("gorakhpur".to_string(), Decimal::new(110, 2)),
            ("faizabad".to_string(), Decimal::new(105, 2)),
            ("jhansi".to_string(), Decimal::new(95, 2)),
        ]);

        Self {
            version: CATALOG_VERSION,
            soil_multipliers,
            district_factors,
            district_names,
        }
    }

    /// Build a catalog from arbitrary tables. Used by tests and by anyone
    /// who needs to trial an alternative constant set.
    pub fn with_tables(
        version: &'static str,
        soil_multipliers: HashMap<SoilType, Decimal>,
        district_factors: HashMap<String, Decimal>,
    ) -> Self {
        let district_factors: HashMap<String, Decimal> = district_factors
            .into_iter()
            .map(|(name, factor)| (name.to_lowercase(), factor))
            .collect();
        Self {
            version,
            soil_multipliers,
            district_factors,
            district_names: Vec::new(),
        }
    }

    pub fn version(&self) -> &'static str {
        self.version
    }

    pub fn soil_multiplier(&self, soil: SoilType) -> Option<Decimal> {
        self.soil_multipliers.get(&soil).copied()
    }

    /// District lookup is case-insensitive
    pub fn district_factor(&self, district: &str) -> Option<Decimal> {
        self.district_factors.get(&district.to_lowercase()).copied()
    }

    pub fn district_names(&self) -> &[&'static str] {
        &self.district_names
    }
}

impl Default for SoilDistrictCatalog {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_catalog_covers_all_soils() {
        let catalog = SoilDistrictCatalog::canonical();
        for soil in SoilType::ALL {
            assert!(catalog.soil_multiplier(soil).is_some(), "{:?}", soil);
        }
    }

    #[test]
    fn canonical_catalog_has_ten_districts() {
        let catalog = SoilDistrictCatalog::canonical();
        assert_eq!(catalog.district_names().len(), 10);
        for name in catalog.district_names() {
            assert!(catalog.district_factor(name).is_some(), "{}", name);
        }
    }

    #[test]
    fn district_lookup_is_case_insensitive() {
        let catalog = SoilDistrictCatalog::canonical();
        assert_eq!(
            catalog.district_factor("Lucknow"),
            catalog.district_factor("lucknow")
        );
        assert_eq!(
            catalog.district_factor("JHANSI"),
            Some(Decimal::new(95, 2))
        );
        assert!(catalog.district_factor("Delhi").is_none());
    }

    #[test]
    fn canonical_constants_match_signed_off_revision() {
        let catalog = SoilDistrictCatalog::canonical();
        assert_eq!(
            catalog.soil_multiplier(SoilType::Alluvial),
            Some(Decimal::from(90))
        );
        assert_eq!(
            catalog.district_factor("lucknow"),
            Some(Decimal::new(115, 2))
        );
    }
}
