//! Seasonal farming guidelines
//!
//! A fixed season-by-condition table of recommended practices, bilingual
//! (English and Hindi), each cell carrying four illustrative assets. Lookup
//! is total: a cell missing from the table falls back to a placeholder set
//! instead of erroring.

use std::collections::HashMap;

use serde::Serialize;

use crate::models::WeatherCondition;
use crate::season::Season;
use crate::types::{Language, LocalizedText};

/// An illustrative image attached to a guideline cell
#[derive(Debug, Clone, Serialize)]
pub struct GuidelineAsset {
    pub path: &'static str,
    pub caption: LocalizedText,
}

/// One cell of the guidelines table
#[derive(Debug, Clone, Serialize)]
pub struct GuidelineSet {
    pub practices_en: Vec<&'static str>,
    pub practices_hi: Vec<&'static str>,
    pub assets: Vec<GuidelineAsset>,
}

impl GuidelineSet {
    pub fn practices(&self, language: Language) -> &[&'static str] {
        match language {
            Language::English => &self.practices_en,
            Language::Hindi => &self.practices_hi,
        }
    }
}

/// The full guidelines table, built once at startup
#[derive(Debug, Clone)]
pub struct GuidelineCatalog {
    cells: HashMap<(Season, WeatherCondition), GuidelineSet>,
    fallback: GuidelineSet,
}

fn asset(path: &'static str, en: &str, hi: &str) -> GuidelineAsset {
    GuidelineAsset {
        path,
        caption: LocalizedText::new(en, hi),
    }
}

impl GuidelineCatalog {
    /// Select the guidelines for a season and condition. Never fails; an
    /// uncovered combination yields the fallback set.
    pub fn select(&self, season: Season, condition: WeatherCondition) -> &GuidelineSet {
        self.cells.get(&(season, condition)).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &GuidelineSet {
        &self.fallback
    }

    pub fn canonical() -> Self {
        let mut cells = HashMap::new();

        cells.insert(
            (Season::Summer, WeatherCondition::Sunny),
            GuidelineSet {
                practices_en: vec![
                    "Maintain proper irrigation schedule - water every 5-7 days",
                    "Apply mulching to retain soil moisture",
                    "Best time for early morning irrigation",
                    "Monitor for pests that thrive in warm conditions",
                ],
                practices_hi: vec![
                    "उचित सिंचाई कार्यक्रम बनाए रखें - हर 5-7 दिनों में पानी दें",
                    "मिट्टी की नमी बनाए रखने के लिए मल्चिंग करें",
                    "सुबह की सिंचाई का सबसे अच्छा समय",
                    "गर्म परिस्थितियों में पनपने वाले कीटों की निगरानी करें",
                ],
                assets: vec![
                    asset(
                        "/images/summer_sunny_1.jpg",
                        "Irrigation schedule example",
                        "सिंचाई कार्यक्रम का उदाहरण",
                    ),
                    asset("/images/summer_sunny_2.png", "Mulching technique", "मल्चिंग तकनीक"),
                    asset(
                        "/images/summer_sunny_3.jpg",
                        "Morning irrigation setup",
                        "सुबह की सिंचाई सेटअप",
                    ),
                    asset(
                        "/images/summer_sunny_4.jpg",
                        "Pest monitoring tool",
                        "कीट निगरानी उपकरण",
                    ),
                ],
            },
        );

        cells.insert(
            (Season::Summer, WeatherCondition::Cloudy),
            GuidelineSet {
                practices_en: vec![
                    "Reduce irrigation frequency",
                    "Watch for fungal disease development",
                    "Monitor humidity levels",
                    "Prepare for possible rain",
                ],
                practices_hi: vec![
                    "सिंचाई की आवृत्ति कम करें",
                    "फफूंदी रोग के विकास पर नज़र रखें",
                    "नमी के स्तर की निगरानी करें",
                    "संभावित बारिश के लिए तैयार रहें",
                ],
                assets: vec![
                    asset(
                        "/images/summer_cloudy_1.jpeg",
                        "Reduced irrigation setup",
                        "कम सिंचाई सेटअप",
                    ),
                    asset(
                        "/images/summer_cloudy_2.jpg",
                        "Fungal disease check",
                        "फफूंदी रोग जांच",
                    ),
                    asset("/images/summer_cloudy_3.jpg", "Humidity monitor", "नमी मॉनिटर"),
                    asset("/images/summer_cloudy_4.jpg", "Rain preparation", "बारिश की तैयारी"),
                ],
            },
        );

        cells.insert(
            (Season::Summer, WeatherCondition::Rainy),
            GuidelineSet {
                practices_en: vec![
                    "Ensure proper drainage",
                    "Apply fungicides if needed",
                    "Avoid waterlogging",
                    "Monitor for disease outbreak",
                ],
                practices_hi: vec![
                    "उचित जल निकासी सुनिश्चित करें",
                    "यदि आवश्यक हो तो फफूंदनाशक का प्रयोग करें",
                    "जलभराव से बचें",
                    "रोग प्रकोप की निगरानी करें",
                ],
                assets: vec![
                    asset("/images/summer_rainy_1.jpg", "Drainage system", "जल निकासी प्रणाली"),
                    asset(
                        "/images/summer_rainy_2.jpg",
                        "Fungicide application",
                        "फफूंदनाशक प्रयोग",
                    ),
                    asset(
                        "/images/summer_rainy_3.jpeg",
                        "Waterlogging prevention",
                        "जलभराव रोकथाम",
                    ),
                    asset("/images/summer_cloudy_2.jpg", "Disease monitoring", "रोग निगरानी"),
                ],
            },
        );

        cells.insert(
            (Season::Monsoon, WeatherCondition::Sunny),
            GuidelineSet {
                practices_en: vec![
                    "Moderate irrigation - check soil moisture daily",
                    "Apply organic manure to support growth",
                    "Watch for weed growth",
                    "Ensure good drainage preparation",
                ],
                practices_hi: vec![
                    "मध्यम सिंचाई - मिट्टी की नमी प्रतिदिन जांचें",
                    "वृद्धि के लिए जैविक खाद का प्रयोग करें",
                    "खरपतवार के विकास पर नजर रखें",
                    "अच्छी जल निकासी की तैयारी सुनिश्चित करें",
                ],
                assets: vec![
                    asset(
                        "/images/summer_cloudy_1.jpeg",
                        "Moderate irrigation",
                        "मध्यम सिंचाई",
                    ),
                    asset("/images/monsoon_sunny_2.jpg", "Organic manure", "जैविक खाद"),
                    asset("/images/monsoon_sunny_3.jpeg", "Weed control", "खरपतवार नियंत्रण"),
                    asset("/images/summer_rainy_1.jpg", "Drainage prep", "जल निकासी तैयारी"),
                ],
            },
        );

        cells.insert(
            (Season::Monsoon, WeatherCondition::Cloudy),
            GuidelineSet {
                practices_en: vec![
                    "Reduce irrigation significantly",
                    "Monitor for waterlogging and fungal issues",
                    "Apply light fertilization",
                    "Prepare for heavy rains",
                ],
                practices_hi: vec![
                    "सिंचाई को काफी कम करें",
                    "जलभराव और फफूंदी समस्याओं की निगरानी करें",
                    "हल्की उर्वरक डालें",
                    "भारी बारिश के लिए तैयार रहें",
                ],
                assets: vec![
                    asset(
                        "/images/summer_cloudy_1.jpeg",
                        "Reduced irrigation",
                        "कम सिंचाई सेटअप",
                    ),
                    asset("/images/summer_rainy_3.jpeg", "Waterlogging check", "जलभराव जांच"),
                    asset(
                        "/images/monsoon_cloudy_3.jpg",
                        "Light fertilization",
                        "हल्की उर्वरक",
                    ),
                    asset("/images/summer_cloudy_4.jpeg", "Rain preparation", "बारिश की तैयारी"),
                ],
            },
        );

        cells.insert(
            (Season::Monsoon, WeatherCondition::Rainy),
            GuidelineSet {
                practices_en: vec![
                    "Ensure drainage systems are functional",
                    "Avoid additional watering",
                    "Use disease-resistant varieties",
                    "Check for root rot",
                ],
                practices_hi: vec![
                    "जल निकासी प्रणाली को कार्यशील सुनिश्चित करें",
                    "अतिरिक्त पानी देने से बचें",
                    "रोग-प्रतिरोधी किस्मों का उपयोग करें",
                    "जड़ सड़न की जांच करें",
                ],
                assets: vec![
                    asset("/images/summer_rainy_1.jpg", "Drainage system", "जल निकासी प्रणाली"),
                    asset(
                        "/images/monsoon_rainy_2.jpg",
                        "No extra watering",
                        "कोई अतिरिक्त पानी नहीं",
                    ),
                    asset(
                        "/images/monsoon_rainy_3.png",
                        "Disease-resistant plants",
                        "रोग-प्रतिरोधी पौधे",
                    ),
                    asset("/images/monsoon_rainy_4.jpg", "Root rot check", "जड़ सड़न जांच"),
                ],
            },
        );

        cells.insert(
            (Season::Winter, WeatherCondition::Sunny),
            GuidelineSet {
                practices_en: vec![
                    "Increase irrigation frequency if dry",
                    "Protect from frost with mulching",
                    "Apply balanced fertilizers",
                    "Monitor for cold-related stress",
                ],
                practices_hi: vec![
                    "यदि शुष्क हो तो सिंचाई की आवृत्ति बढ़ाएं",
                    "मल्चिंग के साथ ठंढ से बचाएं",
                    "संतुलित उर्वरकों का प्रयोग करें",
                    "ठंड से संबंधित तनाव की निगरानी करें",
                ],
                assets: vec![
                    asset(
                        "/images/winter_sunny_1.jpg",
                        "Increased irrigation",
                        "बढ़ी हुई सिंचाई",
                    ),
                    asset("/images/winter_sunny_2.jpg", "Frost protection", "ठंढ सुरक्षा"),
                    asset(
                        "/images/monsoon_cloudy_3.jpg",
                        "Balanced fertilizers",
                        "संतुलित उर्वरक",
                    ),
                    asset(
                        "/images/winter_sunny_4.png",
                        "Cold stress monitor",
                        "ठंड तनाव मॉनिटर",
                    ),
                ],
            },
        );

        cells.insert(
            (Season::Winter, WeatherCondition::Cloudy),
            GuidelineSet {
                practices_en: vec![
                    "Maintain moderate irrigation",
                    "Watch for reduced sunlight impact",
                    "Use protective covers if needed",
                    "Check soil temperature",
                ],
                practices_hi: vec![
                    "मध्यम सिंचाई बनाए रखें",
                    "कम धूप के प्रभाव पर नजर रखें",
                    "यदि आवश्यक हो तो सुरक्षात्मक कवर का उपयोग करें",
                    "मिट्टी के तापमान की जांच करें",
                ],
                assets: vec![
                    asset(
                        "/images/summer_cloudy_1.jpeg",
                        "Moderate irrigation",
                        "मध्यम सिंचाई",
                    ),
                    asset("/images/winter_cloudy_2.png", "Sunlight impact", "धूप का प्रभाव"),
                    asset(
                        "/images/winter_cloudy_3.png",
                        "Protective covers",
                        "सुरक्षात्मक कवर",
                    ),
                    asset(
                        "/images/winter_cloudy_4.jpg",
                        "Soil temperature",
                        "मिट्टी का तापमान",
                    ),
                ],
            },
        );

        cells.insert(
            (Season::Winter, WeatherCondition::Rainy),
            GuidelineSet {
                practices_en: vec![
                    "Ensure drainage to prevent waterlogging",
                    "Avoid fertilizer application",
                    "Protect plants from cold rains",
                    "Monitor for fungal growth",
                ],
                practices_hi: vec![
                    "जलभराव से बचने के लिए जल निकासी सुनिश्चित करें",
                    "उर्वरक लगाने से बचें",
                    "ठंडी बारिश से पौधों की रक्षा करें",
                    "फफूंदी विकास की निगरानी करें",
                ],
                assets: vec![
                    asset("/images/summer_rainy_1.jpg", "Drainage setup", "जल निकासी सेटअप"),
                    asset("/images/winter_rainy_2.jpeg", "No fertilizer", "कोई उर्वरक नहीं"),
                    asset(
                        "/images/winter_rainy_3.jpg",
                        "Cold rain protection",
                        "ठंडी बारिश सुरक्षा",
                    ),
                    asset(
                        "/images/winter_rainy_4.png",
                        "Fungal growth check",
                        "फफूंदी विकास जांच",
                    ),
                ],
            },
        );

        let fallback = GuidelineSet {
            practices_en: vec!["No guidelines available."],
            practices_hi: vec!["कोई दिशानिर्देश उपलब्ध नहीं हैं।"],
            assets: vec![
                asset("/fallback-image.jpg", "Fallback image", "बैकअप छवि"),
                asset("/fallback-image2.jpg", "Fallback image", "बैकअप छवि"),
                asset("/fallback-image3.jpeg", "Fallback image", "बैकअप छवि"),
                asset("/fallback-image4.jpg", "Fallback image", "बैकअप छवि"),
            ],
        };

        Self { cells, fallback }
    }
}

impl Default for GuidelineCatalog {
    fn default() -> Self {
        Self::canonical()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_season_condition_pair_is_covered() {
        let catalog = GuidelineCatalog::canonical();
        for season in Season::ALL {
            for condition in [
                WeatherCondition::Sunny,
                WeatherCondition::Cloudy,
                WeatherCondition::Rainy,
            ] {
                let set = catalog.select(season, condition);
                assert_eq!(set.practices_en.len(), 4, "{:?}/{:?}", season, condition);
                assert_eq!(set.practices_hi.len(), set.practices_en.len());
                assert_eq!(set.assets.len(), 4);
            }
        }
    }

    #[test]
    fn language_selects_practice_list() {
        let catalog = GuidelineCatalog::canonical();
        let set = catalog.select(Season::Summer, WeatherCondition::Sunny);
        assert_eq!(
            set.practices(Language::English)[0],
            "Maintain proper irrigation schedule - water every 5-7 days"
        );
        assert_eq!(
            set.practices(Language::Hindi)[0],
            "उचित सिंचाई कार्यक्रम बनाए रखें - हर 5-7 दिनों में पानी दें"
        );
    }

    #[test]
    fn fallback_set_is_placeholder_only() {
        let catalog = GuidelineCatalog::canonical();
        let fallback = catalog.fallback();
        assert_eq!(fallback.practices_en, ["No guidelines available."]);
        assert_eq!(fallback.assets[0].path, "/fallback-image.jpg");
    }

    #[test]
    fn monsoon_rainy_warns_about_root_rot() {
        let catalog = GuidelineCatalog::canonical();
        let set = catalog.select(Season::Monsoon, WeatherCondition::Rainy);
        assert!(set.practices_en.contains(&"Check for root rot"));
    }
}
