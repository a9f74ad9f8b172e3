use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;

/// Ordered candidate field names per semantic role. First match wins, so
/// the order encodes priority. Adjust these when the provider renames
/// fields; the algorithms never need to change.
#[derive(Debug, Clone, Deserialize)]
pub struct FieldCandidates {
    #[serde(default = "default_price_fields")]
    pub price: Vec<String>,
    #[serde(default = "default_location_fields")]
    pub location: Vec<String>,
    #[serde(default = "default_name_fields")]
    pub name: Vec<String>,
    #[serde(default = "default_url_fields")]
    pub url: Vec<String>,
}

impl Default for FieldCandidates {
    fn default() -> Self {
        Self {
            price: default_price_fields(),
            location: default_location_fields(),
            name: default_name_fields(),
            url: default_url_fields(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_token: String,
    #[serde(default = "default_timeout_seconds")]
    pub request_timeout_seconds: u64,
    /// Display cap per category.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
    #[serde(default)]
    pub fields: FieldCandidates,
    #[serde(default = "default_percentages")]
    pub default_percentages: BTreeMap<String, f64>,
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

/// Split applied when a request carries no custom percentages.
pub fn default_percentages() -> BTreeMap<String, f64> {
    BTreeMap::from([
        ("hotels".to_string(), 0.40),
        ("food".to_string(), 0.25),
        ("activities".to_string(), 0.20),
        ("transport".to_string(), 0.15),
    ])
}

fn default_timeout_seconds() -> u64 {
    15
}

fn default_max_suggestions() -> usize {
    3
}

fn default_preview_limit() -> usize {
    3
}

fn default_price_fields() -> Vec<String> {
    strings(&["price", "price_per_night", "min_price", "max_price", "amount", "cost"])
}

fn default_location_fields() -> Vec<String> {
    strings(&["city", "city_name", "region", "location", "destination", "area", "address"])
}

fn default_name_fields() -> Vec<String> {
    strings(&["name", "title", "hotel_name", "activity_name"])
}

fn default_url_fields() -> Vec<String> {
    strings(&["url", "link", "website", "booking_url"])
}

fn strings(keys: &[&str]) -> Vec<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{"api_base_url": "https://example.test/api", "api_token": "t"}"#,
        )
        .unwrap();

        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.fields.price.first().map(String::as_str), Some("price"));
        let sum: f64 = config.default_percentages.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn custom_field_lists_override_defaults() {
        let config: AppConfig = serde_json::from_str(
            r#"{
                "api_base_url": "https://example.test/api",
                "api_token": "t",
                "fields": {"price": ["tariff"]}
            }"#,
        )
        .unwrap();

        assert_eq!(config.fields.price, vec!["tariff".to_string()]);
        // untouched roles keep their defaults
        assert!(config.fields.name.contains(&"title".to_string()));
    }
}
