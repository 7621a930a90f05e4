//! Application configuration loaded from environment variables.

use std::path::PathBuf;

/// Storefront configuration with sensible defaults.
///
/// Reads from environment variables:
/// - `STOREFRONT_TAX_RATE_BPS`: tax on the cart subtotal in basis points (default: `500`, i.e. 5%)
/// - `STOREFRONT_CURRENCY`: symbol shown before prices (default: `"₹"`)
/// - `STOREFRONT_LOW_STOCK_THRESHOLD`: stock below which an item is flagged (default: `5`)
/// - `STOREFRONT_CATALOG`: path to a JSON menu replacing the built-in one (default: unset)
/// - `STOREFRONT_LOG_JSON`: emit logs as JSON when `1` or `true` (default: off)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub tax_rate_bps: u32,
    pub currency: String,
    pub low_stock_threshold: u32,
    pub catalog_path: Option<PathBuf>,
    pub log_json: bool,
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration from an arbitrary key lookup.
    ///
    /// Unparseable numbers fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            tax_rate_bps: lookup("STOREFRONT_TAX_RATE_BPS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.tax_rate_bps),
            currency: lookup("STOREFRONT_CURRENCY").unwrap_or(defaults.currency),
            low_stock_threshold: lookup("STOREFRONT_LOW_STOCK_THRESHOLD")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.low_stock_threshold),
            catalog_path: lookup("STOREFRONT_CATALOG")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            log_json: lookup("STOREFRONT_LOG_JSON")
                .is_some_and(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true")),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tax_rate_bps: 500,
            currency: "₹".to_string(),
            low_stock_threshold: 5,
            catalog_path: None,
            log_json: false,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.tax_rate_bps, 500);
        assert_eq!(config.currency, "₹");
        assert_eq!(config.low_stock_threshold, 5);
        assert!(config.catalog_path.is_none());
        assert!(!config.log_json);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_lookup_gives_defaults() {
        assert_eq!(Config::from_lookup(|_| None), Config::default());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("STOREFRONT_TAX_RATE_BPS", "1800"),
            ("STOREFRONT_CURRENCY", "$"),
            ("STOREFRONT_LOW_STOCK_THRESHOLD", "10"),
            ("STOREFRONT_CATALOG", "/srv/menu.json"),
            ("STOREFRONT_LOG_JSON", "TRUE"),
            ("RUST_LOG", "debug"),
        ]));

        assert_eq!(config.tax_rate_bps, 1800);
        assert_eq!(config.currency, "$");
        assert_eq!(config.low_stock_threshold, 10);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/srv/menu.json")));
        assert!(config.log_json);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("STOREFRONT_TAX_RATE_BPS", "five percent"),
            ("STOREFRONT_LOW_STOCK_THRESHOLD", "-1"),
            ("STOREFRONT_LOG_JSON", "yes please"),
        ]));

        assert_eq!(config.tax_rate_bps, 500);
        assert_eq!(config.low_stock_threshold, 5);
        assert!(!config.log_json);
    }
}
