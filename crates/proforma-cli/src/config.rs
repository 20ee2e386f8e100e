//! CLI preferences for currency presentation and report labelling.

use std::env;

use proforma_domain::ReportPeriod;
use serde::{Deserialize, Serialize};

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    pub currency: String,
    #[serde(default = "CliConfig::default_precision")]
    pub precision: u8,
    #[serde(default)]
    pub period: ReportPeriod,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            precision: Self::default_precision(),
            period: ReportPeriod::default(),
        }
    }
}

impl CliConfig {
    pub fn default_precision() -> u8 {
        2
    }

    /// Builds a config from defaults plus `PROFORMA_CURRENCY` /
    /// `PROFORMA_PRECISION` environment overrides.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(currency) = env::var("PROFORMA_CURRENCY") {
            let trimmed = currency.trim();
            if !trimmed.is_empty() {
                config.currency = trimmed.to_uppercase();
            }
        }
        if let Ok(precision) = env::var("PROFORMA_PRECISION") {
            if let Ok(value) = precision.trim().parse::<u8>() {
                config.precision = value.min(4);
            }
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::CliConfig;
    use proforma_domain::ReportPeriod;

    #[test]
    fn defaults_match_the_report_conventions() {
        let config = CliConfig::default();
        assert_eq!(config.currency, "USD");
        assert_eq!(config.precision, 2);
        assert_eq!(config.period, ReportPeriod::Monthly);
    }
}
