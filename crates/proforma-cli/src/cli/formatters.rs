//! Formatter implementations backed by the active CLI configuration.

use proforma_core::format::{format_grouped, symbol_for, CurrencyFormatter};

use crate::config::CliConfig;

/// Currency formatter driven by the shell's configuration.
#[derive(Clone)]
pub struct CliFormatters {
    currency: String,
    precision: u8,
}

impl CliFormatters {
    pub fn new(config: &CliConfig) -> Self {
        Self {
            currency: config.currency.clone(),
            precision: config.precision,
        }
    }
}

impl CurrencyFormatter for CliFormatters {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let code = if currency.is_empty() {
            self.currency.as_str()
        } else {
            currency
        };
        format!("{}{}", symbol_for(code), format_grouped(amount, self.precision))
    }
}
