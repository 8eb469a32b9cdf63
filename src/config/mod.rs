//! Configuration module for ratewatch.
//!
//! Everything is optional and env-driven; unset variables fall back to the
//! public Frankfurter endpoint serving USD/KRW.

use std::env;

/// Rate source configuration
#[derive(Debug, Clone)]
pub struct RateSourceConfig {
    pub base_url: String,
    pub base_currency: String,
    pub quote_currency: String,
}

impl RateSourceConfig {
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("RATEWATCH_BASE_URL")
                .unwrap_or_else(|_| "https://api.frankfurter.app".to_string()),
            base_currency: env::var("RATEWATCH_BASE_CURRENCY")
                .unwrap_or_else(|_| "USD".to_string()),
            quote_currency: env::var("RATEWATCH_QUOTE_CURRENCY")
                .unwrap_or_else(|_| "KRW".to_string()),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub rate_source: RateSourceConfig,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            rate_source: RateSourceConfig::from_env(),
        }
    }
}
