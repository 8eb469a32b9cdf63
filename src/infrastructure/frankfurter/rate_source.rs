//! Frankfurter Rate Source
//!
//! Adapter for the free Frankfurter exchange-rate API. One request covers a
//! whole calendar-date range:
//!
//! `GET {base_url}/{start}..{end}?from=USD&to=KRW`
//!
//! The response maps each trading day to the quote-currency rate; weekends
//! and bank holidays are simply absent.

use crate::domain::ports::{DateRange, RateSource};
use crate::domain::rates::rate_point::RatePoint;
use crate::infrastructure::http_client::HttpClientFactory;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest_middleware::ClientWithMiddleware;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

pub struct FrankfurterRateSource {
    client: ClientWithMiddleware,
    base_url: String,
    base_currency: String,
    quote_currency: String,
}

impl FrankfurterRateSource {
    pub fn builder() -> FrankfurterRateSourceBuilder {
        FrankfurterRateSourceBuilder::default()
    }

    /// The pair this source serves, e.g. `"USD/KRW"`
    pub fn pair_label(&self) -> String {
        format!("{}/{}", self.base_currency, self.quote_currency)
    }
}

#[derive(Default)]
pub struct FrankfurterRateSourceBuilder {
    base_url: Option<String>,
    base_currency: Option<String>,
    quote_currency: Option<String>,
}

impl FrankfurterRateSourceBuilder {
    pub fn base_url(mut self, base_url: String) -> Self {
        self.base_url = Some(base_url);
        self
    }

    pub fn base_currency(mut self, base_currency: String) -> Self {
        self.base_currency = Some(base_currency);
        self
    }

    pub fn quote_currency(mut self, quote_currency: String) -> Self {
        self.quote_currency = Some(quote_currency);
        self
    }

    pub fn build(self) -> FrankfurterRateSource {
        FrankfurterRateSource {
            client: HttpClientFactory::create_client(),
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            base_currency: self.base_currency.unwrap_or_else(|| "USD".to_string()),
            quote_currency: self.quote_currency.unwrap_or_else(|| "KRW".to_string()),
        }
    }
}

#[async_trait]
impl RateSource for FrankfurterRateSource {
    async fn fetch_rates(&self, range: DateRange) -> Result<Vec<RatePoint>> {
        let url = format!("{}/{}..{}", self.base_url, range.start, range.end);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("from", self.base_currency.as_str()),
                ("to", self.quote_currency.as_str()),
            ])
            .send()
            .await
            .context("Failed to fetch rate history from Frankfurter")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!(
                "Frankfurter rate fetch failed ({}): {}",
                status,
                api_error_message(&body).unwrap_or(body)
            );
        }

        let body = response
            .text()
            .await
            .context("Failed to read Frankfurter response body")?;
        let points = parse_rate_history(&body, &self.quote_currency)?;

        info!(
            pair = %self.pair_label(),
            start = %range.start,
            end = %range.end,
            points = points.len(),
            "Fetched rate history"
        );
        Ok(points)
    }
}

#[derive(Debug, Deserialize)]
struct RateHistory {
    // BTreeMap keyed by date gives the ascending order the aggregator
    // requires, regardless of JSON object order
    rates: BTreeMap<NaiveDate, HashMap<String, f64>>,
}

/// Parses a Frankfurter history payload into an ascending daily series.
///
/// Days missing the quote currency, or carrying a non-finite value, are
/// skipped; a payload without a `rates` field is an error.
pub fn parse_rate_history(payload: &str, quote_currency: &str) -> Result<Vec<RatePoint>> {
    let history: RateHistory =
        serde_json::from_str(payload).context("Failed to parse Frankfurter rate history")?;

    let points = history
        .rates
        .into_iter()
        .filter_map(|(date, quotes)| {
            let value = match quotes.get(quote_currency) {
                Some(v) if v.is_finite() => *v,
                _ => {
                    debug!(%date, quote_currency, "Skipping day without a usable rate");
                    return None;
                }
            };
            let value = Decimal::from_f64_retain(value)?;
            Some(RatePoint::new(date.format("%Y-%m-%d").to_string(), value))
        })
        .collect();

    Ok(points)
}

/// Pulls the API's own `message` field out of an error body, if it has one
fn api_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ApiError {
        message: String,
    }
    serde_json::from_str::<ApiError>(body).ok().map(|e| e.message)
}
