//! # Currency Rates
//!
//! Currency catalog, exchange-rate tables, and the rate-provider boundary.
//!
//! Live rates come from the open.er-api.com free tier, which accepts any
//! base currency. Transport failures are expected and recoverable: callers
//! use [`rates_or_fallback`] to degrade to a static table of ~12 currencies
//! anchored to USD, rebased by dividing through the requested base's own
//! fallback rate.
//!
//! The conversion itself is `amount * rate(to)` against whichever table is
//! in hand; the table records its [`RateSource`] so front-ends can tell the
//! user when rates are not live.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{FetchError, ToolError, ToolResult};

/// Rate provider endpoint; the base currency is appended.
const RATE_ENDPOINT: &str = "https://open.er-api.com/v6/latest";

/// One catalog currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    /// 3-letter ISO-like code
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

/// Currencies offered in selection UI, in display order.
pub static COMMON_CURRENCIES: &[Currency] = &[
    Currency { code: "USD", name: "US Dollar", symbol: "$" },
    Currency { code: "EUR", name: "Euro", symbol: "€" },
    Currency { code: "GBP", name: "British Pound", symbol: "£" },
    Currency { code: "JPY", name: "Japanese Yen", symbol: "¥" },
    Currency { code: "AUD", name: "Australian Dollar", symbol: "A$" },
    Currency { code: "CAD", name: "Canadian Dollar", symbol: "C$" },
    Currency { code: "CHF", name: "Swiss Franc", symbol: "CHF" },
    Currency { code: "CNY", name: "Chinese Yuan", symbol: "¥" },
    Currency { code: "INR", name: "Indian Rupee", symbol: "₹" },
    Currency { code: "RUB", name: "Russian Ruble", symbol: "₽" },
    Currency { code: "SGD", name: "Singapore Dollar", symbol: "S$" },
    Currency { code: "ZAR", name: "South African Rand", symbol: "R" },
];

/// Look up a catalog currency by code.
pub fn currency(code: &str) -> Option<&'static Currency> {
    COMMON_CURRENCIES.iter().find(|c| c.code == code)
}

/// Display symbol for a code, falling back to the code itself.
pub fn symbol_for(code: &str) -> &str {
    match currency(code) {
        Some(c) => c.symbol,
        None => code,
    }
}

/// Static fallback rates, expressed relative to USD.
static FALLBACK_USD_RATES: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        ("USD", 1.0),
        ("EUR", 0.92),
        ("GBP", 0.79),
        ("JPY", 151.21),
        ("AUD", 1.52),
        ("CAD", 1.37),
        ("CHF", 0.90),
        ("CNY", 7.25),
        ("INR", 83.26),
        ("RUB", 92.65),
        ("SGD", 1.35),
        ("ZAR", 18.60),
    ])
});

/// Where a rate table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateSource {
    /// Fetched from the rate provider
    Live,
    /// Built from the static fallback table
    Fallback,
}

/// An exchange-rate table for one base currency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTable {
    /// Base currency code all rates are relative to
    pub base: String,

    /// code -> units of that currency per one unit of base
    pub rates: HashMap<String, f64>,

    /// Unix timestamp of the rate snapshot
    pub timestamp_secs: u64,

    pub source: RateSource,
}

impl RateTable {
    /// Build a table from the static fallback rates, rebased to `base`.
    ///
    /// Fails with `CurrencyNotFound` when the base is not in the fallback
    /// table.
    pub fn fallback(base: &str) -> ToolResult<RateTable> {
        let base_rate = *FALLBACK_USD_RATES
            .get(base)
            .ok_or_else(|| ToolError::currency_not_found(base))?;

        let rates = FALLBACK_USD_RATES
            .iter()
            .map(|(code, usd_rate)| ((*code).to_string(), usd_rate / base_rate))
            .collect();

        Ok(RateTable {
            base: base.to_string(),
            rates,
            timestamp_secs: now_secs(),
            source: RateSource::Fallback,
        })
    }

    /// Rate for one unit of base in the given currency.
    pub fn rate(&self, code: &str) -> ToolResult<f64> {
        self.rates
            .get(code)
            .copied()
            .ok_or_else(|| ToolError::currency_not_found(code))
    }

    /// Convert an amount of the base currency into `to`.
    pub fn convert(&self, amount: f64, to: &str) -> ToolResult<f64> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(ToolError::invalid_input(
                "amount",
                amount.to_string(),
                "Amount must be a non-negative number",
            ));
        }
        Ok(amount * self.rate(to)?)
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Wire shape of the rate provider response.
#[derive(Debug, Deserialize)]
struct RatesResponse {
    base_code: String,
    rates: HashMap<String, f64>,
    time_last_update_unix: u64,
}

/// Fetch live rates for a base currency.
///
/// Transport and decode failures come back as [`FetchError`]; use
/// [`rates_or_fallback`] when degraded rates are acceptable.
pub fn fetch_rates(base: &str) -> Result<RateTable, FetchError> {
    let url = format!("{}/{}", RATE_ENDPOINT, base);

    let response = reqwest::blocking::get(&url)
        .and_then(|r| r.error_for_status())
        .map_err(|e| FetchError::new("currency rates", e.to_string()))?;

    let body: RatesResponse = response
        .json()
        .map_err(|e| FetchError::new("currency rates", e.to_string()))?;

    Ok(RateTable {
        base: body.base_code,
        rates: body.rates,
        timestamp_secs: body.time_last_update_unix,
        source: RateSource::Live,
    })
}

/// Live rates when the provider is reachable, static fallback otherwise.
pub fn rates_or_fallback(base: &str) -> ToolResult<RateTable> {
    match fetch_rates(base) {
        Ok(table) => Ok(table),
        Err(_) => RateTable::fallback(base),
    }
}
