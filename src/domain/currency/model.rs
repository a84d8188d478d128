//! Currency rates, hotel money settings and conversion

use std::collections::HashMap;

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Normalise a currency code for lookup (`" eur "` → `"EUR"`).
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

/// Rate of one currency against the hotel's base currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    /// Currency code (ISO 4217)
    pub code: String,
    /// Value of one unit of this currency in base units
    pub rate_to_base: Decimal,
    /// Minor-unit digits used when rounding amounts in this currency
    pub decimal_places: u32,
}

impl CurrencyRate {
    pub fn new(code: impl Into<String>, rate_to_base: Decimal, decimal_places: u32) -> Self {
        Self {
            code: normalize_code(&code.into()),
            rate_to_base,
            decimal_places,
        }
    }
}

/// Validated rate table: one entry per code, base currency at rate 1.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    base: String,
    rates: HashMap<String, CurrencyRate>,
}

impl RateTable {
    pub fn new(base: &str, rates: Vec<CurrencyRate>) -> DomainResult<Self> {
        let base = normalize_code(base);
        let mut map = HashMap::with_capacity(rates.len());

        for mut rate in rates {
            rate.code = normalize_code(&rate.code);
            if rate.rate_to_base <= Decimal::ZERO {
                return Err(DomainError::Validation(format!(
                    "rate for {} must be positive",
                    rate.code
                )));
            }
            if rate.code == base && rate.rate_to_base != Decimal::ONE {
                return Err(DomainError::Validation(format!(
                    "base currency {} must have rate 1",
                    base
                )));
            }
            let code = rate.code.clone();
            if map.insert(code.clone(), rate).is_some() {
                return Err(DomainError::Validation(format!(
                    "duplicate rate entry for {}",
                    code
                )));
            }
        }

        if !map.contains_key(&base) {
            return Err(DomainError::Validation(format!(
                "base currency {} has no rate entry",
                base
            )));
        }

        Ok(Self { base, rates: map })
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn get(&self, code: &str) -> DomainResult<&CurrencyRate> {
        let code = normalize_code(code);
        self.rates
            .get(&code)
            .ok_or(DomainError::UnknownCurrency(code))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(&normalize_code(code))
    }

    /// Codes in alphabetical order.
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.rates.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Convert `amount` from one currency into another.
    ///
    /// The product is rounded once, half-up, to the target currency's
    /// decimal places. Converting a currency into itself only rounds.
    pub fn convert(&self, amount: Decimal, from: &str, to: &str) -> DomainResult<Decimal> {
        let from = self.get(from)?;
        let to = self.get(to)?;

        let raw = if from.code == to.code {
            amount
        } else {
            amount * from.rate_to_base / to.rate_to_base
        };

        Ok(round_half_up(raw, to.decimal_places))
    }

    /// Round an amount to the decimal places of `code`.
    pub fn round(&self, amount: Decimal, code: &str) -> DomainResult<Decimal> {
        let rate = self.get(code)?;
        Ok(round_half_up(amount, rate.decimal_places))
    }

    /// Human-readable amount, e.g. `"155.00 USD"`.
    pub fn format_amount(&self, amount: Decimal, code: &str) -> DomainResult<String> {
        let rate = self.get(code)?;
        let rounded = round_half_up(amount, rate.decimal_places);
        Ok(format!(
            "{:.*} {}",
            rate.decimal_places as usize, rounded, rate.code
        ))
    }
}

pub fn round_half_up(value: Decimal, decimal_places: u32) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(decimal_places);
    rounded
}

/// Money configuration owned by the admin module
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelSettings {
    pub base_currency: String,
    pub display_currency: String,
    /// Decimal places shown on revenue summaries
    pub decimal_places: u32,
}

impl Default for HotelSettings {
    fn default() -> Self {
        Self {
            base_currency: "USD".to_string(),
            display_currency: "USD".to_string(),
            decimal_places: 2,
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────
