//! Fixed exchange rates to the base unit (USD).
use crate::core::currency::CurrencyCode;
use crate::core::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    pub code: CurrencyCode,
    pub rate_to_base: f64,
    pub symbol: String,
}

impl RateEntry {
    pub fn new(code: CurrencyCode, rate_to_base: f64, symbol: &str) -> Self {
        RateEntry {
            code,
            rate_to_base,
            symbol: symbol.to_string(),
        }
    }
}

/// A replacement for part of a builtin entry. Unset fields keep the builtin value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateOverride {
    pub code: CurrencyCode,
    #[serde(default)]
    pub rate_to_base: Option<f64>,
    #[serde(default)]
    pub symbol: Option<String>,
}

/// Immutable lookup table from currency code to rate and display symbol.
///
/// Every code in [`CurrencyCode::ALL`] has exactly one entry, all rates are
/// finite and positive, and USD is the base unit with a rate of exactly 1.0.
/// A table that breaks any of these is rejected at construction.
#[derive(Debug, Clone)]
pub struct RateTable {
    entries: HashMap<CurrencyCode, RateEntry>,
}

impl RateTable {
    /// The hardcoded rates shipped with the application.
    pub fn builtin() -> Self {
        let entries = [
            RateEntry::new(CurrencyCode::Usd, 1.0, "$"),
            RateEntry::new(CurrencyCode::Vnd, 1.0 / 23000.0, "đ"),
            RateEntry::new(CurrencyCode::Eur, 1.1, "€"),
            RateEntry::new(CurrencyCode::Jpy, 0.008, "¥"),
            RateEntry::new(CurrencyCode::Krw, 0.00078, "₩"),
        ];
        RateTable {
            entries: entries.into_iter().map(|e| (e.code, e)).collect(),
        }
    }

    pub fn from_entries(entries: Vec<RateEntry>) -> Result<Self> {
        let mut map = HashMap::new();
        for entry in entries {
            if !entry.rate_to_base.is_finite() || entry.rate_to_base <= 0.0 {
                return Err(ConvertError::InvalidRateTable(format!(
                    "rate for {} must be a positive number, got {}",
                    entry.code, entry.rate_to_base
                )));
            }
            if entry.code == CurrencyCode::Usd && entry.rate_to_base != 1.0 {
                return Err(ConvertError::InvalidRateTable(format!(
                    "USD is the base unit and must have rate 1.0, got {}",
                    entry.rate_to_base
                )));
            }
            let code = entry.code;
            if map.insert(code, entry).is_some() {
                return Err(ConvertError::InvalidRateTable(format!(
                    "duplicate entry for {code}"
                )));
            }
        }

        if let Some(missing) = CurrencyCode::ALL.iter().find(|c| !map.contains_key(*c)) {
            return Err(ConvertError::InvalidRateTable(format!(
                "missing entry for {missing}"
            )));
        }

        Ok(RateTable { entries: map })
    }

    /// Builds a new table from the builtin one with the given overrides applied.
    pub fn with_overrides(overrides: &[RateOverride]) -> Result<Self> {
        let mut entries: Vec<RateEntry> = Self::builtin().entries().cloned().collect();
        for o in overrides {
            let entry = entries
                .iter_mut()
                .find(|e| e.code == o.code)
                .ok_or_else(|| ConvertError::UnknownCurrency(o.code.to_string()))?;
            if let Some(rate) = o.rate_to_base {
                debug!("Overriding rate for {}: {} -> {}", o.code, entry.rate_to_base, rate);
                entry.rate_to_base = rate;
            }
            if let Some(symbol) = &o.symbol {
                entry.symbol = symbol.clone();
            }
        }
        Self::from_entries(entries)
    }

    pub fn rate_to_base(&self, code: CurrencyCode) -> Result<f64> {
        self.entries
            .get(&code)
            .map(|e| e.rate_to_base)
            .ok_or_else(|| ConvertError::UnknownCurrency(code.to_string()))
    }

    pub fn symbol(&self, code: CurrencyCode) -> Result<&str> {
        self.entries
            .get(&code)
            .map(|e| e.symbol.as_str())
            .ok_or_else(|| ConvertError::UnknownCurrency(code.to_string()))
    }

    /// Entries in selection order.
    pub fn entries(&self) -> impl Iterator<Item = &RateEntry> {
        CurrencyCode::ALL
            .into_iter()
            .filter_map(move |code| self.entries.get(&code))
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self::builtin()
    }
}
