//! Conversion arithmetic over a [`RateTable`].
//!
//! Every conversion goes through the base unit: one lookup for the source,
//! one for the target. The table stays linear in the number of currencies
//! while any pair can be converted.
use crate::core::currency::CurrencyCode;
use crate::core::error::Result;
use crate::core::rates::RateTable;
use serde::Serialize;
use tracing::debug;

/// Decimal places used when presenting amounts and rates.
pub const DISPLAY_PRECISION: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: CurrencyCode,
    pub to: CurrencyCode,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConversionResult {
    pub converted_amount: f64,
    pub pairwise_rate: f64,
}

#[derive(Debug, Clone, Default)]
pub struct ConversionEngine {
    table: RateTable,
}

impl ConversionEngine {
    pub fn new(table: RateTable) -> Self {
        ConversionEngine { table }
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Converts `amount` of `from` into `to`. No rounding is applied.
    pub fn convert(&self, amount: f64, from: CurrencyCode, to: CurrencyCode) -> Result<f64> {
        let from_rate = self.table.rate_to_base(from)?;
        let to_rate = self.table.rate_to_base(to)?;
        let converted = amount * (from_rate / to_rate);
        debug!("Converted {amount} {from} to {to}: {converted}");
        Ok(converted)
    }

    /// Value of one unit of `from` expressed in `to`.
    pub fn pairwise_rate(&self, from: CurrencyCode, to: CurrencyCode) -> Result<f64> {
        if from == to {
            return Ok(1.0);
        }
        self.convert(1.0, from, to)
    }

    /// Formats the exchange rate line, e.g. `1 USD = 23000.0000 VND`.
    pub fn display_rate(&self, from: CurrencyCode, to: CurrencyCode) -> Result<String> {
        if from == to {
            return Ok(format!("1 {from} = 1 {to}"));
        }
        let rate = self.pairwise_rate(from, to)?;
        Ok(format!("1 {from} = {} {to}", format_amount(rate)))
    }

    pub fn execute(&self, request: &ConversionRequest) -> Result<ConversionResult> {
        Ok(ConversionResult {
            converted_amount: self.convert(request.amount, request.from, request.to)?,
            pairwise_rate: self.pairwise_rate(request.from, request.to)?,
        })
    }
}

pub fn format_amount(value: f64) -> String {
    format!("{value:.prec$}", prec = DISPLAY_PRECISION)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::currency::CurrencyCode::*;

    fn engine() -> ConversionEngine {
        ConversionEngine::new(RateTable::builtin())
    }

    fn assert_close(actual: f64, expected: f64) {
        let tolerance = 1e-9 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_usd_to_vnd() {
        let result = engine().convert(100.0, Usd, Vnd).unwrap();
        assert_close(result, 2_300_000.0);
        assert_eq!(format_amount(result), "2300000.0000");
    }

    #[test]
    fn test_vnd_to_usd() {
        let result = engine().convert(1000.0, Vnd, Usd).unwrap();
        assert_close(result, 1000.0 / 23000.0);
        assert_eq!(format_amount(result), "0.0435");
    }

    #[test]
    fn test_eur_to_jpy() {
        let result = engine().convert(50.0, Eur, Jpy).unwrap();
        assert_close(result, 6875.0);
        assert_eq!(format_amount(result), "6875.0000");
    }

    #[test]
    fn test_pairwise_usd_eur() {
        let rate = engine().pairwise_rate(Usd, Eur).unwrap();
        assert_close(rate, 1.0 / 1.1);
        assert_eq!(format_amount(rate), "0.9091");
    }

    #[test]
    fn test_same_currency_is_identity() {
        let engine = engine();
        assert_eq!(engine.convert(10.0, Krw, Krw), Ok(10.0));
        for code in CurrencyCode::ALL {
            for amount in [0.0, 0.5, 1.0, 1234.5678, 1e12] {
                assert_eq!(engine.convert(amount, code, code), Ok(amount));
            }
            assert_eq!(engine.pairwise_rate(code, code), Ok(1.0));
        }
    }

    #[test]
    fn test_conversion_is_consistent_with_inverse() {
        let engine = engine();
        for a in CurrencyCode::ALL {
            for b in CurrencyCode::ALL {
                let x = 250.0;
                let forward = engine.convert(x, a, b).unwrap();
                let inverse_unit = engine.convert(1.0, b, a).unwrap();
                assert_close(forward, x / inverse_unit);
            }
        }
    }

    #[test]
    fn test_pairwise_rates_are_reciprocal() {
        let engine = engine();
        for a in CurrencyCode::ALL {
            for b in CurrencyCode::ALL.into_iter().filter(|b| *b != a) {
                let product =
                    engine.pairwise_rate(a, b).unwrap() * engine.pairwise_rate(b, a).unwrap();
                assert_close(product, 1.0);
            }
        }
    }

    #[test]
    fn test_display_rate() {
        let engine = engine();
        assert_eq!(engine.display_rate(Usd, Usd).unwrap(), "1 USD = 1 USD");
        assert_eq!(
            engine.display_rate(Usd, Vnd).unwrap(),
            "1 USD = 23000.0000 VND"
        );
        assert_eq!(engine.display_rate(Usd, Eur).unwrap(), "1 USD = 0.9091 EUR");
        assert_eq!(engine.display_rate(Eur, Usd).unwrap(), "1 EUR = 1.1000 USD");
    }

    #[test]
    fn test_execute_request() {
        let result = engine()
            .execute(&ConversionRequest {
                amount: 50.0,
                from: Eur,
                to: Jpy,
            })
            .unwrap();
        assert_close(result.converted_amount, 6875.0);
        assert_close(result.pairwise_rate, 137.5);
    }

    #[test]
    fn test_engine_uses_injected_table() {
        use crate::core::rates::RateOverride;

        let table = RateTable::with_overrides(&[RateOverride {
            code: Eur,
            rate_to_base: Some(2.0),
            symbol: None,
        }])
        .unwrap();
        let engine = ConversionEngine::new(table);
        assert_eq!(engine.convert(3.0, Eur, Usd), Ok(6.0));
        assert_eq!(engine.display_rate(Usd, Eur).unwrap(), "1 USD = 0.5000 EUR");
    }
}
