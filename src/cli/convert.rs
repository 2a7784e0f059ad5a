use super::ui;
use crate::core::currency::CurrencyCode;
use crate::core::engine::{ConversionEngine, ConversionRequest, format_amount};
use crate::core::input::parse_amount;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Serialize)]
struct ConversionReport<'a> {
    amount: f64,
    from: CurrencyCode,
    to: CurrencyCode,
    converted_amount: f64,
    pairwise_rate: f64,
    formatted: &'a str,
    rate_text: &'a str,
}

/// Converts `amount_text` and prints the result followed by the rate line.
pub fn run<W: Write>(
    engine: &ConversionEngine,
    amount_text: &str,
    from: CurrencyCode,
    to: CurrencyCode,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let amount = parse_amount(Some(amount_text))?;
    let request = ConversionRequest { amount, from, to };
    debug!(?request, "Running conversion");

    let result = engine.execute(&request)?;
    let formatted = format_amount(result.converted_amount);
    let rate_text = engine.display_rate(from, to)?;

    if json {
        let report = ConversionReport {
            amount,
            from,
            to,
            converted_amount: result.converted_amount,
            pairwise_rate: result.pairwise_rate,
            formatted: &formatted,
            rate_text: &rate_text,
        };
        let body =
            serde_json::to_string_pretty(&report).context("Failed to serialize conversion")?;
        writeln!(out, "{body}")?;
        return Ok(());
    }

    let table = engine.table();
    writeln!(
        out,
        "{}{} {} = {}{} {}",
        table.symbol(from)?,
        format_amount(amount),
        from,
        table.symbol(to)?,
        ui::style_text(&formatted, ui::StyleType::Result),
        to
    )?;
    writeln!(out, "{}", ui::style_text(&rate_text, ui::StyleType::Subtle))?;
    Ok(())
}

/// Prints only the exchange rate line for a pair.
pub fn run_rate<W: Write>(
    engine: &ConversionEngine,
    from: CurrencyCode,
    to: CurrencyCode,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "{}", engine.display_rate(from, to)?)?;
    Ok(())
}
