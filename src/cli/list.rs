use super::ui;
use crate::core::currency::CurrencyCode;
use crate::core::engine::{ConversionEngine, format_amount};
use anyhow::Result;
use comfy_table::Cell;
use std::io::Write;

/// Prints every supported currency with its symbol and rate, plus the value
/// of one unit of `quote` in each.
pub fn run<W: Write>(engine: &ConversionEngine, quote: CurrencyCode, out: &mut W) -> Result<()> {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Symbol"),
        ui::header_cell("Rate to USD"),
        ui::header_cell(&format!("1 {quote} =")),
    ]);

    for entry in engine.table().entries() {
        let per_quote = engine.pairwise_rate(quote, entry.code)?;
        table.add_row(vec![
            Cell::new(entry.code.to_string()),
            Cell::new(&entry.symbol),
            ui::number_cell(format!("{}", entry.rate_to_base)),
            ui::number_cell(format_amount(per_quote)),
        ]);
    }

    writeln!(
        out,
        "{}\n",
        ui::style_text("Supported currencies", ui::StyleType::Title)
    )?;
    writeln!(out, "{table}")?;
    Ok(())
}
