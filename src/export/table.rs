//! Flattened tabular export for spreadsheet consumption. Export-only; the
//! backup artifact is the restore channel.
//!
//! Format: UTF-8 with a leading BOM, semicolon delimiter, decimal commas,
//! pt-BR dates and currency, one row per entry in collection order.

use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use std::fs;
use std::path::Path;

use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::utils::formatting::{decimal_comma, money, paid_label};

const BOM: &str = "\u{FEFF}";

pub const TABLE_HEADER: [&str; 8] = [
    "Data",
    "Hora Inicial",
    "Hora Final",
    "Horas Trabalhadas",
    "Descrição",
    "Valor/Hora",
    "Total Ganho",
    "Status Pagamento",
];

/// Render the table body (header + rows, no BOM).
///
/// The description column is always wrapped in literal quotes, so the writer
/// runs with quoting disabled and fields are emitted verbatim.
pub fn render_table(entries: &[TimeEntry]) -> AppResult<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(b';')
        .quote_style(QuoteStyle::Never)
        .from_writer(Vec::new());

    writer
        .write_record(TABLE_HEADER)
        .map_err(|e| AppError::Export(format!("CSV header error: {e}")))?;

    for entry in entries {
        writer
            .write_record(&[
                entry.date.format("%d/%m/%Y").to_string(),
                entry.start_str(),
                entry.end_str(),
                decimal_comma(entry.hours()),
                format!("\"{}\"", entry.description),
                money(entry.hourly_rate.unwrap_or(0.0)),
                money(entry.earnings()),
                paid_label(entry.is_paid).to_string(),
            ])
            .map_err(|e| AppError::Export(format!("CSV row error: {e}")))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

/// Write the table to `path`, BOM first.
pub fn write_table(path: &Path, entries: &[TimeEntry]) -> AppResult<()> {
    let body = render_table(entries)?;
    fs::write(path, format!("{BOM}{body}"))?;
    Ok(())
}

/// Default export filename, export date embedded.
pub fn default_table_name(date: NaiveDate) -> String {
    format!("controle-horas-{}.csv", date.format("%Y-%m-%d"))
}
