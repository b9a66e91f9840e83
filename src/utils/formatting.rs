//! Number and label formatting shared by the CLI and the tabular export.

use crate::errors::{AppError, AppResult};

/// Shortest decimal representation with a comma separator: `8` stays `8`,
/// `7.5` becomes `7,5`.
pub fn decimal_comma(value: f64) -> String {
    format!("{value}").replace('.', ",")
}

/// Currency with two decimals and a comma separator, e.g. `R$ 50,00`.
pub fn money(value: f64) -> String {
    format!("R$ {value:.2}").replace('.', ",")
}

pub fn paid_label(is_paid: bool) -> &'static str {
    if is_paid { "Pago" } else { "Pendente" }
}

/// Parse an hourly rate from CLI input, accepting either decimal separator.
/// Rates must be positive.
pub fn parse_rate(input: &str) -> AppResult<f64> {
    let normalized = input.trim().replace(',', ".");
    let value: f64 = normalized
        .parse()
        .map_err(|_| AppError::InvalidRate(input.to_string()))?;

    if !value.is_finite() || value <= 0.0 {
        return Err(AppError::InvalidRate(input.to_string()));
    }
    Ok(value)
}
