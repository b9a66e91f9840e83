use crate::cli::commands::{open_store, short_id};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::entry::EntryDraft;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::formatting::{decimal_comma, parse_rate};
use crate::utils::time::parse_required_time;

/// Record a work session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        description,
        rate,
        paid,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.clone()))?;
        let start_time = parse_required_time(start)?;
        let end_time = parse_required_time(end)?;

        if description.trim().is_empty() {
            return Err(AppError::EmptyDescription);
        }

        let hourly_rate = match rate {
            Some(raw) => Some(parse_rate(raw)?),
            None => None,
        };

        // The arithmetic layer reads equal times as a full day; almost
        // always a typo, so flag it but record what was asked.
        if start_time == end_time {
            warning("Start and end are equal; this records a 24-hour session.");
        }

        let mut store = open_store(cfg)?;
        let entry = store.add(EntryDraft {
            date: d,
            start_time,
            end_time,
            description: description.clone(),
            is_paid: *paid,
            hourly_rate,
        })?;

        success(format!(
            "Recorded {}h on {} (id {})",
            decimal_comma(entry.hours()),
            entry.date_str(),
            short_id(&entry.id)
        ));
    }

    Ok(())
}
