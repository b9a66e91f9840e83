use crate::cli::commands::{open_store, resolve_id, short_id};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::entry::EntryPatch;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::formatting::parse_rate;
use crate::utils::time::parse_optional_time;

/// Merge the given fields into an existing entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        start,
        end,
        description,
        rate,
        paid,
        unpaid,
    } = cmd
    {
        let mut patch = EntryPatch::default();

        if let Some(raw) = date {
            let d = date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?;
            patch.date = Some(d);
        }
        patch.start_time = parse_optional_time(start.as_ref())?;
        patch.end_time = parse_optional_time(end.as_ref())?;

        if let Some(desc) = description {
            if desc.trim().is_empty() {
                return Err(AppError::EmptyDescription);
            }
            patch.description = Some(desc.clone());
        }
        if let Some(raw) = rate {
            patch.hourly_rate = Some(parse_rate(raw)?);
        }
        if *paid {
            patch.is_paid = Some(true);
        } else if *unpaid {
            patch.is_paid = Some(false);
        }

        let mut store = open_store(cfg)?;
        match resolve_id(&store, id)? {
            Some(full_id) => {
                store.update(&full_id, patch)?;
                success(format!("Entry {} updated.", short_id(&full_id)));
            }
            None => warning(format!("No entry matches id '{id}'; nothing changed.")),
        }
    }

    Ok(())
}
