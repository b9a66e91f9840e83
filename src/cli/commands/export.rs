use std::path::Path;

use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_written;
use crate::export::table::{default_table_name, write_table};
use crate::models::entry::TimeEntry;
use crate::ui::messages::warning;
use crate::utils::date::{parse_period, today};

/// Export the ledger as a semicolon-delimited table. Rows keep the
/// collection's order; the format is export-only.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, range, force } = cmd {
        let store = open_store(cfg)?;

        let entries: Vec<TimeEntry> = match range {
            None => store.entries().to_vec(),
            Some(r) => {
                let (start, end) = parse_period(r)?;
                store
                    .entries()
                    .iter()
                    .filter(|e| e.date >= start && e.date <= end)
                    .cloned()
                    .collect()
            }
        };

        if entries.is_empty() {
            warning("No entries found for the selected range.");
            return Ok(());
        }

        let path_str = file.clone().unwrap_or_else(|| default_table_name(today()));
        let path = Path::new(&path_str);

        ensure_writable(path, *force)?;
        write_table(path, &entries)?;

        notify_written("CSV table", path);
    }

    Ok(())
}
