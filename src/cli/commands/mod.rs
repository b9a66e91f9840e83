pub mod add;
pub mod backup;
pub mod clear;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod paid;
pub mod restore;
pub mod stats;
pub mod summary;

use std::io::{self, Write};

use crate::config::Config;
use crate::db::storage::SqliteStorage;
use crate::errors::{AppError, AppResult};
use crate::models::entry::TimeEntry;
use crate::store::EntryStore;
use crate::store::backend::StorageBackend;
use crate::ui::messages::warning;
use crate::utils::date::parse_period;

/// Open the store over the configured database, surfacing any non-fatal
/// load warnings before the command runs.
pub(crate) fn open_store(cfg: &Config) -> AppResult<EntryStore<SqliteStorage>> {
    let storage = SqliteStorage::open(&cfg.database)?;
    let store = EntryStore::open(storage);

    for problem in store.load_warnings() {
        warning(format!("{problem}; starting from defaults"));
    }

    Ok(store)
}

/// Resolve a full or prefixed entry id. `Ok(None)` means no match (a soft
/// condition the caller reports); an ambiguous prefix is a hard error.
pub(crate) fn resolve_id<S: StorageBackend>(
    store: &EntryStore<S>,
    given: &str,
) -> AppResult<Option<String>> {
    if store.find(given).is_some() {
        return Ok(Some(given.to_string()));
    }

    let matches: Vec<&TimeEntry> = store
        .entries()
        .iter()
        .filter(|e| e.id.starts_with(given))
        .collect();

    match matches.len() {
        0 => Ok(None),
        1 => Ok(Some(matches[0].id.clone())),
        _ => Err(AppError::AmbiguousId(given.to_string())),
    }
}

/// First block of an id, enough to address an entry unambiguously in
/// everyday use.
pub(crate) fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

/// Ask a yes/no confirmation from the user.
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_ok() {
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

/// Entries falling inside the given period, in collection order.
pub(crate) fn filter_by_period(
    entries: &[TimeEntry],
    period: Option<&String>,
) -> AppResult<Vec<TimeEntry>> {
    let Some(period) = period else {
        return Ok(entries.to_vec());
    };

    let (start, end) = parse_period(period)?;
    Ok(entries
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .cloned()
        .collect())
}
