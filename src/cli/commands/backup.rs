use std::path::Path;

use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::backup::{default_backup_name, write_backup};
use crate::export::fs_utils::ensure_writable;
use crate::export::notify_written;
use crate::utils::date::today;

/// Write the full-fidelity backup artifact (entries + settings).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let store = open_store(cfg)?;

        let path_str = file.clone().unwrap_or_else(|| default_backup_name(today()));
        let path = Path::new(&path_str);

        ensure_writable(path, false)?;
        let final_path = write_backup(path, store.entries(), store.settings(), *compress)?;

        notify_written("Backup", &final_path);
    }

    Ok(())
}
