use std::path::Path;

use crate::cli::commands::{ask_confirmation, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::backup::read_backup;
use crate::ui::messages::{info, success};

/// Replace the whole ledger with the contents of a backup artifact.
/// All-or-nothing: a malformed artifact leaves current state untouched.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Restore { file, yes } = cmd {
        let (entries, settings) = read_backup(Path::new(file))?;

        let mut store = open_store(cfg)?;

        let prompt = format!(
            "Replace {} stored entries with {} from '{}'?",
            store.entries().len(),
            entries.len(),
            file
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Restore cancelled.");
            return Ok(());
        }

        let restored = entries.len();
        let has_settings = settings.is_some();
        store.adopt_snapshot(entries, settings)?;

        success(format!("Restored {restored} entries."));
        if has_settings {
            info("Settings restored from the artifact.");
        }
    }

    Ok(())
}
