use crate::cli::commands::{ask_confirmation, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Remove every stored entry and the settings record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        let mut store = open_store(cfg)?;

        let prompt = format!(
            "Remove ALL {} entries and the settings? This action is irreversible.",
            store.entries().len()
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        store.clear_all()?;
        success("All data removed.");
    }

    Ok(())
}
