use crate::cli::commands::{ask_confirmation, open_store, resolve_id, short_id};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = open_store(cfg)?;

        let Some(full_id) = resolve_id(&store, id)? else {
            warning(format!("No entry matches id '{id}'; nothing deleted."));
            return Ok(());
        };

        let label = store
            .find(&full_id)
            .map(|e| format!("{} on {}", e.description, e.date_str()))
            .unwrap_or_else(|| full_id.clone());

        let prompt = format!("Delete '{label}'? This action is irreversible.");
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        store.delete(&full_id)?;
        success(format!("Entry {} deleted.", short_id(&full_id)));
    }

    Ok(())
}
