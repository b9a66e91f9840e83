use crate::cli::commands::{open_store, resolve_id, short_id};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Flip the payment status of one entry. Day-level paid status is derived
/// from its entries; there is no whole-day toggle.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Paid { id } = cmd {
        let mut store = open_store(cfg)?;

        let Some(full_id) = resolve_id(&store, id)? else {
            warning(format!("No entry matches id '{id}'; nothing changed."));
            return Ok(());
        };

        store.toggle_paid(&full_id)?;

        let now_paid = store.find(&full_id).is_some_and(|e| e.is_paid);
        success(format!(
            "Entry {} marked as {}.",
            short_id(&full_id),
            if now_paid { "paid" } else { "unpaid" }
        ));
    }

    Ok(())
}
