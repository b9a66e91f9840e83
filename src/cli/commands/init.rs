use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::storage::SqliteStorage;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command: create the config directory, the config file
/// (skipped in test mode), and the storage database with its schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.as_deref(), cli.test)?;

    // Opening creates the file and the key-value schema.
    SqliteStorage::open(&db_path.to_string_lossy())?;

    if !cli.test {
        success(format!("Config file: {}", Config::config_file().display()));
    }
    success(format!("Storage:     {}", db_path.display()));

    Ok(())
}
