use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::settings::Settings;
use crate::ui::messages::success;
use crate::utils::formatting::{money, parse_rate};

/// Handle the `config` subcommand.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, rate } = cmd {
        if let Some(raw) = rate {
            let value = parse_rate(raw)?;

            let mut store = open_store(cfg)?;
            store.save_settings(Settings {
                default_hourly_rate: value,
            })?;

            success(format!("Default hourly rate set to {}", money(value)));
        }

        if *print_config {
            let yaml =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("Current configuration:\n");
            print!("{yaml}");

            let store = open_store(cfg)?;
            println!(
                "default_hourly_rate: {}",
                store.settings().default_hourly_rate
            );
        }
    }

    Ok(())
}
