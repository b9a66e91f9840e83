use crate::cli::commands::{filter_by_period, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::daily_summaries;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::formatting::{decimal_comma, money};
use crate::utils::table::Table;

/// Per-day aggregates, newest day first. A day shows as paid only when all
/// of its entries are paid.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period } = cmd {
        let store = open_store(cfg)?;
        let entries = filter_by_period(store.entries(), period.as_ref())?;
        let summaries = daily_summaries(&entries);

        if summaries.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        let mut table = Table::new(&["Date", "Hours", "Earnings", "Entries", "Status"]);
        for day in &summaries {
            table.add_row(vec![
                day.date.format("%Y-%m-%d").to_string(),
                decimal_comma(day.total_hours),
                money(day.total_earnings),
                day.entries_count.to_string(),
                if day.is_paid { "paid" } else { "open" }.to_string(),
            ]);
        }

        print!("{}", table.render());
        println!("{} days", summaries.len());
    }

    Ok(())
}
