use crate::cli::commands::{filter_by_period, open_store, short_id};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::TimeEntry;
use crate::ui::messages::info;
use crate::utils::formatting::{decimal_comma, money};
use crate::utils::table::Table;

const DESCRIPTION_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        paid,
        unpaid,
    } = cmd
    {
        let store = open_store(cfg)?;
        let mut entries = filter_by_period(store.entries(), period.as_ref())?;

        if *paid {
            entries.retain(|e| e.is_paid);
        } else if *unpaid {
            entries.retain(|e| !e.is_paid);
        }

        if entries.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        entries.sort_by(|a, b| (a.date, a.start_time).cmp(&(b.date, b.start_time)));

        print!("{}", render_entries(&entries));
        println!("{} entries", entries.len());
    }

    Ok(())
}

fn render_entries(entries: &[TimeEntry]) -> String {
    let mut table = Table::new(&[
        "Id", "Date", "Start", "End", "Hours", "Description", "Rate", "Earnings", "Status",
    ]);

    for entry in entries {
        let lines = textwrap::wrap(&entry.description, DESCRIPTION_WIDTH);
        let first = lines
            .first()
            .map(|l| l.to_string())
            .unwrap_or_default();

        table.add_row(vec![
            short_id(&entry.id).to_string(),
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            decimal_comma(entry.hours()),
            first,
            money(entry.hourly_rate.unwrap_or(0.0)),
            money(entry.earnings()),
            if entry.is_paid { "paid" } else { "unpaid" }.to_string(),
        ]);

        for line in lines.iter().skip(1) {
            table.add_row(vec![
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                String::new(),
                line.to_string(),
                String::new(),
                String::new(),
                String::new(),
            ]);
        }
    }

    table.render()
}
