use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::aggregate::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RESET, YELLOW};
use crate::utils::formatting::money;

/// Global aggregates over the whole ledger.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;
    let s = stats(store.entries());

    println!();
    println!("{CYAN}• Total hours:{RESET}    {:.2}", s.total_hours);
    println!("{CYAN}• Total earnings:{RESET} {}", money(s.total_earnings));
    println!(
        "{CYAN}• Paid:{RESET}           {GREEN}{:.2}h / {}{RESET}",
        s.paid_hours,
        money(s.paid_earnings)
    );
    println!(
        "{CYAN}• Unpaid:{RESET}         {YELLOW}{:.2}h / {}{RESET}",
        s.unpaid_hours,
        money(s.unpaid_earnings)
    );
    println!("{CYAN}• Days worked:{RESET}    {}", s.days_worked);
    println!(
        "{CYAN}• Average/day:{RESET}    {:.2}h",
        s.average_hours_per_day
    );
    println!();

    Ok(())
}
