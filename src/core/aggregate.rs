//! Derived views over an entry snapshot: per-day summaries and global stats.
//!
//! Pure functions of the input slice; nothing here touches storage and every
//! call recomputes from scratch.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::core::hours::round2;
use crate::models::entry::TimeEntry;
use crate::models::summary::{DailySummary, TimesheetStats};

/// Group entries by date and aggregate each group, newest date first.
///
/// A day counts as paid only when every one of its entries is paid.
/// Totals are rounded once, on the final accumulated values.
pub fn daily_summaries(entries: &[TimeEntry]) -> Vec<DailySummary> {
    let mut days: BTreeMap<NaiveDate, DailySummary> = BTreeMap::new();

    for entry in entries {
        let hours = entry.hours();
        let earnings = entry.earnings();

        let day = days.entry(entry.date).or_insert_with(|| DailySummary {
            date: entry.date,
            total_hours: 0.0,
            total_earnings: 0.0,
            entries_count: 0,
            is_paid: true,
        });

        day.total_hours += hours;
        day.total_earnings += earnings;
        day.entries_count += 1;
        day.is_paid = day.is_paid && entry.is_paid;
    }

    // BTreeMap iterates ascending; the contract is descending by date.
    days.into_values()
        .rev()
        .map(|mut day| {
            day.total_hours = round2(day.total_hours);
            day.total_earnings = round2(day.total_earnings);
            day
        })
        .collect()
}

/// Single pass over the snapshot accumulating the six running sums plus the
/// set of distinct dates. Rounding happens exactly once, at the end.
pub fn stats(entries: &[TimeEntry]) -> TimesheetStats {
    let mut total_hours = 0.0;
    let mut total_earnings = 0.0;
    let mut paid_hours = 0.0;
    let mut unpaid_hours = 0.0;
    let mut paid_earnings = 0.0;
    let mut unpaid_earnings = 0.0;
    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();

    for entry in entries {
        let hours = entry.hours();
        let earnings = entry.earnings();

        total_hours += hours;
        total_earnings += earnings;

        if entry.is_paid {
            paid_hours += hours;
            paid_earnings += earnings;
        } else {
            unpaid_hours += hours;
            unpaid_earnings += earnings;
        }

        dates.insert(entry.date);
    }

    let days_worked = dates.len();
    let average_hours_per_day = if days_worked > 0 {
        total_hours / days_worked as f64
    } else {
        0.0
    };

    TimesheetStats {
        total_hours: round2(total_hours),
        total_earnings: round2(total_earnings),
        paid_hours: round2(paid_hours),
        unpaid_hours: round2(unpaid_hours),
        paid_earnings: round2(paid_earnings),
        unpaid_earnings: round2(unpaid_earnings),
        average_hours_per_day: round2(average_hours_per_day),
        days_worked,
    }
}
