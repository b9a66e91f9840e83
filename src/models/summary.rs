use chrono::NaiveDate;
use serde::Serialize;

/// Aggregated totals for all entries sharing one calendar date.
/// Derived on demand from the snapshot, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySummary {
    pub date: NaiveDate,
    pub total_hours: f64,
    pub total_earnings: f64,
    pub entries_count: usize,
    /// True only if every entry on this date is paid. Read-only and derived;
    /// the entry-level flag is the single mutable source of truth.
    pub is_paid: bool,
}

/// Global aggregates over the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetStats {
    pub total_hours: f64,
    pub total_earnings: f64,
    pub paid_hours: f64,
    pub unpaid_hours: f64,
    pub paid_earnings: f64,
    pub unpaid_earnings: f64,
    pub average_hours_per_day: f64,
    pub days_worked: usize,
}
