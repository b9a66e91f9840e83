//! Date and period parsing.
//!
//! Periods follow the CLI conventions: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or a
//! `start:end` range of any of those, resolved to inclusive date bounds.

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Resolve a period expression into inclusive `(start, end)` bounds.
pub fn parse_period(period: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    if let Some((start_raw, end_raw)) = period.split_once(':') {
        let (start, _) = period_bounds(start_raw.trim())
            .ok_or_else(|| AppError::InvalidPeriod(period.to_string()))?;
        let (_, end) = period_bounds(end_raw.trim())
            .ok_or_else(|| AppError::InvalidPeriod(period.to_string()))?;

        if start > end {
            return Err(AppError::InvalidPeriod(period.to_string()));
        }
        return Ok((start, end));
    }

    period_bounds(period.trim()).ok_or_else(|| AppError::InvalidPeriod(period.to_string()))
}

fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let year: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(year, 1, 1)?,
                NaiveDate::from_ymd_opt(year, 12, 31)?,
            ))
        }
        // YYYY-MM
        7 => {
            let (y, m) = p.split_once('-')?;
            let year: i32 = y.parse().ok()?;
            let month: u32 = m.parse().ok()?;
            month_bounds(year, month)
        }
        // YYYY-MM-DD
        10 => {
            let day = parse_date(p)?;
            Some((day, day))
        }
        _ => None,
    }
}

fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next_first.pred_opt()?))
}
