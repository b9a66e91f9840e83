//! Worked-hours arithmetic over wall-clock time-of-day pairs.

use chrono::NaiveTime;

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Duration in hours between two times-of-day on a shared reference day.
///
/// An end at or before the start is read as falling on the following day
/// (overnight shift), so the result is always in (0, 24]. Equal start and
/// end therefore yields the degenerate 24.00; rejecting that is a caller
/// concern. Rounded to hundredths of an hour, half away from zero.
pub fn compute_hours(start: NaiveTime, end: NaiveTime) -> f64 {
    let mut minutes = (end - start).num_minutes();
    if minutes <= 0 {
        minutes += MINUTES_PER_DAY;
    }
    round2(minutes as f64 / 60.0)
}

/// Round to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
