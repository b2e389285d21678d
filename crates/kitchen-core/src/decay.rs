//! Freshness decay arithmetic.

use chrono::{DateTime, Duration, Utc};

/// Remaining budget after `elapsed_secs` at `rate`, floored at zero.
///
/// Non-positive elapsed time leaves the budget untouched.
pub fn decayed_budget(budget_sec: f64, elapsed_secs: f64, rate: u32) -> f64 {
    if elapsed_secs <= 0.0 {
        return budget_sec;
    }
    (budget_sec - elapsed_secs * f64::from(rate)).max(0.0)
}

/// Absolute instant at which `budget_sec` runs out when decaying at `rate`.
///
/// Budgets too large to represent expire at `DateTime::<Utc>::MAX_UTC`.
pub fn expiry_at(now: DateTime<Utc>, budget_sec: f64, rate: u32) -> DateTime<Utc> {
    let micros = budget_sec / f64::from(rate.max(1)) * 1_000_000.0;
    now.checked_add_signed(Duration::microseconds(micros as i64))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

/// Seconds from `since` to `now`, or `None` when `now` is not later.
pub fn elapsed_secs(since: DateTime<Utc>, now: DateTime<Utc>) -> Option<f64> {
    (now - since)
        .to_std()
        .ok()
        .map(|elapsed| elapsed.as_secs_f64())
        .filter(|secs| *secs > 0.0)
}
