//! Stay length and price computation.

use chrono::{DateTime, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Number of billable days between two instants, rounding any partial day
/// up. Returns zero or a negative number when `end` is not after `start`.
pub fn stay_days(start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let millis = (end - start).num_milliseconds();
    if millis <= 0 {
        millis / MILLIS_PER_DAY
    } else {
        (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
    }
}

/// Price of a stay: daily price times days times travelers.
pub fn total_price(daily_price: f64, days: i64, travelers: i32) -> f64 {
    daily_price * days as f64 * f64::from(travelers)
}
