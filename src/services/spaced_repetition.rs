use chrono::{DateTime, Utc};

/// Review intervals in days, shortest first.
pub const REVIEW_INTERVALS: [u32; 6] = [1, 3, 7, 14, 30, 90];

const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Position of `interval` in [`REVIEW_INTERVALS`]; unknown values map to 0.
pub fn interval_index(interval: u32) -> usize {
    REVIEW_INTERVALS
        .iter()
        .position(|&i| i == interval)
        .unwrap_or(0)
}

/// Moves one step up the interval ladder on success, one step down on
/// failure, saturating at both ends.
pub fn next_interval(current: u32, success: bool) -> u32 {
    let index = interval_index(current);
    let next = if success {
        (index + 1).min(REVIEW_INTERVALS.len() - 1)
    } else {
        index.saturating_sub(1)
    };
    REVIEW_INTERVALS[next]
}

/// Whole days elapsed between `from` and `to`, floored.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> i64 {
    (to - from).num_milliseconds().div_euclid(MS_PER_DAY)
}

pub fn is_due(last_review: Option<DateTime<Utc>>, interval: u32) -> bool {
    is_due_at(last_review, interval, Utc::now())
}

/// A word never reviewed is always due; otherwise it is due once the
/// elapsed whole days reach the interval.
pub fn is_due_at(last_review: Option<DateTime<Utc>>, interval: u32, now: DateTime<Utc>) -> bool {
    match last_review {
        None => true,
        Some(last) => days_between(last, now) >= i64::from(interval),
    }
}
