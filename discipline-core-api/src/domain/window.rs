use chrono::{DateTime, Duration, Utc};

/// Length of the rolling window a violation's points stay active for.
pub const ROLLING_WINDOW_DAYS: i64 = 90;

/// Contributions expiring within this many days are reported as expiring soon.
pub const EXPIRY_WARNING_DAYS: i64 = 30;

/// Start of the rolling window for a given reference instant.
pub fn window_start(as_of: DateTime<Utc>) -> DateTime<Utc> {
    as_of - Duration::days(ROLLING_WINDOW_DAYS)
}

/// Instant at which a violation's points fall out of the rolling window.
pub fn expires_at(violation_date: DateTime<Utc>) -> DateTime<Utc> {
    violation_date + Duration::days(ROLLING_WINDOW_DAYS)
}

/// Whole days until a violation's points expire, negative once past.
pub fn days_until_expiration(violation_date: DateTime<Utc>, as_of: DateTime<Utc>) -> i64 {
    (expires_at(violation_date) - as_of).num_days()
}

/// Whether a contribution should be flagged as expiring soon:
/// strictly in the future, within the warning horizon.
pub fn expiring_soon(violation_date: DateTime<Utc>, as_of: DateTime<Utc>) -> bool {
    let remaining = days_until_expiration(violation_date, as_of);
    remaining > 0 && remaining <= EXPIRY_WARNING_DAYS
}
