//! Scalar fleet metrics.

use chrono::{DateTime, Days, TimeDelta, Utc};
use chrono_tz::Tz;
use libris_types::{DEFAULT_LAST_WEEK_DAYS, User};

use crate::dates::{parse_borrow_date, resolve_local};
use crate::snapshot::history_records;

/// Number of members in the snapshot.
#[must_use]
pub const fn total_members(users: &[User]) -> usize {
    users.len()
}

/// Instant `days` calendar days before `now`, keeping the wall-clock time in `tz`.
///
/// A shifted time inside a DST gap moves forward by the gap; one inside an
/// overlap takes the earlier instant. Day boundaries resolve the same way.
#[must_use]
pub fn lookback_start(now: DateTime<Utc>, tz: Tz, days: u32) -> DateTime<Utc> {
    now.with_timezone(&tz)
        .naive_local()
        .checked_sub_days(Days::new(u64::from(days)))
        .and_then(|local| resolve_local(local, tz))
        .unwrap_or_else(|| now - TimeDelta::days(i64::from(days)))
}

/// Borrow events dated within the last [`DEFAULT_LAST_WEEK_DAYS`] days.
#[must_use]
pub fn borrowed_last_week(users: &[User], now: DateTime<Utc>, tz: Tz) -> usize {
    borrowed_since_days(users, now, tz, DEFAULT_LAST_WEEK_DAYS)
}

/// Borrow events dated at or after [`lookback_start`]`(now, tz, days)`.
///
/// There is no upper bound: records dated after `now` are counted too.
/// Records with unparseable dates are not.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use libris_core::metrics::borrowed_last_week;
/// use libris_core::{BorrowRecord, User};
///
/// let borrow = |date: &str| BorrowRecord { borrow_date: date.into(), ..Default::default() };
/// let user = User {
///     history: vec![
///         borrow("2024-01-01T12:00:00Z"), // exactly seven days back
///         borrow("2024-01-01T11:59:59Z"), // one second too early
///         borrow("2024-02-01T00:00:00Z"), // future-dated, still counted
///         borrow("not-a-date"),
///     ],
///     ..Default::default()
/// };
/// let now: DateTime<Utc> = "2024-01-08T12:00:00Z".parse().unwrap();
/// assert_eq!(borrowed_last_week(&[user], now, chrono_tz::UTC), 2);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "libris_core::metrics::borrowed_since_days",
        skip(users),
        fields(users = users.len(), tz = %tz, days = days),
    )
)]
#[must_use]
pub fn borrowed_since_days(users: &[User], now: DateTime<Utc>, tz: Tz, days: u32) -> usize {
    let cutoff = lookback_start(now, tz, days);
    history_records(users)
        .filter_map(|r| parse_borrow_date(&r.borrow_date, tz))
        .filter(|ts| *ts >= cutoff)
        .count()
}
