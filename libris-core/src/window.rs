//! Trailing day windows and per-day borrow counts.

use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use libris_types::{DEFAULT_CHART_DAYS, DailyBorrowCounts, User};

use crate::dates::{local_midnight, parse_borrow_date};
use crate::snapshot::history_records;

/// `strftime` pattern for chart labels, e.g. `"Mon Jan 5"`.
pub const LABEL_FORMAT: &str = "%a %b %-d";

/// One calendar day in a zone, as the half-open instant range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    /// Calendar date in the window's zone.
    pub date: NaiveDate,
    /// Local midnight opening the day.
    pub start: DateTime<Utc>,
    /// Local midnight of the following day.
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// Whether `ts` falls on this day. The end instant belongs to the next day.
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts < self.end
    }

    /// Chart label for this day.
    #[must_use]
    pub fn label(&self) -> String {
        self.date.format(LABEL_FORMAT).to_string()
    }
}

/// The `days` calendar days ending with the day containing `now`, oldest first.
///
/// Boundaries are local midnights in `tz`, so a window spanning a DST change
/// is 23 or 25 hours long. Consecutive windows share their boundary instant.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use libris_core::window::day_windows;
///
/// let now: DateTime<Utc> = "2024-01-05T15:30:00Z".parse().unwrap();
/// let w = day_windows(now, chrono_tz::UTC, 7);
/// assert_eq!(w.len(), 7);
/// assert_eq!(w[0].label(), "Sat Dec 30");
/// assert_eq!(w[6].label(), "Fri Jan 5");
/// assert_eq!(w[6].start.to_rfc3339(), "2024-01-05T00:00:00+00:00");
/// assert_eq!(w[5].end, w[6].start);
/// ```
#[must_use]
pub fn day_windows(now: DateTime<Utc>, tz: Tz, days: usize) -> Vec<DayWindow> {
    let today = now.with_timezone(&tz).date_naive();
    let mut out = Vec::with_capacity(days);
    for back in (0..days).rev() {
        let Some(window) = window_for(today, back, tz) else {
            continue;
        };
        out.push(window);
    }
    out
}

fn window_for(today: NaiveDate, back: usize, tz: Tz) -> Option<DayWindow> {
    let date = today.checked_sub_days(Days::new(u64::try_from(back).ok()?))?;
    let next = date.succ_opt()?;
    Some(DayWindow {
        date,
        start: local_midnight(date, tz)?,
        end: local_midnight(next, tz)?,
    })
}

/// Chart labels for the trailing `days` days, oldest first.
#[must_use]
pub fn chart_labels(now: DateTime<Utc>, tz: Tz, days: usize) -> Vec<String> {
    day_windows(now, tz, days)
        .iter()
        .map(DayWindow::label)
        .collect()
}

/// Borrow events per day over the trailing week ending today.
///
/// Equivalent to [`daily_borrow_counts_with_days`] with
/// [`DEFAULT_CHART_DAYS`](libris_types::DEFAULT_CHART_DAYS).
#[must_use]
pub fn daily_borrow_counts(users: &[User], now: DateTime<Utc>, tz: Tz) -> DailyBorrowCounts {
    daily_borrow_counts_with_days(users, now, tz, DEFAULT_CHART_DAYS)
}

/// Borrow events per day over the trailing `days` days ending today.
///
/// Every history entry of every member is placed in the day whose
/// `[start, end)` range contains its parsed `borrow_date`. Entries outside the
/// whole range, and entries whose date cannot be parsed, are not counted.
///
/// ```
/// use chrono::{DateTime, Utc};
/// use libris_core::window::daily_borrow_counts;
/// use libris_core::{BorrowRecord, User};
///
/// let borrow = |date: &str| BorrowRecord { borrow_date: date.into(), ..Default::default() };
/// let user = User {
///     history: vec![borrow("2024-01-05T00:00:00Z"), borrow("2024-01-04T23:59:59Z"), borrow("garbage")],
///     ..Default::default()
/// };
/// let now: DateTime<Utc> = "2024-01-05T12:00:00Z".parse().unwrap();
/// let out = daily_borrow_counts(&[user], now, chrono_tz::UTC);
/// assert_eq!(out.counts, vec![0, 0, 0, 0, 0, 1, 1]);
/// assert_eq!(out.labels.len(), 7);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "libris_core::window::daily_borrow_counts",
        skip(users),
        fields(users = users.len(), tz = %tz, days = days),
    )
)]
#[must_use]
pub fn daily_borrow_counts_with_days(
    users: &[User],
    now: DateTime<Utc>,
    tz: Tz,
    days: usize,
) -> DailyBorrowCounts {
    let windows = day_windows(now, tz, days);
    let mut counts = vec![0usize; windows.len()];

    if let (Some(first), Some(last)) = (windows.first(), windows.last()) {
        let (lo, hi) = (first.start, last.end);
        #[cfg(feature = "tracing")]
        let mut unparseable = 0usize;
        for record in history_records(users) {
            let Some(ts) = parse_borrow_date(&record.borrow_date, tz) else {
                #[cfg(feature = "tracing")]
                {
                    unparseable += 1;
                }
                continue;
            };
            if ts < lo || ts >= hi {
                continue;
            }
            if let Some(i) = windows.iter().position(|w| w.contains(ts)) {
                counts[i] += 1;
            }
        }
        #[cfg(feature = "tracing")]
        if unparseable > 0 {
            tracing::debug!(unparseable, "skipped borrow records with unparseable dates");
        }
    }

    DailyBorrowCounts {
        labels: windows.iter().map(DayWindow::label).collect(),
        counts,
    }
}
