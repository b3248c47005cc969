use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;

// Offset-less date-times, most specific first. `%.f` also matches no fraction.
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

// Minute-precision forms with an offset, which RFC 3339 rejects.
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Parse a raw `borrow_date` into an instant.
///
/// Accepted shapes, tried in order:
/// - RFC 3339 with `Z` or an explicit offset: `2024-01-05T10:00:00Z`
/// - minutes-only with `Z` or an offset: `2024-01-05T10:00Z`, `2024-01-05T10:00+02:00`
/// - date-time without offset, read as wall-clock time in `tz`:
///   `2024-01-05T10:00:00`, `2024-01-05 10:00:00.250`, `2024-01-05T10:00`
/// - bare date, read as midnight UTC: `2024-01-05`
///
/// Anything else yields `None`; callers treat that as "outside every window".
///
/// ```
/// use libris_core::parse_borrow_date;
/// use chrono::{DateTime, Utc};
///
/// let tz = chrono_tz::Europe::Berlin;
/// let z = parse_borrow_date("2024-01-05T10:00:00Z", tz).unwrap();
/// assert_eq!(z, DateTime::parse_from_rfc3339("2024-01-05T10:00:00Z").unwrap().with_timezone(&Utc));
///
/// // Offset-less values follow the configured zone (CET is UTC+1 in January).
/// let local = parse_borrow_date("2024-01-05T10:00:00", tz).unwrap();
/// assert_eq!(local, z - chrono::TimeDelta::hours(1));
///
/// assert!(parse_borrow_date("not-a-date", tz).is_none());
/// ```
#[must_use]
pub fn parse_borrow_date(raw: &str, tz: Tz) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let zoned = match s.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{rest}+00:00"),
        None => s.to_string(),
    };
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(&zoned, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return resolve_local(naive, tz);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| n.and_utc())
}

/// Map a wall-clock time in `tz` to an instant.
///
/// Ambiguous times (fall-back overlap) resolve to the earlier instant; times
/// inside a spring-forward gap move forward by the gap, as a wall clock would.
pub(crate) fn resolve_local(naive: NaiveDateTime, tz: Tz) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => {
            // Gaps are at most an hour in every zone that matters here
            let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
            tz.from_local_datetime(&shifted)
                .earliest()
                .map(|dt| dt.with_timezone(&Utc))
        }
    }
}

/// Instant at which `date` begins in `tz`.
pub(crate) fn local_midnight(date: NaiveDate, tz: Tz) -> Option<DateTime<Utc>> {
    resolve_local(date.and_hms_opt(0, 0, 0)?, tz)
}
