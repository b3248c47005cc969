//! Configuration shared by the statistics engine and the dashboard facade.

use std::time::Duration;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Default number of day buckets in the borrow chart.
pub const DEFAULT_CHART_DAYS: usize = 7;
/// Default lookback, in days, of the "borrowed last week" metric.
pub const DEFAULT_LAST_WEEK_DAYS: u32 = 7;
/// Default length of the top borrowers list.
pub const DEFAULT_TOP_BORROWERS: usize = 10;
/// Default length of the top languages list.
pub const DEFAULT_TOP_LANGUAGES: usize = 5;
/// Default length of the top publishers list.
pub const DEFAULT_TOP_PUBLISHERS: usize = 5;

/// Global configuration for dashboard statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Zone whose midnights delimit day buckets and whose calendar labels them.
    ///
    /// Date-times without an explicit offset are read as wall-clock time in
    /// this zone.
    pub timezone: Tz,
    /// Number of trailing days in the borrow chart, today included.
    pub chart_days: usize,
    /// Lookback of the "borrowed last week" metric, in calendar days.
    pub last_week_days: u32,
    /// Maximum number of entries in the top borrowers list.
    pub top_borrowers_limit: usize,
    /// Maximum number of entries in the top languages list.
    pub top_languages_limit: usize,
    /// Maximum number of entries in the top publishers list.
    pub top_publishers_limit: usize,
    /// Bound on each data source call when loading a snapshot.
    pub source_timeout: Duration,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            chart_days: DEFAULT_CHART_DAYS,
            last_week_days: DEFAULT_LAST_WEEK_DAYS,
            top_borrowers_limit: DEFAULT_TOP_BORROWERS,
            top_languages_limit: DEFAULT_TOP_LANGUAGES,
            top_publishers_limit: DEFAULT_TOP_PUBLISHERS,
            source_timeout: Duration::from_secs(5),
        }
    }
}
