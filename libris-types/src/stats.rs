//! Result envelopes produced by the statistics engine and the dashboard facade.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;

/// Borrow counts per day over a trailing window, oldest day first.
///
/// `labels` and `counts` are aligned index for index.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DailyBorrowCounts {
    /// Human-readable day labels such as `"Mon Jan 5"`.
    #[serde(rename = "chartDates")]
    pub labels: Vec<String>,
    /// Number of borrow events that fell on each day.
    #[serde(rename = "chartBorrowCounts")]
    pub counts: Vec<usize>,
}

impl DailyBorrowCounts {
    /// Sum of all day buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// A member ranked by the size of their borrow history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopBorrower {
    /// Member id.
    pub id: RecordId,
    /// Total borrow events, not distinct books.
    pub count: usize,
    /// Member display name.
    pub name: String,
}

/// A language ranked by the number of borrow events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageCount {
    /// Language as written in the borrow records.
    pub language: String,
    /// Number of borrow events in that language.
    pub count: usize,
}

/// A publisher ranked by the number of borrow events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublisherCount {
    /// Publishing house as written in the borrow records.
    pub name: String,
    /// Number of borrow events for that publisher.
    pub count: usize,
}

/// Every dashboard statistic computed from one snapshot at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardReport {
    /// Instant the time windows were anchored to.
    pub as_of: DateTime<Utc>,
    /// Day labels, oldest first.
    pub chart_dates: Vec<String>,
    /// Borrow events per day, aligned with `chart_dates`.
    pub chart_borrow_counts: Vec<usize>,
    /// Most active members.
    pub top_borrowers: Vec<TopBorrower>,
    /// Most borrowed languages.
    pub top_languages: Vec<LanguageCount>,
    /// Most borrowed publishers.
    pub top_publishers: Vec<PublisherCount>,
    /// Number of members in the snapshot.
    pub total_members: usize,
    /// Borrow events dated within the lookback window (or later).
    pub borrowed_last_week: usize,
}
