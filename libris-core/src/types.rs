//! Re-export of foundational types from `libris-types`.
// Consolidated re-exports so downstream crates can depend on `libris-core` only

pub use libris_types::{
    Book, BorrowRecord, BorrowedBook, DailyBorrowCounts, DashboardReport, LanguageCount,
    LibrisError, PublisherCount, RecordId, STATUS_BORROWED, STATUS_RETURNED, StatsConfig,
    TopBorrower, User,
};
pub use libris_types::{
    DEFAULT_CHART_DAYS, DEFAULT_LAST_WEEK_DAYS, DEFAULT_TOP_BORROWERS, DEFAULT_TOP_LANGUAGES,
    DEFAULT_TOP_PUBLISHERS,
};

pub use chrono_tz::Tz;
