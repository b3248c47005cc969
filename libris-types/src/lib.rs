//! Libris data transfer objects and configuration primitives.
#![warn(missing_docs)]

mod config;
mod error;
mod id;
mod lenient;
mod model;
mod stats;

pub use config::{
    DEFAULT_CHART_DAYS, DEFAULT_LAST_WEEK_DAYS, DEFAULT_TOP_BORROWERS, DEFAULT_TOP_LANGUAGES,
    DEFAULT_TOP_PUBLISHERS, StatsConfig,
};
pub use error::LibrisError;
pub use id::RecordId;
pub use model::{Book, BorrowRecord, BorrowedBook, STATUS_BORROWED, STATUS_RETURNED, User};
pub use stats::{DailyBorrowCounts, DashboardReport, LanguageCount, PublisherCount, TopBorrower};
