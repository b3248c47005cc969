//! Libris computes the statistics behind a library dashboard.
//!
//! Overview
//! - Takes a snapshot of members (each with a borrow history) and books, as
//!   returned by the backend's list endpoints.
//! - Derives the dashboard figures: a per-day borrow chart over the trailing
//!   week, the top borrowers, languages and publishers, the member total and
//!   the recent borrow volume.
//! - Memoizes each figure independently and forgets only the figures whose
//!   inputs were replaced.
//!
//! Key behaviors
//! - Nothing here fails on malformed records: missing histories count as empty,
//!   records without a language or publisher are left out of that ranking, and
//!   unparseable borrow dates fall outside every time window.
//! - The current instant and the calendar zone are explicit inputs
//!   (`DashboardBuilder::now`, `DashboardBuilder::timezone`), so results are
//!   reproducible.
//! - The recent borrow volume has no upper bound: borrow records dated in the
//!   future are counted.
//! - Top lists are ordered by descending count; the order among equal counts
//!   is unspecified.
//!
//! Examples
//! Building a dashboard from an in-memory snapshot:
//! ```
//! use chrono::{DateTime, Utc};
//! use libris::{BorrowRecord, Dashboard, RecordId, User};
//!
//! let now: DateTime<Utc> = "2024-01-05T12:00:00Z".parse().unwrap();
//! let ada = User {
//!     id: RecordId::from("1"),
//!     name: "Ada".into(),
//!     history: vec![BorrowRecord {
//!         language: Some("English".into()),
//!         publishing_house: Some("Acme".into()),
//!         borrow_date: "2024-01-05T09:30:00Z".into(),
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//!
//! let dash = Dashboard::builder().users(vec![ada]).now(now).build()?;
//! assert_eq!(dash.chart_borrow_counts(), &[0, 0, 0, 0, 0, 0, 1]);
//! assert_eq!(dash.top_languages()[0].language, "English");
//! assert_eq!(dash.borrowed_last_week(), 1);
//! assert_eq!(dash.user_name(&RecordId::from("2")), "User 2");
//! # Ok::<(), libris::LibrisError>(())
//! ```
//!
//! Loading from a backend:
//! ```rust,ignore
//! let dash = Dashboard::builder()
//!     .timezone(chrono_tz::Europe::Berlin)
//!     .load(&my_source)
//!     .await?;
//! println!("{}", serde_json::to_string(&dash.report())?);
//! ```
#![warn(missing_docs)]

mod dashboard;
mod load;

pub use dashboard::{Dashboard, DashboardBuilder, Stat};

// Re-export core types for convenience
pub use libris_core::{
    Book, BorrowRecord, BorrowedBook, DailyBorrowCounts, DashboardReport, LanguageCount,
    LibrarySource, LibrisError, PublisherCount, RecordId, Snapshot, StatsConfig, TopBorrower, Tz,
    User,
};
