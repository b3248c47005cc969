//! libris-core
//!
//! Dashboard statistics over a snapshot of library members and books.
//!
//! - `window`: trailing day windows and per-day borrow counts.
//! - `rank`: generic group/count/top-N and the borrower, language and publisher lists.
//! - `metrics`: member total and recent borrow volume.
//! - `snapshot`: the input snapshot and read-only lookups over it.
//! - `source`: the `LibrarySource` trait implemented by data backends.
//!
//! Every statistic is a pure function of its inputs. The current instant is
//! always an explicit `now` argument and calendar days are taken in an explicit
//! zone, so results are reproducible. Malformed records never produce errors:
//! a missing history reads as empty, a missing language or publisher is left
//! out of its ranking, and an unparseable borrow date falls outside every
//! time window.
#![warn(missing_docs)]

mod dates;
/// Scalar fleet metrics.
pub mod metrics;
/// Group-count-rank utilities.
pub mod rank;
pub mod snapshot;
/// Data source trait.
pub mod source;
pub mod types;
/// Day windows and daily borrow counts.
pub mod window;

pub use dates::parse_borrow_date;
pub use metrics::{borrowed_last_week, borrowed_since_days, lookback_start, total_members};
pub use rank::{
    Ranked, rank, top_borrowers, top_borrowers_with_limit, top_languages,
    top_languages_with_limit, top_publishers, top_publishers_with_limit,
};
pub use snapshot::{Snapshot, available_books, find_user, history_records, user_name};
pub use source::LibrarySource;
pub use types::*;
pub use window::{DayWindow, chart_labels, daily_borrow_counts, daily_borrow_counts_with_days};
