use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use libris_core::{
    Book, DashboardReport, LanguageCount, LibrarySource, LibrisError, PublisherCount, RecordId,
    Snapshot, StatsConfig, TopBorrower, User,
};

use crate::load::fetch_snapshot;

/// One memoized dashboard statistic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Stat {
    /// Day labels of the borrow chart.
    ChartDates,
    /// Per-day borrow counts of the borrow chart.
    ChartBorrowCounts,
    /// Top borrowers list.
    TopBorrowers,
    /// Top languages list.
    TopLanguages,
    /// Top publishers list.
    TopPublishers,
    /// Borrow volume over the lookback window.
    BorrowedLastWeek,
}

#[derive(Debug, Default)]
struct Memo {
    chart_dates: OnceLock<Vec<String>>,
    chart_borrow_counts: OnceLock<Vec<usize>>,
    top_borrowers: OnceLock<Vec<TopBorrower>>,
    top_languages: OnceLock<Vec<LanguageCount>>,
    top_publishers: OnceLock<Vec<PublisherCount>>,
    borrowed_last_week: OnceLock<usize>,
}

impl Memo {
    fn forget_users(&mut self) {
        self.chart_borrow_counts = OnceLock::new();
        self.top_borrowers = OnceLock::new();
        self.top_languages = OnceLock::new();
        self.top_publishers = OnceLock::new();
        self.borrowed_last_week = OnceLock::new();
    }

    fn forget_clock(&mut self) {
        self.chart_dates = OnceLock::new();
        self.chart_borrow_counts = OnceLock::new();
        self.borrowed_last_week = OnceLock::new();
    }

    fn is_set(&self, stat: Stat) -> bool {
        match stat {
            Stat::ChartDates => self.chart_dates.get().is_some(),
            Stat::ChartBorrowCounts => self.chart_borrow_counts.get().is_some(),
            Stat::TopBorrowers => self.top_borrowers.get().is_some(),
            Stat::TopLanguages => self.top_languages.get().is_some(),
            Stat::TopPublishers => self.top_publishers.get().is_some(),
            Stat::BorrowedLastWeek => self.borrowed_last_week.get().is_some(),
        }
    }
}

/// Dashboard statistics over one snapshot, anchored at one instant.
///
/// Each statistic is computed on first access and kept until one of its
/// inputs changes. Statistics never read each other, so asking for one never
/// computes another. Inputs are replaced through `set_*`, which forget only
/// the statistics that depend on the replaced input:
///
/// | setter | forgets |
/// |---|---|
/// | [`set_users`](Self::set_users) | every statistic except the chart dates |
/// | [`set_books`](Self::set_books) | nothing |
/// | [`set_now`](Self::set_now) | chart dates, chart counts, borrowed last week |
#[derive(Debug)]
pub struct Dashboard {
    snapshot: Snapshot,
    now: DateTime<Utc>,
    cfg: StatsConfig,
    memo: Memo,
}

/// Builder for constructing a [`Dashboard`].
#[derive(Debug, Clone, Default)]
pub struct DashboardBuilder {
    snapshot: Snapshot,
    now: Option<DateTime<Utc>>,
    cfg: StatsConfig,
}

impl DashboardBuilder {
    /// Create a builder with an empty snapshot and default configuration.
    ///
    /// Defaults: UTC calendar days, a 7-day chart, a 7-day lookback for the
    /// recent borrow volume, top lists of 10/5/5 entries, and the current
    /// instant as `now`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Members to aggregate.
    #[must_use]
    pub fn users(mut self, users: Vec<User>) -> Self {
        self.snapshot.users = users;
        self
    }

    /// Catalogue to keep alongside the members.
    #[must_use]
    pub fn books(mut self, books: Vec<Book>) -> Self {
        self.snapshot.books = books;
        self
    }

    /// Replace both collections at once.
    #[must_use]
    pub fn snapshot(mut self, snapshot: Snapshot) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// Instant the time windows are anchored to. Defaults to the build time.
    #[must_use]
    pub const fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Zone defining calendar days and chart labels.
    #[must_use]
    pub const fn timezone(mut self, tz: Tz) -> Self {
        self.cfg.timezone = tz;
        self
    }

    /// Number of days in the borrow chart. Must be positive.
    #[must_use]
    pub const fn chart_days(mut self, days: usize) -> Self {
        self.cfg.chart_days = days;
        self
    }

    /// Lookback of the recent borrow volume, in calendar days.
    #[must_use]
    pub const fn last_week_days(mut self, days: u32) -> Self {
        self.cfg.last_week_days = days;
        self
    }

    /// Maximum length of the top borrowers list.
    #[must_use]
    pub const fn top_borrowers_limit(mut self, limit: usize) -> Self {
        self.cfg.top_borrowers_limit = limit;
        self
    }

    /// Maximum length of the top languages list.
    #[must_use]
    pub const fn top_languages_limit(mut self, limit: usize) -> Self {
        self.cfg.top_languages_limit = limit;
        self
    }

    /// Maximum length of the top publishers list.
    #[must_use]
    pub const fn top_publishers_limit(mut self, limit: usize) -> Self {
        self.cfg.top_publishers_limit = limit;
        self
    }

    /// Bound on each source call made by [`load`](Self::load).
    #[must_use]
    pub const fn source_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.source_timeout = timeout;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: StatsConfig) -> Self {
        self.cfg = cfg;
        self
    }

    fn validate(&self) -> Result<(), LibrisError> {
        if self.cfg.chart_days == 0 {
            return Err(LibrisError::InvalidArg(
                "chart_days must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the dashboard.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the chart would have no days.
    pub fn build(self) -> Result<Dashboard, LibrisError> {
        self.validate()?;
        Ok(Dashboard {
            snapshot: self.snapshot,
            now: self.now.unwrap_or_else(Utc::now),
            cfg: self.cfg,
            memo: Memo::default(),
        })
    }

    /// Fetch members and books from `source`, then build.
    ///
    /// Both lists are requested concurrently; each request is bounded by the
    /// configured source timeout. Any snapshot set on the builder is replaced.
    ///
    /// # Errors
    /// Returns `SourceTimeout` if a request exceeds the timeout, `Source` if
    /// the source fails, or `InvalidArg` from [`build`](Self::build).
    pub async fn load(mut self, source: &dyn LibrarySource) -> Result<Dashboard, LibrisError> {
        self.validate()?;
        self.snapshot = fetch_snapshot(source, self.cfg.source_timeout).await?;
        self.build()
    }
}

impl Dashboard {
    /// Start building a new `Dashboard`.
    ///
    /// ```
    /// use libris::{Dashboard, RecordId, User};
    ///
    /// let dash = Dashboard::builder()
    ///     .users(vec![User { id: RecordId::from("1"), name: "Ada".into(), ..Default::default() }])
    ///     .timezone(chrono_tz::Europe::Berlin)
    ///     .build()?;
    /// assert_eq!(dash.total_members(), 1);
    /// assert_eq!(dash.chart_dates().len(), 7);
    /// # Ok::<(), libris::LibrisError>(())
    /// ```
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// Load a dashboard from `source` with the default configuration.
    ///
    /// # Errors
    /// See [`DashboardBuilder::load`].
    pub async fn load(source: &dyn LibrarySource) -> Result<Self, LibrisError> {
        DashboardBuilder::new().load(source).await
    }

    /// Current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Members in the current snapshot.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.snapshot.users
    }

    /// Catalogue in the current snapshot.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.snapshot.books
    }

    /// Instant the time windows are anchored to.
    #[must_use]
    pub const fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &StatsConfig {
        &self.cfg
    }

    /// Replace the members.
    pub fn set_users(&mut self, users: Vec<User>) {
        self.snapshot.users = users;
        self.memo.forget_users();
    }

    /// Replace the catalogue. No statistic depends on it.
    pub fn set_books(&mut self, books: Vec<Book>) {
        self.snapshot.books = books;
    }

    /// Replace both collections.
    pub fn set_snapshot(&mut self, snapshot: Snapshot) {
        self.snapshot = snapshot;
        self.memo.forget_users();
    }

    /// Re-anchor the time windows. A no-op if `now` is unchanged.
    pub fn set_now(&mut self, now: DateTime<Utc>) {
        if now != self.now {
            self.now = now;
            self.memo.forget_clock();
        }
    }

    /// Whether `stat` is currently memoized.
    #[must_use]
    pub fn is_cached(&self, stat: Stat) -> bool {
        self.memo.is_set(stat)
    }

    /// Chart labels, oldest day first.
    pub fn chart_dates(&self) -> &[String] {
        self.memo.chart_dates.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(stat = "chart_dates", "computing");
            libris_core::chart_labels(self.now, self.cfg.timezone, self.cfg.chart_days)
        })
    }

    /// Borrow events per chart day, aligned with [`chart_dates`](Self::chart_dates).
    pub fn chart_borrow_counts(&self) -> &[usize] {
        self.memo.chart_borrow_counts.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(stat = "chart_borrow_counts", "computing");
            libris_core::daily_borrow_counts_with_days(
                &self.snapshot.users,
                self.now,
                self.cfg.timezone,
                self.cfg.chart_days,
            )
            .counts
        })
    }

    /// Most active members, by number of borrow events.
    pub fn top_borrowers(&self) -> &[TopBorrower] {
        self.memo.top_borrowers.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(stat = "top_borrowers", "computing");
            libris_core::top_borrowers_with_limit(
                &self.snapshot.users,
                self.cfg.top_borrowers_limit,
            )
        })
    }

    /// Most borrowed languages.
    pub fn top_languages(&self) -> &[LanguageCount] {
        self.memo.top_languages.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(stat = "top_languages", "computing");
            libris_core::top_languages_with_limit(
                &self.snapshot.users,
                self.cfg.top_languages_limit,
            )
        })
    }

    /// Most borrowed publishers.
    pub fn top_publishers(&self) -> &[PublisherCount] {
        self.memo.top_publishers.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(stat = "top_publishers", "computing");
            libris_core::top_publishers_with_limit(
                &self.snapshot.users,
                self.cfg.top_publishers_limit,
            )
        })
    }

    /// Number of members.
    #[must_use]
    pub fn total_members(&self) -> usize {
        libris_core::total_members(&self.snapshot.users)
    }

    /// Borrow events dated within the lookback window, future dates included.
    pub fn borrowed_last_week(&self) -> usize {
        *self.memo.borrowed_last_week.get_or_init(|| {
            #[cfg(feature = "tracing")]
            tracing::trace!(stat = "borrowed_last_week", "computing");
            libris_core::borrowed_since_days(
                &self.snapshot.users,
                self.now,
                self.cfg.timezone,
                self.cfg.last_week_days,
            )
        })
    }

    /// Display name for a member id, or `"User {id}"` if it is not in the snapshot.
    #[must_use]
    pub fn user_name(&self, id: &RecordId) -> String {
        libris_core::user_name(&self.snapshot.users, id)
    }

    /// Member profile lookup.
    ///
    /// # Errors
    /// Returns `NotFound` if no member has this id.
    pub fn member(&self, id: &RecordId) -> Result<&User, LibrisError> {
        self.snapshot
            .find_user(id)
            .ok_or_else(|| LibrisError::not_found(format!("user {id}")))
    }

    /// Every statistic in one serializable value.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "libris::dashboard::report",
            skip(self),
            fields(users = self.snapshot.users.len(), now = %self.now),
        )
    )]
    #[must_use]
    pub fn report(&self) -> DashboardReport {
        DashboardReport {
            as_of: self.now,
            chart_dates: self.chart_dates().to_vec(),
            chart_borrow_counts: self.chart_borrow_counts().to_vec(),
            top_borrowers: self.top_borrowers().to_vec(),
            top_languages: self.top_languages().to_vec(),
            top_publishers: self.top_publishers().to_vec(),
            total_members: self.total_members(),
            borrowed_last_week: self.borrowed_last_week(),
        }
    }
}
