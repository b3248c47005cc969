use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use libris_core::{Book, LibrarySource, LibrisError, User};

mod fixtures;

pub use fixtures::{books_json, users_json};

#[derive(Debug, Clone)]
enum Behavior {
    Serve,
    Fail,
    Delay(Duration),
}

/// Mock data source for CI-safe tests and examples.
///
/// Serves the fixture members and books, with borrow dates placed relative to
/// the `now` given at construction so the trailing-week statistics always have
/// data.
#[derive(Debug, Clone)]
pub struct MockSource {
    users: serde_json::Value,
    books: serde_json::Value,
    behavior: Behavior,
}

impl MockSource {
    /// Fixture data anchored at `now`.
    #[must_use]
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            users: users_json(now),
            books: books_json(),
            behavior: Behavior::Serve,
        }
    }

    /// Serve caller-supplied payloads instead of the fixtures.
    #[must_use]
    pub const fn with_payloads(users: serde_json::Value, books: serde_json::Value) -> Self {
        Self {
            users,
            books,
            behavior: Behavior::Serve,
        }
    }

    /// A source whose every call fails.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            behavior: Behavior::Fail,
            ..Self::new(Utc::now())
        }
    }

    /// Fixture data anchored at `now`, answered only after `delay`.
    #[must_use]
    pub fn slow(now: DateTime<Utc>, delay: Duration) -> Self {
        Self {
            behavior: Behavior::Delay(delay),
            ..Self::new(now)
        }
    }

    async fn answer<T>(
        &self,
        payload: &serde_json::Value,
        what: &'static str,
    ) -> Result<Vec<T>, LibrisError>
    where
        T: serde::de::DeserializeOwned,
    {
        match &self.behavior {
            Behavior::Serve => {}
            Behavior::Fail => {
                return Err(LibrisError::source(
                    self.name(),
                    format!("forced failure: list_{what}"),
                ));
            }
            Behavior::Delay(d) => tokio::time::sleep(*d).await,
        }
        if !payload.is_array() {
            return Err(LibrisError::Data(format!(
                "invalid response format from {what} API: expected an array"
            )));
        }
        Ok(serde_json::from_value(payload.clone())?)
    }
}

#[async_trait]
impl LibrarySource for MockSource {
    fn name(&self) -> &'static str {
        "libris-mock"
    }

    async fn list_users(&self) -> Result<Vec<User>, LibrisError> {
        self.answer(&self.users, "users").await
    }

    async fn list_books(&self) -> Result<Vec<Book>, LibrisError> {
        self.answer(&self.books, "books").await
    }
}
