use async_trait::async_trait;

use crate::{Book, LibrisError, User};

/// Backend that can list members and books.
///
/// The statistics in this crate never call a source; they take the lists it
/// returns. Implementations own transport, authentication and retries.
#[async_trait]
pub trait LibrarySource: Send + Sync {
    /// Stable identifier used in error messages and traces.
    fn name(&self) -> &'static str;

    /// Fetch every member together with their borrow history.
    async fn list_users(&self) -> Result<Vec<User>, LibrisError>;

    /// Fetch the whole catalogue.
    async fn list_books(&self) -> Result<Vec<Book>, LibrisError>;
}
