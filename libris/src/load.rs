use std::future::Future;
use std::time::Duration;

use libris_core::{LibrarySource, LibrisError, Snapshot};

/// Normalize a source failure so callers can tell which source produced it.
pub(crate) fn tag_err(source_name: &str, e: LibrisError) -> LibrisError {
    match e {
        e @ (LibrisError::Source { .. } | LibrisError::SourceTimeout { .. }) => e,
        other => LibrisError::source(source_name, other.to_string()),
    }
}

/// Run one source call under `timeout`, mapping elapsed time to `SourceTimeout`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "libris::load::source_call",
        skip(fut),
        fields(
            source = source_name,
            operation = operation,
            timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        ),
    )
)]
pub(crate) async fn source_call_with_timeout<T, Fut>(
    source_name: &'static str,
    operation: &'static str,
    timeout: Duration,
    fut: Fut,
) -> Result<T, LibrisError>
where
    Fut: Future<Output = Result<T, LibrisError>>,
{
    let res = (tokio::time::timeout(timeout, fut).await)
        .unwrap_or_else(|_| Err(LibrisError::source_timeout(source_name, operation)))
        .map_err(|e| tag_err(source_name, e));
    #[cfg(feature = "tracing")]
    if let Err(e) = &res {
        tracing::warn!(error = %e, "source call failed");
    }
    res
}

/// Fetch members and books concurrently and bundle them into a snapshot.
pub(crate) async fn fetch_snapshot(
    source: &dyn LibrarySource,
    timeout: Duration,
) -> Result<Snapshot, LibrisError> {
    let name = source.name();
    let users = source_call_with_timeout(name, "list_users", timeout, source.list_users());
    let books = source_call_with_timeout(name, "list_books", timeout, source.list_books());
    let (users, books) = futures::try_join!(users, books)?;
    #[cfg(feature = "tracing")]
    tracing::debug!(
        source = name,
        users = users.len(),
        books = books.len(),
        "loaded snapshot"
    );
    Ok(Snapshot::new(users, books))
}
