//! Errors surfaced by the content fetcher and page loader.

/// A failure the loader does not turn into the not-found page.
///
/// HTTP error statuses never appear here; they become
/// [`NOT_FOUND_FALLBACK`](super::NOT_FOUND_FALLBACK).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request never produced an HTTP status (bad URL, DNS, refused connection, timeout).
    #[error("GET {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    /// The blocking fetch task panicked or was cancelled.
    #[error("page load task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl FetchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. })
    }
}
