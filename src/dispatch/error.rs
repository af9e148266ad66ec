use thiserror::Error;

/// A transport-level failure for one request. Always recorded in the slot
/// it belongs to; never aborts the surrounding batch.
#[derive(Debug, Error)]
pub enum TransportFailure {
    /// The request could not be completed: connection refused, timeout,
    /// DNS failure, or any other error below the HTTP status line. The
    /// source is boxed so that [`Transport`](crate::Transport)
    /// implementations outside this crate can construct it.
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The server answered with a non-success status.
    #[error("request to {url} returned status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The blocking fetch task was cancelled or panicked before resolving.
    #[error("blocking fetch for {url} did not complete")]
    TaskJoin {
        url: String,
        #[source]
        source: tokio::task::JoinError,
    },
}
