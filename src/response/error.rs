use crate::dispatch::error::TransportFailure;
use thiserror::Error;

/// Why one slot of a batch carries no forecast.
///
/// These stay in-band: a batch call returns one `Result` per query, and a
/// failed slot never disturbs its neighbors. Each failure is also written
/// to the diagnostic log when it is first observed.
#[derive(Debug, Error)]
pub enum FetchFailure {
    /// The request never produced a response body.
    #[error(transparent)]
    Transport(#[from] TransportFailure),

    /// The request completed but the response body was empty.
    #[error("the API response was empty")]
    EmptyBody,

    /// A body arrived but could not be decoded into a forecast document.
    #[error("cannot decode the API response")]
    Decode(#[source] serde_json::Error),
}
