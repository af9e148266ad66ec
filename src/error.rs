use crate::request::query::QueryError;
use crate::response::error::FetchFailure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    /// A query was rejected during input validation, before any request
    /// was built or sent.
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),

    /// A single-query call could not produce a forecast. Batch calls never
    /// return this; their per-slot failures stay in-band.
    #[error(transparent)]
    Fetch(#[from] FetchFailure),
}
