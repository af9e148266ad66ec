//! Turns raw dispatch outcomes into typed payloads, classifying and logging
//! anything unusable without disturbing the rest of the batch.

use crate::dispatch::dispatcher::RawOutcome;
use crate::response::error::FetchFailure;
use crate::response::payload::ForecastPayload;
use log::warn;

/// Decodes one raw outcome into a payload, or the failure standing in for
/// it at the same index.
///
/// Transport failures pass through unchanged (the dispatcher already logged
/// them). An empty body and an undecodable body each become an in-band
/// failure with a diagnostic log entry. Decoding one outcome never depends
/// on any other.
pub(crate) fn decode(outcome: RawOutcome) -> Result<ForecastPayload, FetchFailure> {
    let body = outcome.map_err(FetchFailure::Transport)?;
    if body.is_empty() {
        warn!("API response was empty");
        return Err(FetchFailure::EmptyBody);
    }
    decode_body(&body)
}

pub(crate) fn decode_body(body: &str) -> Result<ForecastPayload, FetchFailure> {
    serde_json::from_str(body).map_err(|e| {
        warn!("cannot decode API response: {e}");
        FetchFailure::Decode(e)
    })
}
