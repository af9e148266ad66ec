//! The fetch seam between the dispatcher and the network: one trait, one
//! full-featured async client, and one deliberately minimal blocking client.

use crate::dispatch::error::TransportFailure;
use async_trait::async_trait;
use reqwest::Client;
use tokio::task;

/// Fetches one URL and returns the raw response body.
///
/// The dispatcher schedules calls to this trait; implementations decide how
/// the bytes actually move. Tests inject scripted implementations in place
/// of live HTTP.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, TransportFailure>;
}

/// Full-featured async client used by the concurrent and sequential
/// strategies. A single [`reqwest::Client`] is shared across all requests
/// so connections can be reused within a chunk.
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch(&self, url: &str) -> Result<String, TransportFailure> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportFailure::Request {
                url: url.to_string(),
                source: e.into(),
            })?;

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                return Err(match e.status() {
                    Some(status) => TransportFailure::HttpStatus {
                        url: url.to_string(),
                        status,
                    },
                    None => TransportFailure::Request {
                        url: url.to_string(),
                        source: e.into(),
                    },
                });
            }
        };

        response.text().await.map_err(|e| TransportFailure::Request {
            url: url.to_string(),
            source: e.into(),
        })
    }
}

/// The simplest fetch available: one blocking GET per call, run on the
/// blocking thread pool. Used by the minimal strategy when no concurrent
/// client is wanted.
pub struct BlockingTransport;

#[async_trait]
impl Transport for BlockingTransport {
    async fn fetch(&self, url: &str) -> Result<String, TransportFailure> {
        let request_url = url.to_string();
        let joined = task::spawn_blocking(move || {
            let response =
                reqwest::blocking::get(&request_url).map_err(|e| TransportFailure::Request {
                    url: request_url.clone(),
                    source: e.into(),
                })?;

            let response = match response.error_for_status() {
                Ok(response) => response,
                Err(e) => {
                    return Err(match e.status() {
                        Some(status) => TransportFailure::HttpStatus {
                            url: request_url.clone(),
                            status,
                        },
                        None => TransportFailure::Request {
                            url: request_url.clone(),
                            source: e.into(),
                        },
                    });
                }
            };

            response.text().map_err(|e| TransportFailure::Request {
                url: request_url,
                source: e.into(),
            })
        })
        .await;

        match joined {
            Ok(outcome) => outcome,
            Err(e) => Err(TransportFailure::TaskJoin {
                url: url.to_string(),
                source: e,
            }),
        }
    }
}
