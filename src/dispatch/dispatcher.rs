//! Chunked, concurrency-bounded execution of an ordered batch of request
//! URLs.
//!
//! The batch is split into contiguous chunks of at most `concurrency` URLs.
//! Every request in a chunk runs at once; the next chunk starts only after
//! the whole previous chunk has resolved. There is no sliding window, no
//! timeout, and no early abort: a dispatch always produces exactly one
//! outcome per URL, in input order, with individual failures recorded in
//! place.

use crate::dispatch::cache::ResponseCache;
use crate::dispatch::error::TransportFailure;
use crate::dispatch::transport::Transport;
use futures_util::future::join_all;
use log::{info, warn};
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Per-URL result of one dispatch: the raw response body, or the transport
/// failure that kept it from arriving.
pub(crate) type RawOutcome = Result<String, TransportFailure>;

/// How a batch of requests is executed.
///
/// The mode is explicit configuration, resolved once per dispatch call and
/// never probed per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DispatchMode {
    /// Issue up to `concurrency` requests at once, chunk by chunk. With a
    /// concurrency limit of 1 this degenerates to [`Sequential`].
    ///
    /// [`Sequential`]: DispatchMode::Sequential
    #[default]
    Concurrent,
    /// One request at a time, in order.
    Sequential,
    /// One request at a time through the simplest blocking fetch,
    /// consulting the optional response cache before going to the network.
    Minimal,
}

pub(crate) struct Dispatcher {
    mode: DispatchMode,
    concurrency: NonZeroUsize,
    transport: Arc<dyn Transport>,
    cache: Option<Arc<dyn ResponseCache>>,
}

impl Dispatcher {
    pub(crate) fn new(
        mode: DispatchMode,
        concurrency: NonZeroUsize,
        transport: Arc<dyn Transport>,
        cache: Option<Arc<dyn ResponseCache>>,
    ) -> Self {
        Self {
            mode,
            concurrency,
            transport,
            cache,
        }
    }

    /// Executes every URL and returns one outcome per URL, in input order.
    ///
    /// Individual failures are logged and recorded at their own index; they
    /// never abort the chunk or the batch, and this call never fails as a
    /// whole.
    pub(crate) async fn dispatch(&self, urls: &[String]) -> Vec<RawOutcome> {
        match self.mode {
            DispatchMode::Concurrent if self.concurrency.get() > 1 => self.run_chunked(urls).await,
            DispatchMode::Concurrent | DispatchMode::Sequential => self.run_sequential(urls).await,
            DispatchMode::Minimal => self.run_minimal(urls).await,
        }
    }

    /// Fetches a single URL under the configured mode, for callers outside
    /// a batch. Semantically a batch of one.
    pub(crate) async fn dispatch_one(&self, url: &str) -> RawOutcome {
        match self.mode {
            DispatchMode::Minimal => self.fetch_minimal(url).await,
            _ => self.fetch_logged(url).await,
        }
    }

    async fn run_chunked(&self, urls: &[String]) -> Vec<RawOutcome> {
        let chunk_size = self.concurrency.get();
        info!(
            "dispatching {} requests in chunks of at most {}",
            urls.len(),
            chunk_size
        );

        let mut outcomes = Vec::with_capacity(urls.len());
        for chunk in urls.chunks(chunk_size) {
            // join_all keeps slot order and resolves only once every member
            // future has, which is the barrier between chunks.
            let chunk_outcomes = join_all(chunk.iter().map(|url| self.fetch_logged(url))).await;
            outcomes.extend(chunk_outcomes);
        }
        outcomes
    }

    async fn run_sequential(&self, urls: &[String]) -> Vec<RawOutcome> {
        info!("dispatching {} requests sequentially", urls.len());

        let mut outcomes = Vec::with_capacity(urls.len());
        for url in urls {
            outcomes.push(self.fetch_logged(url).await);
        }
        outcomes
    }

    async fn run_minimal(&self, urls: &[String]) -> Vec<RawOutcome> {
        info!(
            "dispatching {} requests with the minimal strategy",
            urls.len()
        );

        let mut outcomes = Vec::with_capacity(urls.len());
        for url in urls {
            outcomes.push(self.fetch_minimal(url).await);
        }
        outcomes
    }

    async fn fetch_minimal(&self, url: &str) -> RawOutcome {
        if let Some(body) = self.cache.as_deref().and_then(|cache| cache.lookup(url)) {
            info!("response cache satisfied {url}");
            return Ok(body);
        }
        self.fetch_logged(url).await
    }

    async fn fetch_logged(&self, url: &str) -> RawOutcome {
        match self.transport.fetch(url).await {
            Ok(body) => Ok(body),
            Err(failure) => {
                warn!("{failure}");
                Err(failure)
            }
        }
    }
}
