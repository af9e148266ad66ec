//! The main entry point for fetching forecasts: one query or an ordered
//! batch of queries in, reports (or in-band failures) out, with every
//! request URL going through the concurrency-bounded dispatcher.

use crate::dispatch::cache::ResponseCache;
use crate::dispatch::dispatcher::{DispatchMode, Dispatcher};
use crate::dispatch::transport::{BlockingTransport, HttpTransport, Transport};
use crate::error::ForecastError;
use crate::request::query::ForecastQuery;
use crate::request::url::build_request_url;
use crate::response::decode::decode;
use crate::response::error::FetchFailure;
use crate::response::report::ForecastReport;
use bon::bon;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Per-slot result of a batch call: a report, or the failure standing in
/// for it at the same index.
pub type BatchOutcome = Result<ForecastReport, FetchFailure>;

const DEFAULT_CONCURRENCY: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// The client for the forecast API.
///
/// A `Forecast` holds the API key and the dispatch configuration; it keeps
/// no state between calls, so one instance can serve any number of
/// single-query and batch requests.
///
/// # Examples
///
/// ```no_run
/// use forecastio::{Forecast, ForecastQuery};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), forecastio::ForecastError> {
/// let forecast = Forecast::builder().api_key("your-api-key").build();
///
/// let query = ForecastQuery::builder()
///     .latitude(37.7749)
///     .longitude(-122.4194)
///     .build();
///
/// let report = forecast.get_forecast(&query).await?;
/// println!(
///     "{}: {:?}°",
///     report.timezone(),
///     report.currently().temperature
/// );
/// # Ok(())
/// # }
/// ```
pub struct Forecast {
    api_key: String,
    dispatcher: Dispatcher,
}

#[bon]
impl Forecast {
    /// Builds a client via `Forecast::builder()`.
    ///
    /// * `.api_key(..)`: **Required.** Key obtained from the provider.
    /// * `.concurrency(NonZeroUsize)`: Optional. Number of requests kept in
    ///   flight simultaneously during a batch call. Defaults to 10.
    /// * `.mode(DispatchMode)`: Optional. Execution strategy for dispatch,
    ///   chosen here once rather than probed per request. Defaults to
    ///   [`DispatchMode::Concurrent`].
    /// * `.transport(Arc<dyn Transport>)`: Optional. Replaces the HTTP
    ///   client, e.g. with a scripted fake in tests. Defaults to
    ///   [`HttpTransport`], or [`BlockingTransport`] in minimal mode.
    /// * `.cache(Arc<dyn ResponseCache>)`: Optional. Response store
    ///   consulted by the minimal strategy before a live fetch. No default.
    #[builder]
    pub fn new(
        #[builder(into)] api_key: String,
        concurrency: Option<NonZeroUsize>,
        mode: Option<DispatchMode>,
        transport: Option<Arc<dyn Transport>>,
        cache: Option<Arc<dyn ResponseCache>>,
    ) -> Self {
        let mode = mode.unwrap_or_default();
        let concurrency = concurrency.unwrap_or(DEFAULT_CONCURRENCY);
        let transport = transport.unwrap_or_else(|| match mode {
            DispatchMode::Minimal => Arc::new(BlockingTransport),
            _ => Arc::new(HttpTransport::new()),
        });

        Self {
            api_key,
            dispatcher: Dispatcher::new(mode, concurrency, transport, cache),
        }
    }

    /// Fetches the forecast for a single query.
    ///
    /// The scalar counterpart of [`get_forecasts`](Forecast::get_forecasts):
    /// one query in, one report out.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidQuery`], before any network
    /// activity, when the coordinates fail validation, and
    /// [`ForecastError::Fetch`] when the request or the decoding of its
    /// response fails.
    pub async fn get_forecast(
        &self,
        query: &ForecastQuery,
    ) -> Result<ForecastReport, ForecastError> {
        query.validate()?;
        let url = build_request_url(&self.api_key, query);
        let outcome = self.dispatcher.dispatch_one(&url).await;
        let payload = decode(outcome)?;
        Ok(ForecastReport::new(payload))
    }

    /// Fetches forecasts for an ordered batch of queries.
    ///
    /// All queries are validated up front; the batch is then dispatched in
    /// one call under the configured concurrency limit, and every response
    /// is decoded in place. The result has exactly one entry per query, in
    /// query order: a report, or the in-band failure for that slot. Check
    /// each entry; a failed request is never silently replaced with
    /// default data.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidQuery`] when any query fails
    /// validation; in that case nothing is fetched. Per-request problems
    /// never fail the call as a whole.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use forecastio::{Forecast, ForecastQuery};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), forecastio::ForecastError> {
    /// let forecast = Forecast::builder().api_key("your-api-key").build();
    ///
    /// // This day in history, going back three years.
    /// let queries: Vec<ForecastQuery> = (1..=3)
    ///     .map(|years| {
    ///         ForecastQuery::builder()
    ///             .latitude(37.7749)
    ///             .longitude(-122.4194)
    ///             .time(1_362_268_800 - years * 31_536_000)
    ///             .build()
    ///     })
    ///     .collect();
    ///
    /// for outcome in forecast.get_forecasts(&queries).await? {
    ///     match outcome {
    ///         Ok(report) => println!("{:?}", report.currently().temperature),
    ///         Err(failure) => eprintln!("no data: {failure}"),
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_forecasts(
        &self,
        queries: &[ForecastQuery],
    ) -> Result<Vec<BatchOutcome>, ForecastError> {
        for query in queries {
            query.validate()?;
        }

        let urls: Vec<String> = queries
            .iter()
            .map(|query| build_request_url(&self.api_key, query))
            .collect();

        let outcomes = self.dispatcher.dispatch(&urls).await;
        Ok(outcomes
            .into_iter()
            .map(|outcome| decode(outcome).map(ForecastReport::new))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::error::TransportFailure;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn payload_body(temperature: f64) -> String {
        format!(
            r#"{{
                "latitude": 37.7749,
                "longitude": -122.4194,
                "timezone": "America/Los_Angeles",
                "offset": -8,
                "currently": {{"time": 1362268800, "temperature": {temperature}}}
            }}"#
        )
    }

    /// Answers every URL from a body map and counts how often it is asked.
    struct CountingTransport {
        bodies: HashMap<String, String>,
        calls: AtomicUsize,
    }

    impl CountingTransport {
        fn new(bodies: HashMap<String, String>) -> Self {
            Self {
                bodies,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Transport for CountingTransport {
        async fn fetch(&self, url: &str) -> Result<String, TransportFailure> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.bodies
                .get(url)
                .cloned()
                .ok_or_else(|| TransportFailure::HttpStatus {
                    url: url.to_string(),
                    status: reqwest::StatusCode::NOT_FOUND,
                })
        }
    }

    fn client_with(transport: Arc<CountingTransport>) -> Forecast {
        Forecast::builder()
            .api_key("test-key")
            .transport(transport)
            .build()
    }

    fn san_francisco() -> ForecastQuery {
        ForecastQuery::builder()
            .latitude(37.7749)
            .longitude(-122.4194)
            .build()
    }

    #[tokio::test]
    async fn single_query_returns_a_single_report() {
        let query = san_francisco();
        let url = build_request_url("test-key", &query);
        let transport = Arc::new(CountingTransport::new(
            [(url, payload_body(55.81))].into_iter().collect(),
        ));
        let forecast = client_with(transport.clone());

        let report = forecast.get_forecast(&query).await.unwrap();

        assert_eq!(report.currently().temperature, Some(55.81));
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn one_element_batch_returns_a_one_element_batch() {
        let query = san_francisco();
        let url = build_request_url("test-key", &query);
        let transport = Arc::new(CountingTransport::new(
            [(url, payload_body(55.81))].into_iter().collect(),
        ));
        let forecast = client_with(transport);

        let outcomes = forecast
            .get_forecasts(std::slice::from_ref(&query))
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 1);
        assert!(outcomes[0].is_ok());
    }

    #[tokio::test]
    async fn invalid_query_is_rejected_before_any_request() {
        let transport = Arc::new(CountingTransport::new(HashMap::new()));
        let forecast = client_with(transport.clone());
        let query = ForecastQuery::builder()
            .latitude(f64::NAN)
            .longitude(0.0)
            .build();

        let result = forecast.get_forecast(&query).await;

        assert!(matches!(result, Err(ForecastError::InvalidQuery(_))));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn invalid_query_anywhere_in_a_batch_stops_the_whole_batch_early() {
        let transport = Arc::new(CountingTransport::new(HashMap::new()));
        let forecast = client_with(transport.clone());
        let queries = vec![
            san_francisco(),
            ForecastQuery::builder().latitude(0.0).longitude(200.0).build(),
        ];

        let result = forecast.get_forecasts(&queries).await;

        assert!(matches!(result, Err(ForecastError::InvalidQuery(_))));
        assert_eq!(transport.calls(), 0);
    }

    #[tokio::test]
    async fn batch_outcomes_keep_query_order_and_isolate_failures() {
        let near = ForecastQuery::builder().latitude(37.0).longitude(-122.0).build();
        let far = ForecastQuery::builder().latitude(38.0).longitude(-123.0).build();
        let unknown = ForecastQuery::builder().latitude(39.0).longitude(-124.0).build();

        let transport = Arc::new(CountingTransport::new(
            [
                (build_request_url("test-key", &near), payload_body(50.0)),
                (build_request_url("test-key", &unknown), payload_body(60.0)),
            ]
            .into_iter()
            .collect(),
        ));
        let forecast = client_with(transport);

        let outcomes = forecast
            .get_forecasts(&[near, far, unknown])
            .await
            .unwrap();

        assert_eq!(outcomes.len(), 3);
        assert_eq!(
            outcomes[0].as_ref().unwrap().currently().temperature,
            Some(50.0)
        );
        assert!(matches!(
            outcomes[1],
            Err(FetchFailure::Transport(TransportFailure::HttpStatus { .. }))
        ));
        assert_eq!(
            outcomes[2].as_ref().unwrap().currently().temperature,
            Some(60.0)
        );
    }

    #[tokio::test]
    async fn undecodable_body_becomes_an_in_band_failure() {
        let query = san_francisco();
        let url = build_request_url("test-key", &query);
        let transport = Arc::new(CountingTransport::new(
            [(url, "<html>maintenance</html>".to_string())]
                .into_iter()
                .collect(),
        ));
        let forecast = client_with(transport);

        let outcomes = forecast
            .get_forecasts(std::slice::from_ref(&query))
            .await
            .unwrap();

        assert!(matches!(outcomes[0], Err(FetchFailure::Decode(_))));
    }

    #[tokio::test]
    async fn single_query_failure_surfaces_as_a_fetch_error() {
        let transport = Arc::new(CountingTransport::new(HashMap::new()));
        let forecast = client_with(transport);

        let result = forecast.get_forecast(&san_francisco()).await;

        assert!(matches!(
            result,
            Err(ForecastError::Fetch(FetchFailure::Transport(_)))
        ));
    }
}
