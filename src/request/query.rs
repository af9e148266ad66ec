//! Query parameters for a single forecast request: the mandatory coordinates
//! plus the optional time and request modifiers the API accepts.

use bon::bon;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    #[error("latitude {0} must be a finite number between -90 and 90")]
    InvalidLatitude(f64),

    #[error("longitude {0} must be a finite number between -180 and 180")]
    InvalidLongitude(f64),
}

/// One (location, time) request for forecast data.
///
/// Latitude and longitude are mandatory; everything else is omitted from the
/// request unless explicitly supplied. A query is immutable once built and
/// carries no state between calls.
///
/// # Examples
///
/// ```
/// use forecastio::ForecastQuery;
///
/// // Current conditions for San Francisco.
/// let query = ForecastQuery::builder()
///     .latitude(37.7749)
///     .longitude(-122.4194)
///     .build();
/// assert!(query.time.is_none());
///
/// // A time-machine request in SI units.
/// let query = ForecastQuery::builder()
///     .latitude(52.3702)
///     .longitude(4.8952)
///     .time(1_362_268_800)
///     .units("si")
///     .build();
/// assert_eq!(query.time, Some(1_362_268_800));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastQuery {
    /// Latitude in decimal degrees, positive north.
    pub latitude: f64,
    /// Longitude in decimal degrees, positive east.
    pub longitude: f64,
    /// Unix timestamp for a time-machine request; `None` asks for the
    /// current forecast.
    pub time: Option<i64>,
    /// Unit system for response values ("us", "si", "ca", "uk", "auto").
    pub units: Option<String>,
    /// Comma-separated data blocks to omit from the response.
    pub exclude: Option<String>,
    /// Blocks to extend (the API accepts "hourly" for a 7-day hour-by-hour
    /// forecast).
    pub extend: Option<String>,
    /// JSONP callback name.
    pub callback: Option<String>,
}

#[bon]
impl ForecastQuery {
    /// Builds a query via `ForecastQuery::builder()`.
    ///
    /// * `.latitude(f64)`: **Required.**
    /// * `.longitude(f64)`: **Required.**
    /// * `.time(i64)`: Optional Unix timestamp for a time-machine request.
    /// * `.units(..)`, `.exclude(..)`, `.extend(..)`, `.callback(..)`:
    ///   Optional request modifiers, sent as query-string parameters.
    #[builder]
    pub fn new(
        latitude: f64,
        longitude: f64,
        time: Option<i64>,
        #[builder(into)] units: Option<String>,
        #[builder(into)] exclude: Option<String>,
        #[builder(into)] extend: Option<String>,
        #[builder(into)] callback: Option<String>,
    ) -> Self {
        Self {
            latitude,
            longitude,
            time,
            units,
            exclude,
            extend,
            callback,
        }
    }
}

impl ForecastQuery {
    /// Checks that the coordinates are values the API could answer for.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::InvalidLatitude`] or
    /// [`QueryError::InvalidLongitude`] when a coordinate is not finite or
    /// falls outside its valid range.
    pub fn validate(&self) -> Result<(), QueryError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(QueryError::InvalidLatitude(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(QueryError::InvalidLongitude(self.longitude));
        }
        Ok(())
    }
}
