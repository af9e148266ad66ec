use crate::response::alert::Alert;
use crate::response::data_point::{DataBlock, DataPoint};
use crate::response::flags::Flags;
use serde::Deserialize;

/// The decoded response document for one query.
///
/// Location metadata and the current-conditions point are always present;
/// the remaining blocks appear only when the provider has data for them
/// and they were not excluded by the query.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastPayload {
    /// The requested latitude.
    pub latitude: f64,
    /// The requested longitude.
    pub longitude: f64,
    /// IANA timezone name for the requested location.
    pub timezone: String,
    /// Current timezone offset in hours from GMT.
    pub offset: f64,
    /// Conditions at the requested (or current) time.
    pub currently: DataPoint,
    /// Minute-by-minute conditions for the next hour, where available.
    pub minutely: Option<DataBlock>,
    /// Hour-by-hour conditions out to 48 hours.
    pub hourly: Option<DataBlock>,
    /// Day-by-day conditions out to a week.
    pub daily: Option<DataBlock>,
    /// Severe weather alerts covering the requested location.
    #[serde(default)]
    pub alerts: Vec<Alert>,
    /// Metadata about how the request was serviced.
    pub flags: Option<Flags>,
}
