//! The outward-facing record for one decoded response.

use crate::response::alert::Alert;
use crate::response::data_point::{DataBlock, DataPoint};
use crate::response::flags::Flags;
use crate::response::payload::ForecastPayload;

/// Accessors over the data blocks decoded from one API response.
///
/// To determine the weather at a given point in time, examine the
/// highest-precision block defined (minutely, hourly and daily
/// respectively), taking any data available from it and falling back to the
/// next block for properties missing at the desired time.
///
/// A report wraps exactly one decoded payload and performs no computation
/// of its own; anything not covered by an accessor is reachable through
/// [`payload`](ForecastReport::payload).
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastReport {
    payload: ForecastPayload,
}

impl ForecastReport {
    pub(crate) fn new(payload: ForecastPayload) -> Self {
        Self { payload }
    }

    /// The entire decoded response document.
    pub fn payload(&self) -> &ForecastPayload {
        &self.payload
    }

    /// The requested latitude.
    pub fn latitude(&self) -> f64 {
        self.payload.latitude
    }

    /// The requested longitude.
    pub fn longitude(&self) -> f64 {
        self.payload.longitude
    }

    /// The IANA timezone name for the requested location.
    pub fn timezone(&self) -> &str {
        &self.payload.timezone
    }

    /// The current timezone offset in hours from GMT.
    pub fn offset(&self) -> f64 {
        self.payload.offset
    }

    /// Conditions at the requested (or current) time.
    pub fn currently(&self) -> &DataPoint {
        &self.payload.currently
    }

    /// Minute-by-minute conditions for the next hour, where available.
    pub fn minutely(&self) -> Option<&DataBlock> {
        self.payload.minutely.as_ref()
    }

    /// Hour-by-hour conditions out to 48 hours.
    pub fn hourly(&self) -> Option<&DataBlock> {
        self.payload.hourly.as_ref()
    }

    /// Day-by-day conditions out to a week.
    pub fn daily(&self) -> Option<&DataBlock> {
        self.payload.daily.as_ref()
    }

    /// Severe weather alerts covering the requested location; empty when
    /// none are in effect.
    pub fn alerts(&self) -> &[Alert] {
        &self.payload.alerts
    }

    /// Metadata about how the request was serviced.
    pub fn flags(&self) -> Option<&Flags> {
        self.payload.flags.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::decode::decode_body;

    fn sample_report() -> ForecastReport {
        let payload = decode_body(
            r#"{
                "latitude": 51.5074,
                "longitude": -0.1278,
                "timezone": "Europe/London",
                "offset": 0,
                "currently": {"time": 1362268800, "temperature": 41.0},
                "minutely": {
                    "summary": "Drizzle",
                    "data": [{"time": 1362268800}, {"time": 1362268860}, {"time": 1362268920}]
                },
                "alerts": [{"title": "Flood Warning", "expires": 1362355200}],
                "flags": {"sources": ["datapoint"], "units": "uk"}
            }"#,
        )
        .unwrap();
        ForecastReport::new(payload)
    }

    #[test]
    fn accessors_mirror_the_payload() {
        let report = sample_report();

        assert_eq!(report.latitude(), 51.5074);
        assert_eq!(report.longitude(), -0.1278);
        assert_eq!(report.timezone(), "Europe/London");
        assert_eq!(report.offset(), 0.0);
        assert_eq!(report.currently().temperature, Some(41.0));
    }

    #[test]
    fn absent_blocks_are_none_and_present_blocks_are_indexable() {
        let report = sample_report();

        assert!(report.hourly().is_none());
        assert!(report.daily().is_none());

        let minutely = report.minutely().unwrap();
        assert_eq!(minutely.len(), 3);
        assert_eq!(minutely.point(1).map(|p| p.time), Some(1362268860));
    }

    #[test]
    fn alerts_and_flags_come_through() {
        let report = sample_report();

        assert_eq!(report.alerts().len(), 1);
        assert_eq!(report.alerts()[0].title.as_deref(), Some("Flood Warning"));

        let flags = report.flags().unwrap();
        assert_eq!(flags.units.as_deref(), Some("uk"));
        assert!(!flags.is_darksky_unavailable());
    }
}
