//! The per-instant observation record and the time-ordered blocks that
//! group it, shared by the currently/minutely/hourly/daily sections of a
//! response.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Weather conditions at a single point in time.
///
/// Every field except `time` is optional: the API omits anything it cannot
/// determine for the requested location and moment, and which fields apply
/// depends on the block (daily points carry min/max temperatures, the
/// current point carries a nearest-storm distance, and so on).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// Unix timestamp at which the data point applies.
    pub time: i64,
    /// Human-readable summary of the conditions.
    pub summary: Option<String>,
    /// Machine-readable summary suitable for selecting an icon.
    pub icon: Option<String>,
    pub sunrise_time: Option<i64>,
    pub sunset_time: Option<i64>,
    /// Fractional lunation: 0 is a new moon, 0.5 a full moon.
    pub moon_phase: Option<f64>,
    pub nearest_storm_distance: Option<f64>,
    pub nearest_storm_bearing: Option<f64>,
    pub precip_intensity: Option<f64>,
    pub precip_intensity_max: Option<f64>,
    pub precip_intensity_max_time: Option<i64>,
    pub precip_probability: Option<f64>,
    /// "rain", "snow", "sleet" or "hail".
    pub precip_type: Option<String>,
    /// Snowfall accumulation in inches, on daily points.
    pub precip_accumulation: Option<f64>,
    pub temperature: Option<f64>,
    pub temperature_min: Option<f64>,
    pub temperature_min_time: Option<i64>,
    pub temperature_max: Option<f64>,
    pub temperature_max_time: Option<i64>,
    pub apparent_temperature: Option<f64>,
    pub apparent_temperature_min: Option<f64>,
    pub apparent_temperature_min_time: Option<i64>,
    pub apparent_temperature_max: Option<f64>,
    pub apparent_temperature_max_time: Option<i64>,
    pub dew_point: Option<f64>,
    /// Relative humidity between 0 and 1.
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    /// Direction the wind is coming from, in degrees true north.
    pub wind_bearing: Option<f64>,
    /// Sky cover between 0 and 1.
    pub cloud_cover: Option<f64>,
    pub pressure: Option<f64>,
    pub ozone: Option<f64>,
    pub visibility: Option<f64>,
}

impl DataPoint {
    /// The data point's time as UTC.
    pub fn time_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.time, 0)
    }
}

/// A time-ordered run of data points with an optional block-level summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataBlock {
    pub summary: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub data: Vec<DataPoint>,
}

impl DataBlock {
    /// Number of data points in the block.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The data point at `index`, if the block extends that far.
    pub fn point(&self, index: usize) -> Option<&DataPoint> {
        self.data.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn time_converts_to_utc() {
        let point: DataPoint = serde_json::from_str(r#"{"time": 1362268800}"#).unwrap();
        assert_eq!(
            point.time_utc(),
            Some(Utc.with_ymd_and_hms(2013, 3, 3, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn block_indexing_is_bounds_checked() {
        let block: DataBlock = serde_json::from_str(
            r#"{"summary": "Clear", "data": [{"time": 1}, {"time": 2}]}"#,
        )
        .unwrap();

        assert_eq!(block.len(), 2);
        assert_eq!(block.point(1).map(|p| p.time), Some(2));
        assert!(block.point(2).is_none());
    }
}
