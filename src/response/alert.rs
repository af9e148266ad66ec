use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A severe weather warning issued for the requested location by a
/// governmental authority.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Alert {
    /// Short text summary of the alert.
    pub title: Option<String>,
    /// Unix timestamp at which the alert ceases to be valid.
    pub expires: Option<i64>,
    /// Detailed text description from the issuing weather service.
    pub description: Option<String>,
    /// HTTP(S) URI with detailed information about the alert.
    pub uri: Option<String>,
}

impl Alert {
    /// The expiry time as UTC.
    pub fn expires_utc(&self) -> Option<DateTime<Utc>> {
        self.expires.and_then(|t| DateTime::from_timestamp(t, 0))
    }
}
