use serde::Deserialize;
use serde_json::Value;

/// Miscellaneous metadata about how a request was serviced.
///
/// The presence-only entries ("darksky-unavailable", "metno-license") are
/// kept as raw values; the boolean accessors below answer the question the
/// API encodes by their mere existence.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Flags {
    #[serde(rename = "darksky-unavailable")]
    pub darksky_unavailable: Option<Value>,
    /// IDs of the radar stations used for this request.
    #[serde(rename = "darksky-stations")]
    pub darksky_stations: Option<Vec<String>>,
    #[serde(rename = "datapoint-stations")]
    pub datapoint_stations: Option<Vec<String>>,
    #[serde(rename = "isd-stations")]
    pub isd_stations: Option<Vec<String>>,
    #[serde(rename = "lamp-stations")]
    pub lamp_stations: Option<Vec<String>>,
    #[serde(rename = "metar-stations")]
    pub metar_stations: Option<Vec<String>>,
    #[serde(rename = "metno-license")]
    pub metno_license: Option<Value>,
    /// IDs of every data source consulted for this request.
    pub sources: Option<Vec<String>>,
    /// Unit system the response data is expressed in.
    pub units: Option<String>,
}

impl Flags {
    /// Whether the Dark Sky data source covers the location but was
    /// temporarily unable to serve it.
    pub fn is_darksky_unavailable(&self) -> bool {
        self.darksky_unavailable.is_some()
    }

    /// Whether api.met.no data was used, per their license agreement.
    pub fn has_metno_license(&self) -> bool {
        self.metno_license.is_some()
    }
}
