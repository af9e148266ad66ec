use crate::request::query::ForecastQuery;

const API_URL: &str = "https://api.forecast.io/forecast";

/// Builds the request URL for one validated query:
/// `{base}/{key}/{latitude},{longitude}[,{time}]`, followed by a query
/// string carrying whichever modifiers are present, omitted entirely when
/// none are.
pub(crate) fn build_request_url(api_key: &str, query: &ForecastQuery) -> String {
    let mut url = format!(
        "{}/{}/{},{}",
        API_URL, api_key, query.latitude, query.longitude
    );
    if let Some(time) = query.time {
        url.push_str(&format!(",{time}"));
    }

    let mut params: Vec<(&str, &str)> = Vec::new();
    if let Some(units) = &query.units {
        params.push(("units", units));
    }
    if let Some(exclude) = &query.exclude {
        params.push(("exclude", exclude));
    }
    if let Some(extend) = &query.extend {
        params.push(("extend", extend));
    }
    if let Some(callback) = &query.callback {
        params.push(("callback", callback));
    }
    if !params.is_empty() {
        let encoded: Vec<String> = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect();
        url.push('?');
        url.push_str(&encoded.join("&"));
    }

    url
}
