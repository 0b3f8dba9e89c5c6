//! # Flood-Monitoring HTTP Client
//!
//! Thin wrapper around one `reqwest::Client` for the Environment Agency
//! flood-monitoring API. Every call is a single GET with the configured
//! timeout; nothing is retried and nothing is cached.
//!
//! ## Endpoints
//! - **Directory**: `/id/stations?type=TideGauge&_limit=N`
//! - **Station readings**: `/id/stations/{id}/readings?_sorted&_limit=N`
//! - **Station descriptor**: `/id/stations/{id}`
//! - **Measure readings**: `{measure @id}/readings?_sorted&_limit=N`
//!
//! Transport errors, timeouts, non-2xx statuses and undecodable bodies all
//! come back as [`SourceError`].

use crate::config::ApiConfig;
use crate::error::SourceError;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Client for the flood-monitoring endpoints used by a beach check.
#[derive(Debug, Clone)]
pub struct FloodMonitoringApi {
    client: reqwest::Client,
    base_url: Url,
    station_limit: u32,
    reading_limit: u32,
}

impl FloodMonitoringApi {
    /// Build a client from the `[api]` section of the configuration.
    pub fn new(config: &ApiConfig) -> Result<Self, SourceError> {
        let base_url = Url::parse(&config.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(SourceError::BaseUrl(config.base_url.clone()));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            station_limit: config.station_limit,
            reading_limit: config.reading_limit,
        })
    }

    /// URL of the tide gauge directory listing.
    pub fn stations_url(&self) -> Url {
        let mut url = with_segments(self.base_url.clone(), &["id", "stations"]);
        url.query_pairs_mut()
            .append_pair("type", "TideGauge")
            .append_pair("_limit", &self.station_limit.to_string());
        url
    }

    /// URL of a station's newest-first readings.
    pub fn station_readings_url(&self, station_id: &str) -> Url {
        let url = with_segments(
            self.base_url.clone(),
            &["id", "stations", station_id, "readings"],
        );
        self.sorted_readings(url)
    }

    /// URL of a station's descriptor, which lists its measures.
    pub fn station_url(&self, station_id: &str) -> Url {
        with_segments(self.base_url.clone(), &["id", "stations", station_id])
    }

    /// URL of a measure's newest-first readings. Measure ids are absolute URLs.
    pub fn measure_readings_url(&self, measure_id: &str) -> Result<Url, SourceError> {
        let measure = Url::parse(measure_id)?;
        if measure.cannot_be_a_base() {
            return Err(SourceError::BaseUrl(measure_id.to_string()));
        }
        Ok(self.sorted_readings(with_segments(measure, &["readings"])))
    }

    fn sorted_readings(&self, mut url: Url) -> Url {
        url.set_query(Some(&format!("_sorted&_limit={}", self.reading_limit)));
        url
    }

    /// GET a URL and decode the body as JSON.
    pub async fn get_json(&self, url: Url) -> Result<Value, SourceError> {
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

/// Append percent-encoded path segments, dropping any trailing slash first.
/// `url` must be able to act as a base; both callers check this.
fn with_segments(mut url: Url, segments: &[&str]) -> Url {
    url.set_query(None);
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

/// The `items` array of a list response.
///
/// A missing or null `items` reads as an empty list; any other non-array value
/// is a malformed payload.
pub fn items_array(payload: &Value) -> Result<&[Value], SourceError> {
    match payload.get("items") {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(SourceError::Shape(format!(
            "expected `items` to be a list, got {}",
            kind_of(other)
        ))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::json;

    fn api() -> FloodMonitoringApi {
        let mut config = Config::default().api;
        config.base_url = "http://example.test/flood-monitoring/".to_string();
        FloodMonitoringApi::new(&config).unwrap()
    }

    #[test]
    fn test_urls() {
        let api = api();
        assert_eq!(
            api.stations_url().as_str(),
            "http://example.test/flood-monitoring/id/stations?type=TideGauge&_limit=1000"
        );
        assert_eq!(
            api.station_readings_url("E70039").as_str(),
            "http://example.test/flood-monitoring/id/stations/E70039/readings?_sorted&_limit=10"
        );
        assert_eq!(
            api.station_url("E70039").as_str(),
            "http://example.test/flood-monitoring/id/stations/E70039"
        );
        assert_eq!(
            api.measure_readings_url("http://example.test/id/measures/E70039-level-tidal_level")
                .unwrap()
                .as_str(),
            "http://example.test/id/measures/E70039-level-tidal_level/readings?_sorted&_limit=10"
        );
    }

    #[test]
    fn test_station_ids_are_percent_encoded() {
        let api = api();
        assert_eq!(
            api.station_readings_url("A/B?c d").as_str(),
            "http://example.test/flood-monitoring/id/stations/A%2FB%3Fc%20d/readings?_sorted&_limit=10"
        );
        assert_eq!(
            api.station_url("0001/x").as_str(),
            "http://example.test/flood-monitoring/id/stations/0001%2Fx"
        );
    }

    #[test]
    fn test_root_base_url() {
        let mut config = Config::default().api;
        config.base_url = "http://127.0.0.1:5000".to_string();
        let api = FloodMonitoringApi::new(&config).unwrap();
        assert_eq!(
            api.station_url("E1").as_str(),
            "http://127.0.0.1:5000/id/stations/E1"
        );
    }

    #[test]
    fn test_invalid_urls_are_rejected() {
        let mut config = Config::default().api;
        config.base_url = "not a url".to_string();
        assert!(matches!(
            FloodMonitoringApi::new(&config),
            Err(SourceError::Url(_))
        ));

        config.base_url = "mailto:tides@example.test".to_string();
        assert!(matches!(
            FloodMonitoringApi::new(&config),
            Err(SourceError::BaseUrl(_))
        ));

        assert!(matches!(
            api().measure_readings_url("E1-level"),
            Err(SourceError::Url(_))
        ));
    }

    #[test]
    fn test_items_array() {
        assert_eq!(items_array(&json!({"items": [1, 2]})).unwrap().len(), 2);
        assert!(items_array(&json!({})).unwrap().is_empty());
        assert!(items_array(&json!({"items": null})).unwrap().is_empty());
        assert!(matches!(
            items_array(&json!({"items": "nope"})),
            Err(SourceError::Shape(_))
        ));
    }
}
