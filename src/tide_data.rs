//! # Tide Reading Retrieval
//!
//! This module fetches the latest pair of water levels for a tide gauge. The
//! flood-monitoring service does not always expose readings on the station
//! endpoint itself, so retrieval runs in two tiers.
//!
//! ## Retrieval Tiers
//!
//! 1. **Primary**: `/id/stations/{id}/readings?_sorted&_limit=N`. Two or more
//!    items give a reading straight away (item 0 is latest, item 1 previous).
//! 2. **Fallback**: fetch the station descriptor, pick one of its measures and
//!    query that measure's readings the same way. The measure is the first one
//!    listed whose id contains `level` or `tidal` (case-insensitive).
//!
//! If neither tier yields two items the station simply has no data, which is
//! an ordinary outcome and reported as `Ok(None)`.
//!
//! ## Error Handling
//! A transport, status or payload fault on any request, in either tier, is
//! returned as a [`SourceError`]. A fallback fault is never turned into
//! "no data".

use crate::api::{items_array, FloodMonitoringApi};
use crate::error::SourceError;
use crate::TideReading;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

/// Substrings marking a water level measure id
const MEASURE_KEYWORDS: [&str; 2] = ["level", "tidal"];

/// One item of a readings response.
#[derive(Debug, Deserialize)]
struct ReadingItem {
    #[serde(rename = "dateTime")]
    date_time: DateTime<Utc>,
    value: f64,
}

/// Fetch the two most recent readings for a station.
///
/// # Returns
/// - `Ok(Some(reading))`: one of the tiers returned at least two readings
/// - `Ok(None)`: the station has no usable readings
/// - `Err(SourceError)`: a request failed or returned a malformed payload
///
/// # Example
/// ```no_run
/// use beach_or_nah_lib::{api::FloodMonitoringApi, config::Config, tide_data};
///
/// # async fn run() -> Result<(), beach_or_nah_lib::SourceError> {
/// let api = FloodMonitoringApi::new(&Config::default().api)?;
/// match tide_data::fetch_latest_reading(&api, "E70039").await? {
///     Some(reading) => println!("{:.2}m, {}", reading.current_level, reading.direction_label()),
///     None => println!("no readings"),
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch_latest_reading(
    api: &FloodMonitoringApi,
    station_id: &str,
) -> Result<Option<TideReading>, SourceError> {
    let payload = api.get_json(api.station_readings_url(station_id)).await?;
    if let Some(reading) = reading_from_payload(payload)? {
        debug!(station_id, "readings from station endpoint");
        return Ok(Some(reading));
    }

    info!(station_id, "station endpoint has fewer than two readings, checking measures");
    let descriptor = api.get_json(api.station_url(station_id)).await?;
    let measures = measure_ids(&descriptor);
    let Some(measure_id) = select_measure(&measures) else {
        info!(station_id, measures = measures.len(), "no water level measure");
        return Ok(None);
    };

    debug!(station_id, measure_id, "querying measure readings");
    let payload = api.get_json(api.measure_readings_url(measure_id)?).await?;
    let reading = reading_from_payload(payload)?;
    if reading.is_none() {
        info!(station_id, measure_id, "measure has fewer than two readings");
    }
    Ok(reading)
}

/// Build a reading from a readings response, keeping the payload as `raw`.
///
/// `Ok(None)` when the response holds fewer than two items.
pub fn reading_from_payload(payload: Value) -> Result<Option<TideReading>, SourceError> {
    let items = items_array(&payload)?;
    let [latest, previous, ..] = items else {
        return Ok(None);
    };

    let latest = ReadingItem::deserialize(latest)?;
    let previous = ReadingItem::deserialize(previous)?;

    Ok(Some(TideReading::new(
        latest.value,
        previous.value,
        latest.date_time,
        payload,
    )))
}

/// Measure ids listed by a station descriptor.
///
/// The service nests the station under `items`, and lists a lone measure as an
/// object rather than a one-element array; both layouts are accepted, as are
/// bare id strings.
pub fn measure_ids(descriptor: &Value) -> Vec<String> {
    let measures = descriptor
        .get("measures")
        .or_else(|| descriptor.get("items").and_then(|s| s.get("measures")));

    let entries: Vec<&Value> = match measures {
        Some(Value::Array(list)) => list.iter().collect(),
        Some(single @ (Value::Object(_) | Value::String(_))) => vec![single],
        _ => Vec::new(),
    };

    entries
        .into_iter()
        .filter_map(|m| match m {
            Value::String(id) => Some(id.clone()),
            other => other.get("@id")?.as_str().map(str::to_string),
        })
        .collect()
}

/// Pick the measure to query: the first listed id containing `level` or
/// `tidal`, in any case.
pub fn select_measure(measure_ids: &[String]) -> Option<&str> {
    measure_ids
        .iter()
        .find(|id| {
            let id = id.to_lowercase();
            MEASURE_KEYWORDS.iter().any(|keyword| id.contains(keyword))
        })
        .map(String::as_str)
}
