//! # Nearest Tide Gauge Search
//!
//! Downloads the full tide gauge directory in one request and picks the station
//! closest to the query coordinate with a single linear scan. At a few hundred
//! gauges there is no need for a spatial index.
//!
//! ## Directory Records
//! Each record is read leniently from its raw JSON:
//! - **id**: `stationReference`, falling back to `notation`
//! - **name**: `label` (first entry when the directory lists several)
//! - **position**: numeric `lat` and `long`; records missing either are skipped
//! - **town**: optional `town`
//!
//! Ties on distance go to the station listed first.

use crate::api::{items_array, FloodMonitoringApi};
use crate::error::BeachError;
use crate::geo::distance_km;
use crate::{Coordinate, Station};
use serde_json::Value;
use tracing::{debug, info};

/// Find the tide gauge nearest to `query`.
///
/// # Errors
/// - [`BeachError::SourceUnavailable`] if the directory cannot be fetched or parsed
/// - [`BeachError::NotFound`] if no listed station has usable coordinates
pub async fn find_nearest_station(
    api: &FloodMonitoringApi,
    query: Coordinate,
) -> Result<Station, BeachError> {
    let payload = api.get_json(api.stations_url()).await?;
    let records = items_array(&payload)?;
    debug!(count = records.len(), "station directory fetched");

    let station = nearest_station(query, records).ok_or(BeachError::NotFound)?;
    info!(
        station_id = %station.id,
        name = %station.name,
        distance_km = station.distance_km,
        "nearest tide gauge"
    );
    Ok(station)
}

/// Select the directory record closest to `query`.
///
/// Returns `None` when no record has both coordinates and an identifier.
pub fn nearest_station(query: Coordinate, records: &[Value]) -> Option<Station> {
    let mut nearest: Option<(&Value, Coordinate, f64)> = None;

    for record in records {
        let Some(position) = record_position(record) else {
            continue;
        };
        if record_id(record).is_none() {
            continue;
        }

        let distance = distance_km(query, position);
        // Strict comparison keeps the first of equally distant stations.
        if nearest.map_or(true, |(_, _, best)| distance < best) {
            nearest = Some((record, position, distance));
        }
    }

    nearest.and_then(|(record, coordinate, distance)| {
        let id = record_id(record)?;
        Some(Station {
            name: first_text(record.get("label")).unwrap_or_else(|| id.clone()),
            town: first_text(record.get("town")),
            id,
            coordinate,
            distance_km: distance,
            raw: record.clone(),
        })
    })
}

fn record_position(record: &Value) -> Option<Coordinate> {
    let latitude = record.get("lat")?.as_f64()?;
    let longitude = record.get("long")?.as_f64()?;
    Some(Coordinate::new_unchecked(latitude, longitude))
}

fn record_id(record: &Value) -> Option<String> {
    first_text(record.get("stationReference")).or_else(|| first_text(record.get("notation")))
}

/// A non-empty string, or the first non-empty string of a list.
fn first_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(values) => values
            .iter()
            .find_map(|v| v.as_str().filter(|s| !s.is_empty()))
            .map(str::to_string),
        _ => None,
    }
}
