//! Runs a full beach check: nearest station, latest readings, verdict.

use crate::api::FloodMonitoringApi;
use crate::error::BeachError;
use crate::stations::find_nearest_station;
use crate::tide_data::fetch_latest_reading;
use crate::verdict::{classify, water_percent, Verdict};
use crate::{Coordinate, Station, TideReading};
use serde::Serialize;
use tracing::info;

/// Everything the front-end needs to render one answer.
///
/// Returned by value from [`check_beach`]; the caller decides whether to keep it.
#[derive(Clone, Debug, Serialize)]
pub struct BeachReport {
    /// Coordinate the check was run for
    pub query: Coordinate,
    /// Nearest tide gauge
    pub station: Station,
    /// Its latest two readings
    pub reading: TideReading,
    /// Current level normalised to the reference height, 0 to 100
    pub water_percent: f64,
    pub verdict: Verdict,
}

impl BeachReport {
    /// Assemble a report from a station and its reading.
    pub fn new(query: Coordinate, station: Station, reading: TideReading) -> Self {
        let water_percent = water_percent(reading.current_level);
        let verdict = classify(water_percent, reading.is_rising);
        Self {
            query,
            station,
            reading,
            water_percent,
            verdict,
        }
    }

    /// Share of the beach still above water, 0 to 100.
    pub fn sand_percent(&self) -> f64 {
        100.0 - self.water_percent
    }
}

/// Answer "is it beach time?" for `query`.
///
/// # Errors
/// - [`BeachError::SourceUnavailable`] if any request fails
/// - [`BeachError::NotFound`] if the directory has no usable station
/// - [`BeachError::NoData`] if the nearest station has no reading pair
pub async fn check_beach(
    api: &FloodMonitoringApi,
    query: Coordinate,
) -> Result<BeachReport, BeachError> {
    let station = find_nearest_station(api, query).await?;

    let reading = fetch_latest_reading(api, &station.id)
        .await?
        .ok_or_else(|| BeachError::NoData {
            station_id: station.id.clone(),
            station_name: station.name.clone(),
        })?;

    let report = BeachReport::new(query, station, reading);
    info!(
        station = %report.station.name,
        level_m = report.reading.current_level,
        rising = report.reading.is_rising,
        water_percent = report.water_percent,
        verdict = %report.verdict,
        "beach check complete"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn station() -> Station {
        Station {
            id: "E70039".to_string(),
            name: "Lowestoft".to_string(),
            coordinate: Coordinate::new_unchecked(52.473, 1.750),
            town: Some("Lowestoft".to_string()),
            distance_km: 0.4,
            raw: json!({}),
        }
    }

    fn reading(current: f64, previous: f64) -> TideReading {
        let at = Utc.with_ymd_and_hms(2025, 7, 24, 12, 45, 0).unwrap();
        TideReading::new(current, previous, at, json!({}))
    }

    #[test]
    fn test_report_rising_mid_tide_is_maybe() {
        let query = Coordinate::new_unchecked(52.4767, 1.7514);
        let report = BeachReport::new(query, station(), reading(3.2, 3.0));
        assert!((report.water_percent - 40.0).abs() < 1e-9);
        assert!(report.reading.is_rising);
        assert_eq!(report.verdict, Verdict::Maybe);
        assert!((report.sand_percent() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_report_low_water_is_beach() {
        let query = Coordinate::new_unchecked(52.4767, 1.7514);
        let report = BeachReport::new(query, station(), reading(-0.2, 0.1));
        assert_eq!(report.water_percent, 0.0);
        assert_eq!(report.verdict, Verdict::Beach);
    }

    #[test]
    fn test_report_serializes_for_front_end() {
        let query = Coordinate::new_unchecked(52.4767, 1.7514);
        let report = BeachReport::new(query, station(), reading(6.0, 6.1));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["verdict"], "NAH");
        assert_eq!(value["station"]["id"], "E70039");
        assert_eq!(value["reading"]["is_rising"], false);
    }
}
