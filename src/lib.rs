//! # Beach or Nah Core Library
//!
//! This library answers a single question for a coordinate: is it beach time
//! right now? It finds the nearest tide gauge published by the Environment
//! Agency flood-monitoring service, reads its two most recent water levels and
//! turns them into a three-way verdict.
//!
//! ## Data Flow
//!
//! 1. **Locate**: Download the tide gauge directory → drop stations without
//!    coordinates → pick the minimum haversine distance ([`stations`])
//! 2. **Read**: Fetch the latest two readings for that station, falling back to
//!    the station's water-level measure when the station endpoint is empty
//!    ([`tide_data`])
//! 3. **Classify**: Normalise the current level against an 8 m reference height
//!    and map it, with the rising/falling flag, to a [`verdict::Verdict`]
//! 4. **Report**: Hand a caller-owned [`beach::BeachReport`] back to the
//!    front-end. Nothing is cached between queries.
//!
//! ## Core Types
//!
//! - [`Coordinate`]: a validated latitude/longitude pair
//! - [`Station`]: the nearest tide gauge, with its distance from the query
//! - [`TideReading`]: the latest pair of water levels for a station

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod api;
pub mod beach;
pub mod config;
pub mod error;
pub mod geo;
pub mod logging;
pub mod renderer;
pub mod stations;
pub mod tide_data;
pub mod verdict;

pub use error::{BeachError, CoordinateError, SourceError};

/// A point on the Earth's surface in decimal degrees (WGS84).
///
/// # Example
/// ```
/// use beach_or_nah_lib::Coordinate;
///
/// let lowestoft = Coordinate::new(52.4767, 1.7514).unwrap();
/// assert_eq!(lowestoft.latitude, 52.4767);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees, -90 to 90
    pub latitude: f64,
    /// Longitude in degrees, -180 to 180
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting values outside the valid ranges.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build a coordinate without range checks. Use with trusted inputs only,
    /// e.g. positions that came back from the station directory.
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The tide gauge closest to a query coordinate.
///
/// Built fresh for every search and owned by the caller; it is never cached.
#[derive(Clone, Debug, Serialize)]
pub struct Station {
    /// `stationReference`, or `notation` when the reference is absent
    pub id: String,
    /// Human-readable station label
    pub name: String,
    /// Gauge position
    pub coordinate: Coordinate,
    /// Nearest town, when the directory lists one
    pub town: Option<String>,
    /// Great-circle distance from the query coordinate
    pub distance_km: f64,
    /// The directory record exactly as received, for diagnostics
    pub raw: serde_json::Value,
}

/// The two most recent water levels reported for a station.
///
/// A reading only exists when the source returned at least two samples;
/// anything less is reported as no data rather than zeros.
#[derive(Clone, Debug, Serialize)]
pub struct TideReading {
    /// Latest water level in meters
    pub current_level: f64,
    /// The sample before the latest one, in meters
    pub previous_level: f64,
    /// Time of the latest sample
    pub timestamp: DateTime<Utc>,
    /// `current_level > previous_level`; equal levels count as falling
    pub is_rising: bool,
    /// The readings response exactly as received, for diagnostics
    pub raw: serde_json::Value,
}

impl TideReading {
    /// Build a reading from the latest and previous samples.
    pub fn new(
        current_level: f64,
        previous_level: f64,
        timestamp: DateTime<Utc>,
        raw: serde_json::Value,
    ) -> Self {
        Self {
            current_level,
            previous_level,
            timestamp,
            is_rising: current_level > previous_level,
            raw,
        }
    }

    /// "Rising" or "Falling", as shown next to the tide height.
    pub fn direction_label(&self) -> &'static str {
        if self.is_rising {
            "Rising"
        } else {
            "Falling"
        }
    }
}
