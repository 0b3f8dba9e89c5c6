//! # Error Types
//!
//! Every failure in a beach check is a terminal, reportable outcome of that one
//! query. [`BeachError`] is the taxonomy handed to the front-end:
//!
//! - **SourceUnavailable**: network, timeout, HTTP status or payload fault from
//!   any of the flood-monitoring endpoints
//! - **NotFound**: the directory held no station with usable coordinates
//! - **NoData**: a station was found but neither reading tier produced two
//!   samples
//!
//! None of them are retried here; the caller may simply run the check again.

use thiserror::Error;

/// A fault talking to one of the flood-monitoring endpoints.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Transport failure, timeout or non-success HTTP status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body was not valid JSON or did not match the expected record layout
    #[error("malformed payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Configured base URL or a listed measure id is not a valid URL
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// URL parses but cannot carry a path, e.g. `mailto:`
    #[error("URL cannot be used as a base: {0}")]
    BaseUrl(String),

    /// Valid JSON, but missing a section we depend on
    #[error("unexpected payload: {0}")]
    Shape(String),
}

/// Outcome of a failed beach check.
#[derive(Error, Debug)]
pub enum BeachError {
    /// One of the external sources could not be read
    #[error("tide source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),

    /// No station with usable coordinates was listed
    #[error("no tide gauge station found")]
    NotFound,

    /// The nearest station had fewer than two readings on either tier
    #[error("no tide readings available for station {station_id}")]
    NoData {
        station_id: String,
        station_name: String,
    },
}

impl BeachError {
    /// Message suitable for showing to the person who asked.
    pub fn user_message(&self) -> String {
        match self {
            BeachError::SourceUnavailable(_) => {
                "Could not reach the tide service. Please try again in a moment.".to_string()
            }
            BeachError::NotFound => "Could not find a nearby tide station".to_string(),
            BeachError::NoData { station_name, .. } => {
                format!("Could not get tide data for {station_name}")
            }
        }
    }
}

/// Rejected user input: a coordinate outside the valid ranges.
#[derive(Error, Debug, PartialEq)]
pub enum CoordinateError {
    #[error("latitude {0} out of range [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} out of range [-180, 180]")]
    Longitude(f64),
}
