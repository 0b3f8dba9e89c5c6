//! # Beach Verdict
//!
//! Maps how full the tide is, and whether it is coming in, to one of three
//! answers. The decision table is evaluated top to bottom, first match wins:
//!
//! | Water percent            | Rising | Verdict |
//! |--------------------------|--------|---------|
//! | < 30                     | any    | BEACH   |
//! | < 60                     | no     | BEACH   |
//! | > 70                     | any    | NAH     |
//! | otherwise                | any    | MAYBE   |
//!
//! A rising tide between 30 and 60 percent therefore lands on MAYBE.

use serde::Serialize;
use std::fmt;

/// Assumed maximum tidal range in meters.
///
/// A flat approximation shared by every station; real ranges vary by location.
pub const REFERENCE_HEIGHT_M: f64 = 8.0;

/// Answer to "is it beach time?"
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Beach,
    Maybe,
    Nah,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Beach => "BEACH!",
            Verdict::Maybe => "MAYBE?",
            Verdict::Nah => "NAH.",
        };
        f.write_str(label)
    }
}

/// Classify a water percentage (0 to 100) and tide direction.
pub fn classify(water_percent: f64, is_rising: bool) -> Verdict {
    if water_percent < 30.0 {
        Verdict::Beach
    } else if water_percent < 60.0 && !is_rising {
        Verdict::Beach
    } else if water_percent > 70.0 {
        Verdict::Nah
    } else {
        Verdict::Maybe
    }
}

/// Current level as a percentage of [`REFERENCE_HEIGHT_M`], clamped to 0..=100.
pub fn water_percent(current_level_m: f64) -> f64 {
    (current_level_m / REFERENCE_HEIGHT_M * 100.0).clamp(0.0, 100.0)
}
