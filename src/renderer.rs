//! # Terminal Rendering
//!
//! Turns a [`BeachReport`] into the text shown by the command-line front-end:
//! the station line, the verdict, the tide details and a sand/water bar. The
//! debug view appends the raw payloads the answer was built from.
//!
//! Rendering returns a `String` so callers decide where it goes and tests can
//! inspect it.

use crate::beach::BeachReport;
use crate::error::BeachError;

/// Width of the sand/water bar in characters
const BAR_WIDTH: usize = 40;

/// Render a successful check.
pub fn render_report(report: &BeachReport, debug: bool) -> String {
    let station = &report.station;
    let reading = &report.reading;

    let place = match &station.town {
        Some(town) if town != &station.name => format!("{} ({town})", station.name),
        _ => station.name.clone(),
    };
    let arrow = if reading.is_rising { '↑' } else { '↓' };

    let mut lines = vec![
        format!("{place} • {:.1}km away", station.distance_km),
        String::new(),
        format!("    {}", report.verdict),
        String::new(),
        format!(
            "Tide: {} {arrow}   Height: {:.2}m   Time: {} UTC",
            reading.direction_label(),
            reading.current_level,
            reading.timestamp.format("%H:%M")
        ),
        sand_water_bar(report.water_percent),
        format!(
            "SAND ({:.0}%)  WATER ({:.0}%)",
            report.sand_percent(),
            report.water_percent
        ),
    ];

    if debug {
        let query = serde_json::json!({
            "latitude": report.query.latitude,
            "longitude": report.query.longitude,
        });
        lines.extend([
            String::new(),
            "── API debug info ──".to_string(),
            "Your location:".to_string(),
            pretty(&query),
            format!("Selected station ({:.2} km):", station.distance_km),
            pretty(&station.raw),
            "Tide readings:".to_string(),
            pretty(&reading.raw),
        ]);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Render a failed check as a user-facing message.
pub fn render_failure(error: &BeachError) -> String {
    format!("❌ {}", error.user_message())
}

/// `[####......]` where `#` is sand and `~` is water.
fn sand_water_bar(water_percent: f64) -> String {
    let water = ((water_percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    let water = water.min(BAR_WIDTH);
    format!("[{}{}]", "#".repeat(BAR_WIDTH - water), "~".repeat(water))
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
