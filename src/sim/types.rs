//! Output record type and scenario-wide usage targets.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};

use crate::scenario::Season;

/// One output row: the usage synthesized for a single hour plus a copy of
/// the scenario metadata.
///
/// Append-only; records are never mutated after assembly. `usage_therms`
/// is already rounded to 3 decimals and `avg_usage` to 6, so formatting at
/// the CSV boundary is lossless.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Ambient temperature rounded to the nearest whole °F.
    pub temp_f: i32,
    /// Synthesized usage for this hour, therms.
    pub usage_therms: f32,
    /// Scenario-wide hourly average target; identical on every row.
    pub avg_usage: f32,
    pub season: Season,
    pub home_sqft: u32,
    pub occupancy: u32,
    /// Lowercased appliance text from the scenario table.
    pub appliances: String,
}

impl fmt::Display for HourlyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | {:>4}°F | {:.3} therms",
            self.date, self.time, self.temp_f, self.usage_therms
        )
    }
}

/// Target daily total in therms, from the season-specific lookup tables.
///
/// Summer targets index by occupancy, winter targets by floor area;
/// unlisted values fall back to a mid-range default. Used only for the
/// `avg_usage` output column, never fed back into synthesis.
pub fn daily_target_therms(season: Season, occupancy: u32, home_sqft: u32) -> f32 {
    match season {
        Season::Summer => match occupancy {
            1 => 0.20,
            2 => 0.35,
            3 => 0.50,
            4 => 0.60,
            5 => 0.70,
            _ => 0.50,
        },
        Season::Winter => match home_sqft {
            1000 => 2.0,
            1200 => 2.25,
            1400 => 2.5,
            1600 => 2.7,
            1800 => 3.0,
            2000 => 3.0,
            2200 => 3.5,
            2400 => 3.8,
            2600 => 4.1,
            2800 => 4.4,
            3000 => 4.75,
            _ => 3.0,
        },
    }
}

/// Scenario-wide `avg_usage` figure: daily target spread over 24 hours.
pub fn hourly_avg_usage(season: Season, occupancy: u32, home_sqft: u32) -> f32 {
    round6(daily_target_therms(season, occupancy, home_sqft) / 24.0)
}

/// Rounds to 3 decimal places.
pub fn round3(value: f32) -> f32 {
    (value * 1_000.0).round() / 1_000.0
}

/// Rounds to 6 decimal places.
pub fn round6(value: f32) -> f32 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
