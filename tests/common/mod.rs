//! Shared test fixtures for integration tests.

use chrono::NaiveDate;
use std::path::PathBuf;

use gas_sim::io::temps::TemperatureSeries;
use gas_sim::scenario::{ApplianceSet, Scenario, Season};

/// Builds a scenario with the given shape; paths are placeholders since
/// integration tests run the pipeline in memory.
pub fn scenario(
    id: &str,
    season: Season,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    home_sqft: u32,
    occupancy: u32,
    appliances: &str,
) -> Scenario {
    Scenario {
        id: id.to_string(),
        season,
        start_date: date(start),
        end_date: date(end),
        home_sqft,
        occupancy,
        appliances: ApplianceSet::parse(appliances),
        appliances_raw: appliances.to_string(),
        temps_csv: PathBuf::from("temps.csv"),
        out_csv: PathBuf::from("out.csv"),
    }
}

pub fn date((y, m, d): (i32, u32, u32)) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Builds a temperature trace holding `temp_f` for every hour of the
/// inclusive date range.
pub fn flat_temps(start: (i32, u32, u32), end: (i32, u32, u32), temp_f: f32) -> TemperatureSeries {
    let mut csv = String::from("date,time,temp\n");
    let mut day = date(start);
    let last = date(end);
    while day <= last {
        for h in 0..24 {
            csv.push_str(&format!("{day},{h:02}:00:00,{temp_f}\n"));
        }
        day = day.succ_opt().expect("valid successor date");
    }
    TemperatureSeries::from_reader(csv.as_bytes()).expect("trace should parse")
}
