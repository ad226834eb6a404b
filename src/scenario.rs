//! Scenario table ingestion and household scenario types.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

/// Season selector controlling the heating model and event probabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Summer,
    Winter,
}

impl Season {
    /// Parses a season token, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "summer" => Some(Season::Summer),
            "winter" => Some(Season::Winter),
            _ => None,
        }
    }

    pub fn is_winter(self) -> bool {
        matches!(self, Season::Winter)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Season::Summer => write!(f, "summer"),
            Season::Winter => write!(f, "winter"),
        }
    }
}

/// Installed gas appliances as explicit flags.
///
/// Populated from the free-text `appliances` column by substring
/// containment of the four recognized tokens; anything else in the field is
/// ignored. The raw text is kept separately on [`Scenario`] for output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplianceSet {
    pub furnace: bool,
    pub stove: bool,
    pub water_heater: bool,
    pub dryer: bool,
}

impl ApplianceSet {
    /// Parses a free-text appliance list into flags.
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        Self {
            furnace: lowered.contains("furnace"),
            stove: lowered.contains("stove"),
            water_heater: lowered.contains("water_heater"),
            dryer: lowered.contains("dryer"),
        }
    }

    /// Returns `true` when no recognized appliance is installed.
    pub fn is_empty(self) -> bool {
        !(self.furnace || self.stove || self.water_heater || self.dryer)
    }
}

/// One fully specified simulated household and date range.
///
/// Built once from a scenario-table row, consumed for the full run, then
/// discarded. The date range is inclusive on both ends; the run covers
/// `[start_date 00:00, end_date 23:00]`.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub id: String,
    pub season: Season,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub home_sqft: u32,
    pub occupancy: u32,
    pub appliances: ApplianceSet,
    /// Lowercased original appliance text, copied into every output row.
    pub appliances_raw: String,
    /// Path of the hourly temperature CSV feeding this scenario.
    pub temps_csv: PathBuf,
    /// Path of the per-scenario output CSV.
    pub out_csv: PathBuf,
}

impl Scenario {
    /// Number of whole hours in the inclusive date range.
    pub fn total_hours(&self) -> usize {
        let days = (self.end_date - self.start_date).num_days() + 1;
        days as usize * 24
    }
}

/// Error raised while reading or validating the scenario table.
#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("cannot read scenario table \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("scenario table: {0}")]
    Table(#[from] csv::Error),
    #[error("scenario \"{id}\": invalid `{field}`: {message}")]
    Field {
        id: String,
        field: String,
        message: String,
    },
}

/// Raw scenario-table row, one per configured scenario.
#[derive(Debug, Deserialize)]
struct ScenarioRow {
    scenario_id: String,
    season: String,
    start_date: String,
    end_date: String,
    home_sqft: u32,
    occupancy: u32,
    appliances: String,
    temps_csv: String,
    out_csv: String,
}

impl ScenarioRow {
    fn into_scenario(self) -> Result<Scenario, ScenarioError> {
        let field_err = |field: &str, message: String| ScenarioError::Field {
            id: self.scenario_id.clone(),
            field: field.to_string(),
            message,
        };

        let season = Season::parse(&self.season).ok_or_else(|| {
            field_err(
                "season",
                format!("must be \"summer\" or \"winter\", got \"{}\"", self.season),
            )
        })?;
        let start_date = parse_date(&self.start_date).map_err(|e| field_err("start_date", e))?;
        let end_date = parse_date(&self.end_date).map_err(|e| field_err("end_date", e))?;

        if end_date < start_date {
            return Err(field_err("end_date", "must be >= start_date".to_string()));
        }
        if self.home_sqft == 0 {
            return Err(field_err("home_sqft", "must be > 0".to_string()));
        }
        if self.occupancy == 0 {
            return Err(field_err("occupancy", "must be > 0".to_string()));
        }

        let appliances_raw = self.appliances.to_lowercase();
        let appliances = ApplianceSet::parse(&appliances_raw);

        Ok(Scenario {
            id: self.scenario_id,
            season,
            start_date,
            end_date,
            home_sqft: self.home_sqft,
            occupancy: self.occupancy,
            appliances,
            appliances_raw,
            temps_csv: PathBuf::from(self.temps_csv),
            out_csv: PathBuf::from(self.out_csv),
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got \"{raw}\": {e}"))
}

/// Reads and validates the scenario table from any CSV reader.
///
/// # Errors
///
/// Returns a `ScenarioError` on malformed CSV or on the first row failing
/// validation; the whole table is rejected (fail-fast boundary).
pub fn read_scenarios(reader: impl Read) -> Result<Vec<Scenario>, ScenarioError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut scenarios = Vec::new();
    for row in rdr.deserialize::<ScenarioRow>() {
        scenarios.push(row?.into_scenario()?);
    }
    Ok(scenarios)
}

/// Reads the scenario table from a CSV file.
///
/// # Errors
///
/// Returns a `ScenarioError` if the file cannot be opened or any row is
/// malformed.
pub fn load_scenarios(path: &Path) -> Result<Vec<Scenario>, ScenarioError> {
    let file = File::open(path).map_err(|source| ScenarioError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    read_scenarios(file)
}
