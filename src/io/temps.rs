//! Hourly outdoor-temperature input.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;

/// Fallback temperature for hours missing from the input trace, °F.
///
/// Missing hours are the one documented leniency in the whole pipeline:
/// they degrade to this default instead of failing the scenario.
pub const DEFAULT_TEMP_F: f32 = 72.0;

/// Error raised while reading the temperature table.
#[derive(Debug, Error)]
pub enum TempsError {
    #[error("cannot read temperature table \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("temperature table: {0}")]
    Table(#[from] csv::Error),
    #[error("temperature table: bad timestamp \"{value}\": {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// One temperature-table row.
#[derive(Debug, Deserialize)]
struct TempRow {
    date: String,
    time: String,
    temp: f32,
}

/// Read-only mapping from hour timestamp to ambient temperature, °F.
#[derive(Debug, Clone, Default)]
pub struct TemperatureSeries {
    by_hour: HashMap<NaiveDateTime, f32>,
}

impl TemperatureSeries {
    /// Loads the series from a CSV file with columns `date,time,temp`.
    ///
    /// # Errors
    ///
    /// Returns a `TempsError` if the file cannot be opened or any row is
    /// malformed.
    pub fn from_path(path: &Path) -> Result<Self, TempsError> {
        let file = File::open(path).map_err(|source| TempsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(file)
    }

    /// Loads the series from any CSV reader.
    ///
    /// # Errors
    ///
    /// Returns a `TempsError` on malformed CSV or unparsable timestamps.
    pub fn from_reader(reader: impl Read) -> Result<Self, TempsError> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut by_hour = HashMap::new();
        for row in rdr.deserialize::<TempRow>() {
            let row = row?;
            let raw = format!("{} {}", row.date, row.time);
            let ts = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S")
                .map_err(|source| TempsError::Timestamp { value: raw, source })?;
            by_hour.insert(ts, row.temp);
        }
        Ok(Self { by_hour })
    }

    /// Temperature at the given hour, falling back to [`DEFAULT_TEMP_F`]
    /// when the trace has no entry.
    pub fn temp_at(&self, ts: NaiveDateTime) -> f32 {
        self.by_hour.get(&ts).copied().unwrap_or(DEFAULT_TEMP_F)
    }

    /// Number of hours present in the trace.
    pub fn len(&self) -> usize {
        self.by_hour.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_hour.is_empty()
    }
}
