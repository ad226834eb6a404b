//! CSV boundaries: temperature input and usage-table output.

/// Per-scenario usage CSV writer.
pub mod export;
/// Hourly temperature CSV reader.
pub mod temps;
