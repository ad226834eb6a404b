//! Hourly synthesis engine and its supporting models.

/// Per-scenario hourly synthesis engine.
pub mod engine;
/// Appliance event scheduling (meals, showers, dryer loads).
pub mod events;
pub mod heating;
pub mod jitter;
/// Post-run usage summary.
pub mod kpi;
/// Deterministic seed derivation.
pub mod seed;
pub mod types;
