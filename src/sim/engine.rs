//! Hourly synthesis engine: composes heating, events, and jitter per hour.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveTime, Timelike};

use super::events::{self, DayPlan, EventScheduler};
use super::heating;
use super::jitter;
use super::seed;
use super::types::{self, HourlyRecord};
use crate::io::temps::TemperatureSeries;
use crate::scenario::Scenario;

/// Per-scenario synthesis engine.
///
/// Owns nothing mutable between runs: all randomness is derived from the
/// global seed and the scenario id, so a second [`Engine::run`] over the
/// same inputs reproduces the identical record vector.
pub struct Engine<'a> {
    scenario: &'a Scenario,
    temps: &'a TemperatureSeries,
    global_seed: u64,
}

impl<'a> Engine<'a> {
    pub fn new(scenario: &'a Scenario, temps: &'a TemperatureSeries, global_seed: u64) -> Self {
        Self {
            scenario,
            temps,
            global_seed,
        }
    }

    /// Synthesizes the full hourly series, one record per hour in
    /// `[start_date 00:00, end_date 23:00]` inclusive.
    ///
    /// Infallible by design: temperature gaps fall back to the default and
    /// every other input was validated at the configuration boundary.
    pub fn run(&self) -> Vec<HourlyRecord> {
        let sc = self.scenario;
        let mut rng = seed::scenario_rng(self.global_seed, &sc.id);

        // Scenario-stream consumption order is fixed: dryer schedule,
        // lunch toggle, then per-day plan draws interleaved with per-hour
        // jitter draws.
        let dryer_hours = if sc.appliances.dryer {
            events::dryer_schedule(sc.start_date, sc.end_date, sc.occupancy, &mut rng)
        } else {
            HashSet::new()
        };
        let scheduler = EventScheduler::new(sc, &mut rng);

        let heating_active = sc.season.is_winter() && sc.appliances.furnace;
        let heat_base = heating::base_rate(sc.home_sqft);
        let avg_usage = types::hourly_avg_usage(sc.season, sc.occupancy, sc.home_sqft);

        let start_ts = sc.start_date.and_time(NaiveTime::MIN);
        let end_ts = sc.end_date.and_time(NaiveTime::MIN) + Duration::hours(23);

        let mut records = Vec::with_capacity(sc.total_hours());
        let mut plan_date: Option<NaiveDate> = None;
        let mut day_plan = DayPlan::empty();

        let mut ts = start_ts;
        while ts <= end_ts {
            let date = ts.date();
            let hour = ts.time().hour() as usize;

            if plan_date != Some(date) {
                day_plan = scheduler.plan_day(date, &mut rng);
                plan_date = Some(date);
            }

            let temp_f = self.temps.temp_at(ts);

            // 1. Seasonal heating (winter scenarios with a furnace only).
            let mut usage = 0.0_f32;
            if heating_active {
                usage += heating::heating_therms(temp_f, heat_base);
            }

            // 2. Appliance events stack additively, season-independent.
            usage += day_plan.cooking_at(hour);
            if day_plan.shower_at(hour) {
                usage += events::SHOWER_THERMS;
            }
            if dryer_hours.contains(&ts) {
                usage += events::DRYER_THERMS_PER_LOAD;
            }

            // 3. Jitter non-zero totals; zero hours stay exactly zero.
            if usage > 0.0 {
                usage = jitter::apply(usage, &mut rng);
            }
            let usage_therms = types::round3(usage).max(0.0);

            // 4. Assemble the output row.
            records.push(HourlyRecord {
                date,
                time: ts.time(),
                temp_f: temp_f.round() as i32,
                usage_therms,
                avg_usage,
                season: sc.season,
                home_sqft: sc.home_sqft,
                occupancy: sc.occupancy,
                appliances: sc.appliances_raw.clone(),
            });

            ts += Duration::hours(1);
        }

        records
    }
}
