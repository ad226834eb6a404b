//! Appliance event scheduling: meals, showers, and dryer loads.
//!
//! Events are decided per calendar day and cached by the engine. The
//! scenario stream covers appliance-independent choices (dinner hour,
//! shower hours, the once-per-scenario lunch toggle, dryer shuffles); a
//! fresh day stream gates whether each meal actually fires on that day.

use std::collections::HashSet;

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use rand::{Rng, rngs::StdRng, seq::SliceRandom};

use super::seed;
use crate::scenario::{Scenario, Season};

/// Flat contribution of a shower hour, therms.
///
/// Contribution is by hour membership, not occupant count: several
/// occupants landing on the same hour still add exactly one shower's worth.
pub const SHOWER_THERMS: f32 = 0.10;

/// Flat contribution of a scheduled dryer load, therms.
pub const DRYER_THERMS_PER_LOAD: f32 = 0.30;

/// Breakfast is always the 7 AM slot.
const BREAKFAST_HOUR: usize = 7;

/// The optional lunch slot sits at 11 AM.
const LUNCH_HOUR: usize = 11;

/// Probability that a scenario has a lunch slot at all.
const LUNCH_SLOT_PROBABILITY: f32 = 0.4;

/// Shower hours: morning or evening.
const SHOWER_HOURS: [usize; 2] = [7, 20];

/// Per-meal therm ranges before the occupancy factor.
const BREAKFAST_THERMS: (f32, f32) = (0.02, 0.025);
const LUNCH_THERMS: (f32, f32) = (0.012, 0.018);
const DINNER_THERMS: (f32, f32) = (0.025, 0.035);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meal {
    Breakfast,
    Lunch,
    Dinner,
}

/// Occupancy-indexed scaling factor applied to fired meal sizes.
pub fn occupancy_factor(occupancy: u32) -> f32 {
    match occupancy {
        1 => 0.6,
        2 => 0.8,
        3 => 1.0,
        4 => 1.2,
        5 => 1.3,
        _ => 1.0,
    }
}

/// Probability that a meal slot fires on a given day.
///
/// Winter raises all three probabilities and flattens the occupancy
/// distinction; summer singles-occupant households cook less often.
fn meal_probability(meal: Meal, season: Season, occupancy: u32) -> f32 {
    match (season, meal) {
        (Season::Summer, Meal::Breakfast) => {
            if occupancy == 1 {
                0.30
            } else {
                0.6
            }
        }
        (Season::Summer, Meal::Lunch) => 0.25,
        (Season::Summer, Meal::Dinner) => {
            if occupancy == 1 {
                0.80
            } else {
                0.9
            }
        }
        (Season::Winter, Meal::Breakfast) => 0.75,
        (Season::Winter, Meal::Lunch) => 0.4,
        (Season::Winter, Meal::Dinner) => 0.9,
    }
}

fn meal_therms_range(meal: Meal) -> (f32, f32) {
    match meal {
        Meal::Breakfast => BREAKFAST_THERMS,
        Meal::Lunch => LUNCH_THERMS,
        Meal::Dinner => DINNER_THERMS,
    }
}

/// Resolved events for one calendar day.
#[derive(Debug, Clone)]
pub struct DayPlan {
    /// Cooking therms per hour of day; zero where no meal fired.
    cooking_therms: [f32; 24],
    /// Hours with at least one shower assigned.
    shower_hours: [bool; 24],
}

impl DayPlan {
    /// A day with no events; cooking and showers all zero.
    pub fn empty() -> Self {
        Self {
            cooking_therms: [0.0; 24],
            shower_hours: [false; 24],
        }
    }

    /// Cooking contribution at this hour of day, therms.
    pub fn cooking_at(&self, hour: usize) -> f32 {
        self.cooking_therms[hour]
    }

    /// Whether a shower hour contribution applies at this hour of day.
    pub fn shower_at(&self, hour: usize) -> bool {
        self.shower_hours[hour]
    }
}

/// Decides which appliance events fire for a given scenario day.
///
/// Holds the scenario-constant inputs plus the once-per-scenario lunch
/// toggle; per-day draws are taken from the streams passed into
/// [`EventScheduler::plan_day`].
#[derive(Debug)]
pub struct EventScheduler {
    scenario_id: String,
    season: Season,
    occupancy: u32,
    has_stove: bool,
    has_water_heater: bool,
    lunch_enabled: bool,
}

impl EventScheduler {
    /// Builds a scheduler, drawing the lunch-slot toggle from the scenario
    /// stream (one draw, stove scenarios only; not re-rolled per day).
    pub fn new(scenario: &Scenario, rng: &mut StdRng) -> Self {
        let has_stove = scenario.appliances.stove;
        let lunch_enabled = has_stove && rng.random::<f32>() < LUNCH_SLOT_PROBABILITY;
        Self {
            scenario_id: scenario.id.clone(),
            season: scenario.season,
            occupancy: scenario.occupancy,
            has_stove,
            has_water_heater: scenario.appliances.water_heater,
            lunch_enabled,
        }
    }

    /// Resolves the events of one calendar day.
    ///
    /// Scenario-stream draws happen in a fixed order (dinner hour, then one
    /// shower draw per occupant); meal gates and sizes come from a fresh
    /// day stream so that event presence is independent day to day yet
    /// reproducible.
    pub fn plan_day(&self, date: NaiveDate, rng: &mut StdRng) -> DayPlan {
        let mut plan = DayPlan::empty();

        if self.has_stove {
            let dinner_hour: usize = rng.random_range(18..=20);
            let mut day_rng = seed::day_rng(&self.scenario_id, date, self.season);
            self.roll_meal(Meal::Breakfast, BREAKFAST_HOUR, &mut day_rng, &mut plan);
            if self.lunch_enabled {
                self.roll_meal(Meal::Lunch, LUNCH_HOUR, &mut day_rng, &mut plan);
            }
            self.roll_meal(Meal::Dinner, dinner_hour, &mut day_rng, &mut plan);
        }

        if self.has_water_heater {
            for _ in 0..self.occupancy {
                let hour = SHOWER_HOURS[rng.random_range(0..SHOWER_HOURS.len())];
                plan.shower_hours[hour] = true;
            }
        }

        plan
    }

    fn roll_meal(&self, meal: Meal, hour: usize, day_rng: &mut StdRng, plan: &mut DayPlan) {
        if day_rng.random::<f32>() < meal_probability(meal, self.season, self.occupancy) {
            let (lo, hi) = meal_therms_range(meal);
            let therms = day_rng.random_range(lo..=hi) * occupancy_factor(self.occupancy);
            plan.cooking_therms[hour] += therms;
        }
    }
}

/// Weekly dryer load count: `round(occupancy / 2)`, floored at zero.
pub fn dryer_loads_per_week(occupancy: u32) -> usize {
    (occupancy as f32 / 2.0).round().max(0.0) as usize
}

/// Computes the scenario's dryer-load hours, once, before hourly iteration.
///
/// For each 7-day block starting at `start`, candidate hours are the
/// weekday evening window (19:00–21:59) and the weekend midday window
/// (10:00–13:59) across all seven block days; candidates are shuffled with
/// the scenario stream and the first `loads_per_week` picked. The last
/// block always spans seven days even when that runs past `end`; picks
/// beyond the range are simply never reached by the engine.
pub fn dryer_schedule(
    start: NaiveDate,
    end: NaiveDate,
    occupancy: u32,
    rng: &mut StdRng,
) -> HashSet<NaiveDateTime> {
    let loads_per_week = dryer_loads_per_week(occupancy);
    let mut scheduled = HashSet::new();

    let mut week_start = start;
    while week_start <= end {
        let mut candidates: Vec<NaiveDateTime> = Vec::new();
        for offset in 0..7 {
            let day = week_start + Days::new(offset);
            let hours = if is_weekend(day) { 10..14 } else { 19..22 };
            for h in hours {
                candidates.push(day.and_time(NaiveTime::MIN) + Duration::hours(h));
            }
        }
        candidates.shuffle(rng);
        scheduled.extend(candidates.into_iter().take(loads_per_week));
        week_start = week_start + Days::new(7);
    }

    scheduled
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
