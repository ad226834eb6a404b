//! Bounded symmetric variation applied to non-zero hourly totals.

use rand::{Rng, rngs::StdRng};

/// Lower bound of the perturbation magnitude.
pub const JITTER_PCT_MIN: f32 = 0.10;

/// Upper bound of the perturbation magnitude.
pub const JITTER_PCT_MAX: f32 = 0.15;

/// Perturbs a composed hourly usage by ±(10–15)%, floored at zero.
///
/// The sign and magnitude are drawn from the scenario stream, one pair per
/// qualifying hour. Callers must skip hours whose composed usage is exactly
/// zero: those stay zero and consume no draws, preserving the sparsity of
/// the series.
pub fn apply(usage_therms: f32, rng: &mut StdRng) -> f32 {
    let sign = if rng.random::<f32>() < 0.5 { 1.0 } else { -1.0 };
    let pct = rng.random_range(JITTER_PCT_MIN..=JITTER_PCT_MAX);
    (usage_therms * (1.0 + sign * pct)).max(0.0)
}
