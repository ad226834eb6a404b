//! Seasonal furnace heating model.

/// Reference floor area the base rate is calibrated against.
const REFERENCE_SQFT: f32 = 2000.0;

/// Heating intensity of the reference installation, therms per hour.
const REFERENCE_RATE: f32 = 0.12;

/// Per-scenario base heating rate, scaled linearly by floor area.
pub fn base_rate(home_sqft: u32) -> f32 {
    REFERENCE_RATE * (home_sqft as f32 / REFERENCE_SQFT)
}

/// Hourly furnace usage for one ambient temperature.
///
/// Banded by temperature with strict upper-bound checks in descending
/// order; the first matching band wins, so the bands cannot overlap:
///
/// | Band | Multiplier |
/// |---|---|
/// | > 70°F | 0.0 |
/// | (60, 70]°F | 0.3 |
/// | (50, 60]°F | 0.6 |
/// | (40, 50]°F | 0.9 |
/// | <= 40°F | 1.2 |
///
/// Pure function; always returns a finite non-negative value for finite
/// input. The caller is responsible for the season/furnace gate: summer
/// scenarios never invoke this at all.
pub fn heating_therms(temp_f: f32, base_rate: f32) -> f32 {
    if temp_f > 70.0 {
        0.0
    } else if temp_f > 60.0 {
        base_rate * 0.3
    } else if temp_f > 50.0 {
        base_rate * 0.6
    } else if temp_f > 40.0 {
        base_rate * 0.9
    } else {
        base_rate * 1.2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_rate_scales_with_floor_area() {
        assert!((base_rate(2000) - 0.12).abs() < 1e-6);
        assert!((base_rate(1000) - 0.06).abs() < 1e-6);
        assert!((base_rate(3000) - 0.18).abs() < 1e-6);
    }

    #[test]
    fn warm_hours_need_no_heating() {
        assert_eq!(heating_therms(85.0, 0.12), 0.0);
        assert_eq!(heating_therms(70.1, 0.12), 0.0);
    }

    #[test]
    fn band_boundaries_use_strict_upper_bounds() {
        let base = 0.12;
        // 70 falls in the (60, 70] band, not the zero band.
        assert!((heating_therms(70.0, base) - base * 0.3).abs() < 1e-6);
        assert!((heating_therms(60.0, base) - base * 0.6).abs() < 1e-6);
        assert!((heating_therms(50.0, base) - base * 0.9).abs() < 1e-6);
        assert!((heating_therms(40.0, base) - base * 1.2).abs() < 1e-6);
    }

    #[test]
    fn output_is_monotone_as_temperature_drops() {
        let base = 0.12;
        let temps = [75.0, 65.0, 55.0, 45.0, 35.0];
        let mut last = -1.0;
        for t in temps {
            let usage = heating_therms(t, base);
            assert!(
                usage >= last,
                "heating should not decrease as temp drops: {usage} < {last} at {t}"
            );
            last = usage;
        }
    }

    #[test]
    fn output_is_non_negative() {
        for t in [-40.0, 0.0, 32.0, 72.0, 120.0] {
            assert!(heating_therms(t, 0.12) >= 0.0);
        }
    }
}
