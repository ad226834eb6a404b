//! Post-hoc usage summary computed from synthesized records.

use std::collections::HashSet;
use std::fmt;

use super::types::HourlyRecord;

/// Aggregate statistics over one scenario's hourly series.
///
/// Computed post-hoc from the complete record vector so the report always
/// agrees with the emitted table.
#[derive(Debug, Clone)]
pub struct UsageSummary {
    /// Number of hourly records.
    pub rows: usize,
    /// Share of hours with exactly zero usage, percent.
    pub zero_hour_pct: f32,
    /// Mean total usage per calendar day, therms.
    pub mean_daily_therms: f32,
    /// Largest single-hour usage, therms.
    pub peak_hour_therms: f32,
}

impl UsageSummary {
    /// Computes the summary from the complete record vector.
    pub fn from_records(records: &[HourlyRecord]) -> Self {
        if records.is_empty() {
            return Self {
                rows: 0,
                zero_hour_pct: 0.0,
                mean_daily_therms: 0.0,
                peak_hour_therms: 0.0,
            };
        }

        let rows = records.len();
        let mut zero_hours = 0_usize;
        let mut total = 0.0_f32;
        let mut peak = 0.0_f32;
        let mut days = HashSet::new();

        for r in records {
            if r.usage_therms == 0.0 {
                zero_hours += 1;
            }
            total += r.usage_therms;
            peak = peak.max(r.usage_therms);
            days.insert(r.date);
        }

        Self {
            rows,
            zero_hour_pct: 100.0 * zero_hours as f32 / rows as f32,
            mean_daily_therms: total / days.len() as f32,
            peak_hour_therms: peak,
        }
    }
}

impl fmt::Display for UsageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows={} zero_hours={:.1}% mean_daily={:.3} therms peak_hour={:.3} therms",
            self.rows, self.zero_hour_pct, self.mean_daily_therms, self.peak_hour_therms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Season;
    use chrono::{Days, NaiveDate, NaiveTime};

    fn record(day: u64, hour: u32, usage: f32) -> HourlyRecord {
        let base = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        HourlyRecord {
            date: base + Days::new(day),
            time: NaiveTime::from_hms_opt(hour, 0, 0).expect("valid time"),
            temp_f: 72,
            usage_therms: usage,
            avg_usage: 0.008_333,
            season: Season::Summer,
            home_sqft: 1000,
            occupancy: 1,
            appliances: "stove".to_string(),
        }
    }

    #[test]
    fn empty_records_give_zeroed_summary() {
        let s = UsageSummary::from_records(&[]);
        assert_eq!(s.rows, 0);
        assert_eq!(s.mean_daily_therms, 0.0);
    }

    #[test]
    fn statistics_match_direct_recomputation() {
        // Two days: day 0 totals 0.3 across 2 non-zero hours, day 1 is 0.1.
        let records = vec![
            record(0, 7, 0.1),
            record(0, 19, 0.2),
            record(0, 3, 0.0),
            record(1, 7, 0.1),
            record(1, 3, 0.0),
        ];
        let s = UsageSummary::from_records(&records);
        assert_eq!(s.rows, 5);
        assert!((s.zero_hour_pct - 40.0).abs() < 1e-4);
        assert!((s.mean_daily_therms - 0.2).abs() < 1e-6);
        assert!((s.peak_hour_therms - 0.2).abs() < 1e-6);
    }

    #[test]
    fn display_renders_all_fields() {
        let s = UsageSummary::from_records(&[record(0, 7, 0.25)]);
        let text = format!("{s}");
        assert!(text.contains("rows=1"));
        assert!(text.contains("peak_hour=0.250"));
    }
}
