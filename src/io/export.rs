//! CSV export for hourly usage records.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::HourlyRecord;

/// Column header for the per-scenario usage table.
pub const HEADER: &str =
    "date,time,temp,usage_therms,avg_usage,season,home_sqft,occupancy,appliances";

/// Exports hourly records to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(records: &[HourlyRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, buf)
}

/// Writes hourly records as CSV to any writer.
///
/// One row per record; `usage_therms` is fixed to 3 decimal places,
/// `avg_usage` to 6, and `temp` is an integer string. Deterministic output
/// for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(records: &[HourlyRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(','))?;

    for r in records {
        wtr.write_record(&[
            r.date.format("%Y-%m-%d").to_string(),
            r.time.format("%H:%M:%S").to_string(),
            r.temp_f.to_string(),
            format!("{:.3}", r.usage_therms),
            format!("{:.6}", r.avg_usage),
            r.season.to_string(),
            r.home_sqft.to_string(),
            r.occupancy.to_string(),
            r.appliances.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Season;
    use chrono::{NaiveDate, NaiveTime};

    fn make_record(hour: u32) -> HourlyRecord {
        HourlyRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
            time: NaiveTime::from_hms_opt(hour, 0, 0).expect("valid time"),
            temp_f: 45,
            usage_therms: 0.023,
            avg_usage: 0.083_333,
            season: Season::Winter,
            home_sqft: 2000,
            occupancy: 3,
            appliances: "furnace+stove".to_string(),
        }
    }

    #[test]
    fn header_matches_schema() {
        let mut buf = Vec::new();
        write_csv(&[make_record(0)], &mut buf).expect("write should succeed");
        let output = String::from_utf8(buf).expect("valid UTF-8");
        assert_eq!(output.lines().next(), Some(HEADER));
    }

    #[test]
    fn row_count_matches_record_count() {
        let records: Vec<HourlyRecord> = (0..24).map(make_record).collect();
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).expect("write should succeed");
        let output = String::from_utf8(buf).expect("valid UTF-8");
        // 1 header + 24 data rows
        assert_eq!(output.lines().count(), 25);
    }

    #[test]
    fn fixed_decimal_formats() {
        let mut zero = make_record(0);
        zero.usage_therms = 0.0;
        let mut buf = Vec::new();
        write_csv(&[make_record(7), zero], &mut buf).expect("write should succeed");
        let output = String::from_utf8(buf).expect("valid UTF-8");
        let mut lines = output.lines().skip(1);
        let first = lines.next().expect("data row");
        assert!(first.contains(",0.023,"), "3-decimal usage: {first}");
        assert!(first.contains(",0.083333,"), "6-decimal avg: {first}");
        let second = lines.next().expect("data row");
        assert!(second.contains(",0.000,"), "zero formats as 0.000: {second}");
    }

    #[test]
    fn deterministic_output() {
        let records: Vec<HourlyRecord> = (0..5).map(make_record).collect();
        let mut buf1 = Vec::new();
        let mut buf2 = Vec::new();
        write_csv(&records, &mut buf1).expect("write should succeed");
        write_csv(&records, &mut buf2).expect("write should succeed");
        assert_eq!(buf1, buf2);
    }

    #[test]
    fn round_trip_parseable() {
        let records: Vec<HourlyRecord> = (0..3).map(make_record).collect();
        let mut buf = Vec::new();
        write_csv(&records, &mut buf).expect("write should succeed");

        let mut rdr = csv::Reader::from_reader(buf.as_slice());
        let headers = rdr.headers().cloned().expect("headers parse");
        assert_eq!(headers.len(), 9);

        let mut rows = 0;
        for record in rdr.records() {
            let rec = record.expect("row parses");
            let usage: f32 = rec[3].parse().expect("usage parses as f32");
            assert!(usage >= 0.0);
            let temp: i32 = rec[2].parse().expect("temp parses as integer");
            assert_eq!(temp, 45);
            rows += 1;
        }
        assert_eq!(rows, 3);
    }
}
