//! Tabular file I/O for synchronization analysis
//!
//! The analysis crates work on in-memory tables only; this crate is the file
//! boundary around them. Input tables are tab-separated:
//!
//! - trigger: columns `timestamp` (float seconds) and `signal` (0 or 1);
//! - measurement: column `timestamp` followed by one float column per
//!   channel; every non-timestamp column is treated as a channel, in header
//!   order.
//!
//! The output table is comma-separated: `interval_start`, `interval_end`,
//! then a `{channel}_mean` column per channel followed by a `{channel}_std`
//! column per channel.

mod error;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use trigsync_core::{Channel, IntervalTable, MeasurementSignal, TriggerSample};

pub use error::{Error, Result};

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| Error::MissingColumn(name.to_string()))
}

fn parse_field<T: std::str::FromStr>(field: &str, column: &str, row: usize) -> Result<T> {
    field.trim().parse().map_err(|_| Error::InvalidValue {
        column: column.to_string(),
        row,
        value: field.to_string(),
    })
}

/// Read a tab-separated trigger table
pub fn read_trigger<R: Read>(reader: R) -> Result<Vec<TriggerSample>> {
    let mut rdr = csv::ReaderBuilder::new().delimiter(b'\t').from_reader(reader);
    let headers = rdr.headers()?.clone();
    let ts_idx = column_index(&headers, "timestamp")?;
    let sig_idx = column_index(&headers, "signal")?;

    let mut samples = Vec::new();
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        let timestamp = parse_field(&record[ts_idx], "timestamp", row)?;
        let level = parse_field(&record[sig_idx], "signal", row)?;
        samples.push(TriggerSample::new(timestamp, level));
    }
    Ok(samples)
}

/// Read a tab-separated trigger table from a file
pub fn read_trigger_path<P: AsRef<Path>>(path: P) -> Result<Vec<TriggerSample>> {
    read_trigger(File::open(path)?)
}

/// Read a tab-separated measurement table
///
/// The returned signal is validated (column lengths, timestamp ordering)
/// before being handed to the caller.
pub fn read_measurement<R: Read>(reader: R) -> Result<MeasurementSignal> {
    let mut rdr = csv::ReaderBuilder::new().delimiter(b'\t').from_reader(reader);
    let headers = rdr.headers()?.clone();
    let ts_idx = column_index(&headers, "timestamp")?;

    let channel_columns: Vec<(usize, String)> = headers
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != ts_idx)
        .map(|(i, name)| (i, name.to_string()))
        .collect();

    let mut timestamps = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); channel_columns.len()];
    for (row, record) in rdr.records().enumerate() {
        let record = record?;
        timestamps.push(parse_field(&record[ts_idx], "timestamp", row)?);
        for (col, (idx, name)) in channel_columns.iter().enumerate() {
            columns[col].push(parse_field(&record[*idx], name, row)?);
        }
    }

    let channels = channel_columns
        .into_iter()
        .zip(columns)
        .map(|((_, name), values)| Channel::new(name, values))
        .collect();
    let signal = MeasurementSignal::new(timestamps, channels);
    signal.validate()?;
    Ok(signal)
}

/// Read a tab-separated measurement table from a file
pub fn read_measurement_path<P: AsRef<Path>>(path: P) -> Result<MeasurementSignal> {
    read_measurement(File::open(path)?)
}

/// Write an interval-statistics table as comma-separated values
pub fn write_interval_table<W: Write>(writer: W, table: &IntervalTable) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header = vec!["interval_start".to_string(), "interval_end".to_string()];
    header.extend(table.channels.iter().map(|c| format!("{c}_mean")));
    header.extend(table.channels.iter().map(|c| format!("{c}_std")));
    wtr.write_record(&header)?;

    for row in &table.rows {
        let mut record = vec![row.start.to_string(), row.end.to_string()];
        record.extend(row.stats.iter().map(|s| s.mean.to_string()));
        record.extend(row.stats.iter().map(|s| s.std.to_string()));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write an interval-statistics table to a file
pub fn write_interval_table_path<P: AsRef<Path>>(path: P, table: &IntervalTable) -> Result<()> {
    write_interval_table(File::create(path)?, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use trigsync_core::{ChannelStat, IntervalStat};

    const TRIGGER_TSV: &str = "timestamp\tsignal\n0.0\t0\n0.025\t1\n0.05\t0\n0.075\t1\n";

    #[test]
    fn test_read_trigger() {
        let samples = read_trigger(TRIGGER_TSV.as_bytes()).unwrap();
        assert_eq!(samples.len(), 4);
        assert_relative_eq!(samples[1].timestamp, 0.025);
        assert_eq!(samples[1].level, 1);
        assert_eq!(samples[2].level, 0);
    }

    #[test]
    fn test_read_trigger_missing_column() {
        let err = read_trigger("timestamp\tlevel\n0.0\t0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(c) if c == "signal"));
    }

    #[test]
    fn test_read_trigger_bad_value() {
        let err = read_trigger("timestamp\tsignal\n0.0\thigh\n".as_bytes()).unwrap_err();
        match err {
            Error::InvalidValue { column, row, value } => {
                assert_eq!(column, "signal");
                assert_eq!(row, 0);
                assert_eq!(value, "high");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_measurement() {
        let tsv = "timestamp\tch1\tch2\n0.0\t1.5\t2.5\n0.1\t1.6\t2.6\n";
        let signal = read_measurement(tsv.as_bytes()).unwrap();
        assert_eq!(signal.len(), 2);
        assert_eq!(signal.channel_names(), vec!["ch1", "ch2"]);
        assert_relative_eq!(signal.channel("ch2").unwrap().values[1], 2.6);
    }

    #[test]
    fn test_read_measurement_timestamp_column_position_is_free() {
        // pandas writes the timestamp column last in the generated data
        let tsv = "ch1\tch2\ttimestamp\n1.5\t2.5\t0.0\n1.6\t2.6\t0.1\n";
        let signal = read_measurement(tsv.as_bytes()).unwrap();
        assert_eq!(signal.channel_names(), vec!["ch1", "ch2"]);
        assert_relative_eq!(signal.timestamps[1], 0.1);
    }

    #[test]
    fn test_read_measurement_rejects_out_of_order_timestamps() {
        let tsv = "timestamp\tch1\n0.0\t1.0\n0.2\t2.0\n0.1\t3.0\n";
        let err = read_measurement(tsv.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::Core(trigsync_core::Error::NonMonotonicTimestamps { .. })
        ));
    }

    #[test]
    fn test_write_interval_table() {
        let table = IntervalTable {
            channels: vec!["ch1".to_string(), "ch2".to_string()],
            rows: vec![IntervalStat {
                start: 0.025,
                end: 0.075,
                stats: vec![
                    ChannelStat { mean: 1.0, std: 0.0 },
                    ChannelStat { mean: 2.5, std: 0.5 },
                ],
            }],
        };
        let mut out = Vec::new();
        write_interval_table(&mut out, &table).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "interval_start,interval_end,ch1_mean,ch2_mean,ch1_std,ch2_std\n\
             0.025,0.075,1,2.5,0,0.5\n"
        );
    }
}
