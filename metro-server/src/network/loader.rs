//! Comma-separated network file reader.
//!
//! Each row after the header describes one undirected connection:
//!
//! ```text
//! From,To,Line,Minutes
//! Piccadilly,Market Street,Blue,2
//! ```
//!
//! Fields are trimmed. Columns beyond the fourth are ignored.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::graph::Connection;

/// Errors that can occur while reading network data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row is missing a required field, or the field is blank
    #[error("line {line}: missing {field}")]
    MissingField { line: u64, field: &'static str },

    /// The minutes field is not a finite number
    #[error("line {line}: invalid minutes {value:?}")]
    InvalidMinutes { line: u64, value: String },

    /// The minutes field is negative
    #[error("line {line}: negative minutes {value}")]
    NegativeMinutes { line: u64, value: f64 },
}

const FIELDS: [&str; 4] = ["start station", "end station", "line", "minutes"];

/// Read connections from a network file on disk.
pub fn load_connections<P: AsRef<Path>>(path: P) -> Result<Vec<Connection>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let connections = read_connections(file)?;
    info!(
        path = %path.display(),
        connections = connections.len(),
        "Read network file"
    );
    Ok(connections)
}

/// Read connections from any reader. The first row is treated as a header.
pub fn read_connections<R: Read>(reader: R) -> Result<Vec<Connection>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut connections = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let line = record.position().map_or(0, csv::Position::line);

        let from = required(&record, 0, line)?;
        let to = required(&record, 1, line)?;
        let colour = required(&record, 2, line)?;
        let minutes = parse_minutes(required(&record, 3, line)?, line)?;

        connections.push(Connection::new(from, to, colour, minutes));
    }

    debug!(connections = connections.len(), "Parsed network rows");
    Ok(connections)
}

fn required(record: &csv::StringRecord, idx: usize, line: u64) -> Result<&str, LoadError> {
    record
        .get(idx)
        .filter(|value| !value.is_empty())
        .ok_or(LoadError::MissingField {
            line,
            field: FIELDS[idx],
        })
}

fn parse_minutes(value: &str, line: u64) -> Result<f64, LoadError> {
    let minutes: f64 = value.parse().map_err(|_| LoadError::InvalidMinutes {
        line,
        value: value.to_string(),
    })?;

    if !minutes.is_finite() {
        return Err(LoadError::InvalidMinutes {
            line,
            value: value.to_string(),
        });
    }
    if minutes < 0.0 {
        return Err(LoadError::NegativeMinutes {
            line,
            value: minutes,
        });
    }

    Ok(minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
From,To,Line,Minutes
Piccadilly,Market Street,Blue,2
 Market Street , Shudehill , Yellow , 3.5
";

    #[test]
    fn reads_rows_after_header() {
        let connections = read_connections(SAMPLE.as_bytes()).unwrap();
        assert_eq!(connections.len(), 2);
        assert_eq!(
            connections[0],
            Connection::new("Piccadilly", "Market Street", "Blue", 2.0)
        );
    }

    #[test]
    fn trims_fields() {
        let connections = read_connections(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            connections[1],
            Connection::new("Market Street", "Shudehill", "Yellow", 3.5)
        );
    }

    #[test]
    fn header_only_is_empty() {
        let connections = read_connections("From,To,Line,Minutes\n".as_bytes()).unwrap();
        assert!(connections.is_empty());
    }

    #[test]
    fn extra_columns_ignored() {
        let input = "From,To,Line,Minutes\nA,B,Red,4,extra\n";
        let connections = read_connections(input.as_bytes()).unwrap();
        assert_eq!(connections, vec![Connection::new("A", "B", "Red", 4.0)]);
    }

    #[test]
    fn missing_field_reported_with_line() {
        let input = "From,To,Line,Minutes\nA,B,Red,4\nA,B\n";
        let err = read_connections(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingField {
                line: 3,
                field: "line"
            }
        ));
    }

    #[test]
    fn blank_field_is_missing() {
        let input = "From,To,Line,Minutes\nA, ,Red,4\n";
        let err = read_connections(input.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::MissingField {
                field: "end station",
                ..
            }
        ));
    }

    #[test]
    fn invalid_minutes() {
        let input = "From,To,Line,Minutes\nA,B,Red,soon\n";
        let err = read_connections(input.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 2: invalid minutes \"soon\"");
    }

    #[test]
    fn non_finite_minutes_rejected() {
        let input = "From,To,Line,Minutes\nA,B,Red,inf\n";
        let err = read_connections(input.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::InvalidMinutes { .. }));
    }

    #[test]
    fn negative_minutes_rejected() {
        let input = "From,To,Line,Minutes\nA,B,Red,-2\n";
        let err = read_connections(input.as_bytes()).unwrap_err();
        assert_eq!(err.to_string(), "line 2: negative minutes -2");
    }

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let connections = load_connections(file.path()).unwrap();
        assert_eq!(connections.len(), 2);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_connections(dir.path().join("absent.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("absent.csv"));
    }
}
