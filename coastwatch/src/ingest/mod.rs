//! Report-file ingestion.
//!
//! Reads batches of position reports from CSV files and feeds them to the
//! tracking service. This is collaborator glue, not core logic: malformed
//! lines are skipped with a warning and never reach the service.
//!
//! # File format
//!
//! One report per line, five comma-separated fields:
//!
//! ```text
//! # boat_hint,chip_id,latitude,longitude,timestamp
//! BT-7,chip-204,20.00,40.00,2025-01-01 10:00
//! ```
//!
//! `#` starts a comment line; blank lines are ignored. The first field is
//! an advisory identifier from the reporting side; the system assigns its
//! own boat ids and only uses the chip id.

use std::io::Read;
use std::path::Path;

use chrono::NaiveDateTime;
use csv::StringRecord;
use thiserror::Error;
use tracing::{info, warn};

use crate::tracking::TrackingService;

/// Timestamp format used in report files (minute resolution).
pub const REPORT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Number of fields in a well-formed report line.
const FIELD_COUNT: usize = 5;

/// Errors raised while reading a report file.
///
/// Per-line parse failures are not errors: those lines are skipped with a
/// warning so one bad record cannot sink a batch.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be opened or read.
    #[error("failed to read report file: {0}")]
    Read(#[from] csv::Error),
}

/// One well-formed report line.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRecord {
    /// Advisory identifier from the reporting side; not the system id.
    pub boat_hint: String,
    /// Hardware chip id to register the boat under.
    pub chip_id: String,
    /// Reported latitude in degrees.
    pub latitude: f64,
    /// Reported longitude in degrees.
    pub longitude: f64,
    /// Report timestamp.
    pub timestamp: NaiveDateTime,
}

/// Why a report line was skipped.
#[derive(Debug, Error, PartialEq, Eq)]
enum ParseIssue {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),
    #[error("invalid coordinate '{0}'")]
    Coordinate(String),
    #[error("invalid timestamp '{0}' (expected YYYY-MM-DD HH:MM)")]
    Timestamp(String),
}

/// Summary of one batch load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Boats registered from the batch.
    pub registered: usize,
    /// Alerts raised while replaying the batch.
    pub alerts_raised: usize,
}

/// Read all well-formed report records from a CSV file, in file order.
///
/// Malformed lines are skipped with a `warn!` naming the line number.
pub fn read_reports(path: impl AsRef<Path>) -> Result<Vec<ReportRecord>, IngestError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_path(path.as_ref())?;
    collect_records(reader)
}

/// Read report records from any reader (used by tests and pipes).
pub fn read_reports_from(input: impl Read) -> Result<Vec<ReportRecord>, IngestError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);
    collect_records(reader)
}

fn collect_records<R: Read>(mut reader: csv::Reader<R>) -> Result<Vec<ReportRecord>, IngestError> {
    let mut records = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        match parse_record(&record) {
            Ok(report) => records.push(report),
            Err(issue) => {
                warn!(line, %issue, "skipping malformed report line");
            }
        }
    }
    Ok(records)
}

fn parse_record(record: &StringRecord) -> Result<ReportRecord, ParseIssue> {
    if record.len() != FIELD_COUNT {
        return Err(ParseIssue::FieldCount(record.len()));
    }

    let latitude = parse_coordinate(&record[2])?;
    let longitude = parse_coordinate(&record[3])?;
    let timestamp = NaiveDateTime::parse_from_str(&record[4], REPORT_TIME_FORMAT)
        .map_err(|_| ParseIssue::Timestamp(record[4].to_string()))?;

    Ok(ReportRecord {
        boat_hint: record[0].to_string(),
        chip_id: record[1].to_string(),
        latitude,
        longitude,
        timestamp,
    })
}

fn parse_coordinate(raw: &str) -> Result<f64, ParseIssue> {
    raw.parse()
        .map_err(|_| ParseIssue::Coordinate(raw.to_string()))
}

/// Register and replay a batch of records against the service, in order.
///
/// Each record registers a boat for its chip id and then reports its
/// position. Records with a blank chip id are skipped with a warning.
pub fn load_into(service: &TrackingService, records: &[ReportRecord]) -> LoadSummary {
    let mut summary = LoadSummary::default();

    for record in records {
        let boat = match service.register_boat(&record.chip_id) {
            Ok(boat) => boat,
            Err(err) => {
                warn!(
                    boat_hint = %record.boat_hint,
                    error = %err,
                    "skipping report with unusable chip id"
                );
                continue;
            }
        };
        summary.registered += 1;

        let alerts = service.report_position(
            &boat.id,
            record.latitude,
            record.longitude,
            record.timestamp,
        );
        summary.alerts_raised += alerts.len();
    }

    info!(
        registered = summary.registered,
        alerts_raised = summary.alerts_raised,
        "loaded report batch"
    );
    summary
}

/// Convenience wrapper: read a report file and load it into the service.
pub fn load_file(
    service: &TrackingService,
    path: impl AsRef<Path>,
) -> Result<LoadSummary, IngestError> {
    let records = read_reports(path)?;
    Ok(load_into(service, &records))
}
