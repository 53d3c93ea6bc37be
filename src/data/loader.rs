use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use thiserror::Error;

use super::model::{Sample, SampleSeries};

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Everything that can go wrong between a source path and a [`SampleSeries`].
///
/// All variants are recovered at the ingestion boundary: the UI renders them
/// as a "no data available" state and keeps running.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read telemetry source {path}: {source}")]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("row {row}: {reason}")]
    SchemaMismatch { row: usize, reason: String },

    #[error("row {row}: cannot parse timestamp '{value}'")]
    TimestampParse { row: usize, value: String },

    #[error("{path} contains no samples")]
    EmptyDataset { path: PathBuf },

    #[error("unsupported file extension: .{extension}")]
    UnsupportedFormat { extension: String },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a telemetry series from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – two positional columns `(pm10, timestamp)`; a header row is
///   detected and discarded
/// * `.json` – `[{ "pm10": 12.4, "timestamp": "..." }, ...]`
///
/// The returned series is sorted ascending by timestamp. A source that
/// parses but holds zero rows is an error, not an empty series.
pub fn load_file(path: &Path) -> Result<SampleSeries, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let samples = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        other => {
            return Err(LoadError::UnsupportedFormat {
                extension: other.to_string(),
            })
        }
    };

    if samples.is_empty() {
        return Err(LoadError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    let negative = samples.iter().filter(|s| s.pm10 < 0.0).count();
    if negative > 0 {
        // Sensor glitches are kept in the series so the audit shows them.
        log::warn!("{negative} readings below 0 µg/m³ in {}", path.display());
    }

    Ok(SampleSeries::from_samples(samples))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: exactly two columns, interpreted positionally as
/// `(pm10, timestamp)` regardless of any header names.  The first row is
/// treated as a header and skipped when its first field is not numeric.
fn load_csv(path: &Path) -> Result<Vec<Sample>, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut samples = Vec::new();

    for (row, result) in reader.records().enumerate() {
        let record = result.map_err(|e| LoadError::SchemaMismatch {
            row,
            reason: e.to_string(),
        })?;

        let first = record.get(0).unwrap_or("").trim();
        if row == 0 && first.parse::<f64>().is_err() {
            continue; // header row
        }

        if record.len() != 2 {
            return Err(LoadError::SchemaMismatch {
                row,
                reason: format!("expected 2 columns, found {}", record.len()),
            });
        }

        let pm10 = first.parse::<f64>().map_err(|_| LoadError::SchemaMismatch {
            row,
            reason: format!("'{first}' is not a number"),
        })?;

        let raw_ts = record.get(1).unwrap_or("").trim();
        let timestamp = parse_timestamp(raw_ts).ok_or_else(|| LoadError::TimestampParse {
            row,
            value: raw_ts.to_string(),
        })?;

        samples.push(Sample { pm10, timestamp });
    }

    Ok(samples)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// One record of the records-oriented JSON export
/// (the default `df.to_json(orient='records')` shape).
#[derive(Debug, Deserialize)]
struct JsonRecord {
    pm10: f64,
    timestamp: String,
}

fn load_json(path: &Path) -> Result<Vec<Sample>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let records: Vec<JsonRecord> =
        serde_json::from_str(&text).map_err(|e| LoadError::SchemaMismatch {
            row: e.line().saturating_sub(1),
            reason: e.to_string(),
        })?;

    records
        .into_iter()
        .enumerate()
        .map(|(row, rec)| {
            let timestamp =
                parse_timestamp(&rec.timestamp).ok_or_else(|| LoadError::TimestampParse {
                    row,
                    value: rec.timestamp.clone(),
                })?;
            Ok(Sample {
                pm10: rec.pm10,
                timestamp,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Timestamp parsing
// ---------------------------------------------------------------------------

/// Layouts accepted for naive timestamps (assumed UTC).
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Permissive timestamp parser: RFC 3339 first, then common layouts.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%z") {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }

    None
}
