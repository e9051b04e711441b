//! Metrics persistence
//!
//! Writes collected samples to a JSON file under the workspace's internal
//! state directory, optionally rendering a human-readable table first.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::error::MetricsError;
use crate::metrics::{Datum, MetricsCollector, Unit};

/// Internal-state directory created inside the target workspace
pub const INTERNALS_DIR: &str = "cc_internals";

/// Subdirectory of [`INTERNALS_DIR`] holding metrics files
const METRICS_SUBDIR: &str = "metrics";

/// Sink for collected metrics, parametrized by its write destination
///
/// Holds no data itself. The output path resolves to
/// `<workspace>/cc_internals/metrics/<output_file>`.
pub struct MetricsWriter {
    write_file: PathBuf,
}

impl MetricsWriter {
    /// Configure the write destination, creating the metrics directory.
    ///
    /// Directory creation is idempotent: an already-present directory is
    /// fine, but a permission failure or a non-directory collision on the
    /// path is an error.
    pub fn new(workspace_dir: &Path, output_file: &str) -> Result<Self, MetricsError> {
        let metrics_dir = workspace_dir.join(INTERNALS_DIR).join(METRICS_SUBDIR);
        fs::create_dir_all(&metrics_dir).map_err(|e| MetricsError::CreateDir {
            path: metrics_dir.clone(),
            error: e.to_string(),
        })?;
        Ok(Self {
            write_file: metrics_dir.join(output_file),
        })
    }

    /// Resolved path of the metrics output file
    pub fn write_file(&self) -> &Path {
        &self.write_file
    }

    /// Write all collected samples to the metrics file.
    ///
    /// With `print_data` set, a fixed-width table is rendered to stdout
    /// first. The file is written as a JSON array with alphabetically sorted
    /// keys and 4-space indentation, overwriting any previous contents.
    pub fn write(&self, collector: &MetricsCollector, print_data: bool) -> Result<(), MetricsError> {
        let data = collector.data();
        if print_data {
            print_table(data);
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        data.serialize(&mut serializer)?;

        fs::write(&self.write_file, &buf).map_err(|e| MetricsError::WriteFile {
            path: self.write_file.clone(),
            error: e.to_string(),
        })
    }
}

/// Render collected samples as a fixed-width table on stdout
fn print_table(data: &[Datum]) {
    println!("--------------------------------- Collected Data ---------------------------------");
    println!("=================================================================================");
    for datum in data {
        let readable_time = format_timestamp(datum.timestamp);
        let marker = if datum.complete { "" } else { " incomplete" };
        if datum.unit == Unit::Seconds {
            println!(
                "{:>12} | {:>35}: {:.2} {}{}",
                readable_time,
                datum.name,
                datum.value.as_f64(),
                datum.unit,
                marker
            );
        } else {
            println!(
                "{:>12} | {:>35}: {} {}{}",
                readable_time, datum.name, datum.value, datum.unit, marker
            );
        }
    }
}

/// ISO-8601 UTC rendering of a Unix timestamp
fn format_timestamp(timestamp: f64) -> String {
    let nanos = (timestamp * 1_000_000_000.0) as i128;
    OffsetDateTime::from_unix_timestamp_nanos(nanos)
        .ok()
        .and_then(|t| t.format(&Rfc3339).ok())
        .unwrap_or_else(|| timestamp.to_string())
}
