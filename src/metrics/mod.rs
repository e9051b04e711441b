//! Time-series build metrics
//!
//! Collects per-phase durations and artifact sizes during a sysroot build
//! and persists them to a file inside the workspace. Telemetry is recorded
//! on every exit path: a phase that fails still leaves a sample behind,
//! marked incomplete.

pub mod writer;

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Measurement unit of a [`Datum`]
///
/// Closed enumeration: durations are seconds, artifact sizes are bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Seconds,
    Bytes,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Bytes => "bytes",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric value of a [`Datum`]
///
/// Byte counts serialize as JSON integers, durations as floats.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Int(u64),
    Float(f64),
}

impl MetricValue {
    /// Lossy numeric view, used for fixed-point rendering
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }
}

impl std::fmt::Display for MetricValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// One immutable time-series sample
///
/// Fields are declared in alphabetical order so serde emits sorted keys
/// without post-processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    /// Whether the measured operation finished without failing
    pub complete: bool,
    /// Sample name, `<phase>-time` or `<phase>-size`
    pub name: String,
    /// Wall-clock seconds since the Unix epoch at sample completion
    pub timestamp: f64,
    /// Measurement unit
    pub unit: Unit,
    /// Measured value
    pub value: MetricValue,
}

/// Append-only ordered log of [`Datum`] records
///
/// Insertion order is chronological and significant: it reflects the
/// build-phase sequence. One collector is created per orchestration run and
/// owned exclusively by it.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    data: Vec<Datum>,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sample to the log
    pub fn add_datum(&mut self, datum: Datum) {
        self.data.push(datum);
    }

    /// Time a closure's execution, recording telemetry on every exit path.
    ///
    /// Appends a `<name>-time` sample whether `body` succeeds or fails; on
    /// failure the sample is marked incomplete, with the elapsed time
    /// measured up to the failure point, and the original error is returned
    /// unchanged to the caller.
    pub fn time<T, E>(&mut self, name: &str, body: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        let start = Instant::now();
        let result = body();
        let elapsed = start.elapsed().as_secs_f64();
        self.add_datum(Datum {
            complete: result.is_ok(),
            name: format!("{name}-time"),
            timestamp: unix_timestamp(),
            unit: Unit::Seconds,
            value: MetricValue::Float(elapsed),
        });
        result
    }

    /// Record a collected artifact size in bytes
    pub fn add_size(&mut self, name: &str, size: u64) {
        self.add_datum(Datum {
            complete: true,
            name: format!("{name}-size"),
            timestamp: unix_timestamp(),
            unit: Unit::Bytes,
            value: MetricValue::Int(size),
        });
    }

    /// Ordered snapshot of all collected samples
    ///
    /// Read-only: the log is not cleared, so repeated calls observe the same
    /// growing-then-stable sequence.
    pub fn data(&self) -> &[Datum] {
        &self.data
    }
}

/// Current wall-clock time as fractional seconds since the Unix epoch
fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_records_complete_datum_on_success() {
        let mut collector = MetricsCollector::new();

        let result: Result<u32, std::io::Error> = collector.time("probe", || Ok(42));

        assert_eq!(result.unwrap(), 42);
        assert_eq!(collector.data().len(), 1);
        let datum = &collector.data()[0];
        assert_eq!(datum.name, "probe-time");
        assert_eq!(datum.unit, Unit::Seconds);
        assert!(datum.complete);
    }

    #[test]
    fn test_timer_records_incomplete_datum_on_failure() {
        let mut collector = MetricsCollector::new();

        let result: Result<(), String> = collector.time("probe", || Err("boom".to_string()));

        assert_eq!(result.unwrap_err(), "boom");
        assert_eq!(collector.data().len(), 1);
        let datum = &collector.data()[0];
        assert_eq!(datum.name, "probe-time");
        assert!(!datum.complete);
    }

    #[test]
    fn test_timer_measures_elapsed_time() {
        let mut collector = MetricsCollector::new();

        let _: Result<(), String> = collector.time("sleep", || {
            std::thread::sleep(std::time::Duration::from_millis(50));
            Ok(())
        });

        let MetricValue::Float(elapsed) = collector.data()[0].value else {
            panic!("timer should record a float value");
        };
        assert!(elapsed >= 0.05, "elapsed {elapsed} below sleep duration");
        assert!(elapsed < 5.0, "elapsed {elapsed} implausibly large");
    }

    #[test]
    fn test_add_size_records_bytes() {
        let mut collector = MetricsCollector::new();

        collector.add_size("image", 1024);

        let datum = &collector.data()[0];
        assert_eq!(datum.name, "image-size");
        assert_eq!(datum.unit, Unit::Bytes);
        assert_eq!(datum.value, MetricValue::Int(1024));
        assert!(datum.complete);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut collector = MetricsCollector::new();

        let _: Result<(), String> = collector.time("first", || Ok(()));
        collector.add_size("second", 10);
        let _: Result<(), String> = collector.time("third", || Ok(()));

        let names: Vec<&str> = collector.data().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["first-time", "second-size", "third-time"]);
    }

    #[test]
    fn test_data_is_repeatable_snapshot() {
        let mut collector = MetricsCollector::new();
        collector.add_size("image", 7);

        let first: Vec<Datum> = collector.data().to_vec();
        let second: Vec<Datum> = collector.data().to_vec();
        assert_eq!(first, second);
    }

    #[test]
    fn test_datum_serializes_with_sorted_keys() {
        let datum = Datum {
            complete: true,
            name: "probe-size".to_string(),
            timestamp: 1.5,
            unit: Unit::Bytes,
            value: MetricValue::Int(3),
        };

        let json = serde_json::to_string(&datum).unwrap();
        let complete_pos = json.find("\"complete\"").unwrap();
        let name_pos = json.find("\"name\"").unwrap();
        let timestamp_pos = json.find("\"timestamp\"").unwrap();
        let unit_pos = json.find("\"unit\"").unwrap();
        let value_pos = json.find("\"value\"").unwrap();
        assert!(complete_pos < name_pos);
        assert!(name_pos < timestamp_pos);
        assert!(timestamp_pos < unit_pos);
        assert!(unit_pos < value_pos);
    }

    #[test]
    fn test_byte_values_serialize_as_integers() {
        let json = serde_json::to_string(&MetricValue::Int(42)).unwrap();
        assert_eq!(json, "42");

        let json = serde_json::to_string(&MetricValue::Float(0.25)).unwrap();
        assert_eq!(json, "0.25");
    }
}
