//! Integration tests for metrics collection and persistence

mod common;

use std::time::Duration;

use common::TestWorkspace;
use crossroot::metrics::writer::{MetricsWriter, INTERNALS_DIR};
use crossroot::metrics::{Datum, MetricValue, MetricsCollector, Unit};

#[test]
fn test_timer_value_approximates_elapsed_time() {
    let mut collector = MetricsCollector::new();

    let result: Result<(), String> = collector.time("nap", || {
        std::thread::sleep(Duration::from_millis(100));
        Ok(())
    });
    assert!(result.is_ok());

    let datum = &collector.data()[0];
    assert_eq!(datum.name, "nap-time");
    assert!(datum.complete);
    let MetricValue::Float(elapsed) = datum.value else {
        panic!("timer value should be a float");
    };
    assert!(elapsed >= 0.1, "elapsed {elapsed} below sleep duration");
    assert!(elapsed < 2.0, "elapsed {elapsed} implausibly large");
}

#[test]
fn test_timer_failure_is_recorded_and_propagated() {
    let mut collector = MetricsCollector::new();

    let result: Result<(), String> = collector.time("doomed", || {
        std::thread::sleep(Duration::from_millis(20));
        Err("backend exploded".to_string())
    });

    // The error reaches the caller unchanged
    assert_eq!(result.unwrap_err(), "backend exploded");

    // And exactly one sample was still recorded, marked incomplete, with
    // the time measured up to the failure point
    assert_eq!(collector.data().len(), 1);
    let datum = &collector.data()[0];
    assert!(!datum.complete);
    assert!(datum.value.as_f64() >= 0.02);
}

#[test]
fn test_write_round_trips_collected_data() {
    let workspace = TestWorkspace::new();
    let mut collector = MetricsCollector::new();
    let _: Result<(), String> = collector.time("phase-a", || Ok(()));
    collector.add_size("phase-a", 123_456);
    let _: Result<(), String> = collector.time("phase-b", || Err("nope".to_string()));

    let writer = MetricsWriter::new(&workspace.path(), "metrics.json").unwrap();
    writer.write(&collector, false).unwrap();

    let contents = std::fs::read_to_string(writer.write_file()).unwrap();
    let parsed: Vec<Datum> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, collector.data());
}

#[test]
fn test_written_file_has_sorted_keys_and_indentation() {
    let workspace = TestWorkspace::new();
    let mut collector = MetricsCollector::new();
    collector.add_size("image", 42);

    let writer = MetricsWriter::new(&workspace.path(), "metrics.json").unwrap();
    writer.write(&collector, false).unwrap();

    let contents = std::fs::read_to_string(writer.write_file()).unwrap();

    // Keys appear in alphabetical order
    let positions: Vec<usize> = ["\"complete\"", "\"name\"", "\"timestamp\"", "\"unit\"", "\"value\""]
        .iter()
        .map(|key| contents.find(key).expect("key missing from output"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));

    // 4-space indentation
    assert!(contents.contains("\n        \"complete\""));

    // Byte sizes are written as JSON integers
    assert!(contents.contains("\"value\": 42"));
    assert!(contents.contains("\"unit\": \"bytes\""));
}

#[test]
fn test_write_overwrites_previous_file() {
    let workspace = TestWorkspace::new();
    let writer = MetricsWriter::new(&workspace.path(), "metrics.json").unwrap();

    let mut first = MetricsCollector::new();
    first.add_size("old", 1);
    first.add_size("older", 2);
    writer.write(&first, false).unwrap();

    let mut second = MetricsCollector::new();
    second.add_size("new", 3);
    writer.write(&second, false).unwrap();

    let contents = std::fs::read_to_string(writer.write_file()).unwrap();
    let parsed: Vec<Datum> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].name, "new-size");
}

#[test]
fn test_writer_directory_creation_is_idempotent() {
    let workspace = TestWorkspace::new();

    MetricsWriter::new(&workspace.path(), "a.json").unwrap();
    // Constructing a second writer over the same tree must not fail
    let writer = MetricsWriter::new(&workspace.path(), "b.json").unwrap();

    assert!(workspace
        .path()
        .join(INTERNALS_DIR)
        .join("metrics")
        .is_dir());
    assert!(writer.write_file().ends_with("b.json"));
}

#[test]
fn test_units_serialize_lowercase() {
    assert_eq!(serde_json::to_string(&Unit::Seconds).unwrap(), "\"seconds\"");
    assert_eq!(serde_json::to_string(&Unit::Bytes).unwrap(), "\"bytes\"");
}
