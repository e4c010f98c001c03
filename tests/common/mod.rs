//! Shared fixtures for the integration tests.
//!
//! Provides a JSON-backed profile, an attribute target that records every
//! call it receives, the mapper models the scenarios are written against, and
//! a logger that keeps records for assertions.

#![allow(dead_code)]

use date_attribute_mapper::{
    AttributeTarget, InMemoryAttributes, MapperConfig, MapperModel, ProfileSource, SourceValue,
};
use log::{Level, LevelFilter, Log, Metadata, Record};
use serde_json::Value;
use std::sync::{Mutex, Once};

/// Profile backed by a JSON document, resolving top-level keys only.
pub struct JsonProfile(pub Value);

impl ProfileSource for JsonProfile {
    fn extract_field(&self, path: &str) -> SourceValue {
        SourceValue::from(self.0.get(path))
    }
}

/// A host-side call made against an attribute target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetCall {
    Set(String, String),
    Remove(String),
}

/// Attribute target that keeps the resulting state and the call log.
#[derive(Debug, Default)]
pub struct RecordingTarget {
    pub attributes: InMemoryAttributes,
    pub calls: Vec<TargetCall>,
}

impl RecordingTarget {
    pub fn with(name: &str, value: &str) -> Self {
        Self {
            attributes: InMemoryAttributes::from([(name, value)]),
            calls: Vec::new(),
        }
    }

    pub fn removals(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, TargetCall::Remove(_)))
            .count()
    }
}

impl AttributeTarget for RecordingTarget {
    fn set_single_attribute(&mut self, name: &str, value: String) {
        self.calls.push(TargetCall::Set(name.to_string(), value.clone()));
        self.attributes.set_single_attribute(name, value);
    }

    fn remove_attribute(&mut self, name: &str) {
        self.calls.push(TargetCall::Remove(name.to_string()));
        self.attributes.remove_attribute(name);
    }
}

/// The `birthdate` mapper used throughout: ISO input, European output.
pub fn birthdate_model() -> MapperModel {
    model_with("yyyy-MM-dd", "dd/MM/yyyy")
}

pub fn model_with(input_pattern: &str, output_pattern: &str) -> MapperModel {
    MapperModel::new(
        "birthdate mapper",
        MapperConfig::builder()
            .json_field_path("birthday")
            .input_pattern(input_pattern)
            .output_pattern(output_pattern)
            .target_attribute("birthdate")
            .build(),
    )
}

/// Install a test logger so diagnostics show up with `--nocapture`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Logger that keeps every record so tests can assert on diagnostics.
///
/// A test binary installs either this or `env_logger`, never both.
pub struct CapturedLogs {
    records: Mutex<Vec<(Level, String)>>,
}

static CAPTURED: CapturedLogs = CapturedLogs {
    records: Mutex::new(Vec::new()),
};

impl Log for CapturedLogs {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

impl CapturedLogs {
    /// Warning messages mentioning every one of `needles`.
    pub fn warnings_containing(&self, needles: &[&str]) -> Vec<String> {
        let records = self.records.lock().unwrap();
        records
            .iter()
            .filter(|(level, message)| {
                *level == Level::Warn && needles.iter().all(|needle| message.contains(needle))
            })
            .map(|(_, message)| message.clone())
            .collect()
    }
}

/// Install the capturing logger once per test binary.
pub fn capture_logs() -> &'static CapturedLogs {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURED).is_ok() {
            log::set_max_level(LevelFilter::Debug);
        }
    });
    &CAPTURED
}
