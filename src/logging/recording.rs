//! In-memory logger for tests

use super::traits::{Fields, Logger, SharedLogger};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::Level;

/// One captured log call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub level: Level,
    pub logger: Option<String>,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

/// Logger that records every call.
///
/// Children created with `named` share the parent's record store, so a test
/// holding the root sees everything logged through any child.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    name: Option<String>,
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<LogRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All records, in call order
    pub fn records(&self) -> Vec<LogRecord> {
        self.lock().clone()
    }

    /// Messages logged at `level`, in call order
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|r| r.level == level)
            .map(|r| r.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: &str, fields: Fields<'_>) {
        self.lock().push(LogRecord {
            level,
            logger: self.name.clone(),
            message: message.to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
    }

    fn is_enabled(&self, _level: Level) -> bool {
        true
    }

    fn named(&self, name: &str) -> SharedLogger {
        Arc::new(Self {
            name: Some(name.to_string()),
            records: Arc::clone(&self.records),
        })
    }
}
