//! Logger capability

use std::sync::Arc;
use tracing::Level;

/// Ordered structured key/value pairs attached to a log call
pub type Fields<'a> = &'a [(&'a str, &'a str)];

/// Leveled logger injected into extensions.
///
/// Implementations:
/// - `TracingLogger`: forwards to the `tracing` subscriber
/// - `RecordingLogger`: keeps every call in memory for assertions
pub trait Logger: Send + Sync {
    /// Emit `message` at `level`
    fn log(&self, level: Level, message: &str, fields: Fields<'_>);

    /// Whether a call at `level` would be emitted
    fn is_enabled(&self, level: Level) -> bool;

    /// Child logger carrying `name`
    fn named(&self, name: &str) -> SharedLogger;

    fn trace(&self, message: &str, fields: Fields<'_>) {
        self.log(Level::TRACE, message, fields);
    }

    fn debug(&self, message: &str, fields: Fields<'_>) {
        self.log(Level::DEBUG, message, fields);
    }

    fn info(&self, message: &str, fields: Fields<'_>) {
        self.log(Level::INFO, message, fields);
    }

    fn warn(&self, message: &str, fields: Fields<'_>) {
        self.log(Level::WARN, message, fields);
    }

    fn error(&self, message: &str, fields: Fields<'_>) {
        self.log(Level::ERROR, message, fields);
    }

    fn is_trace(&self) -> bool {
        self.is_enabled(Level::TRACE)
    }

    fn is_debug(&self) -> bool {
        self.is_enabled(Level::DEBUG)
    }

    fn is_info(&self) -> bool {
        self.is_enabled(Level::INFO)
    }

    fn is_warn(&self) -> bool {
        self.is_enabled(Level::WARN)
    }

    fn is_error(&self) -> bool {
        self.is_enabled(Level::ERROR)
    }
}

/// Type alias for an Arc-wrapped logger
pub type SharedLogger = Arc<dyn Logger>;
