//! Logging capability handed to extensions

mod recording;
mod tracing_logger;
mod traits;
mod writer;

pub use recording::{LogRecord, RecordingLogger};
pub use tracing_logger::TracingLogger;
pub use traits::{Fields, Logger, SharedLogger};
pub use writer::LogWriter;

pub use tracing::Level;
