//! Logger backed by the global `tracing` subscriber

use super::traits::{Fields, Logger, SharedLogger};
use std::sync::Arc;
use tracing::Level;

#[derive(Debug, Clone, Default)]
pub struct TracingLogger {
    name: Option<String>,
}

impl TracingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Child logger; names nest as `parent.child`
    pub fn child(&self, name: &str) -> Self {
        let name = match &self.name {
            Some(parent) => format!("{}.{}", parent, name),
            None => name.to_string(),
        };
        Self { name: Some(name) }
    }

    fn format(message: &str, fields: Fields<'_>) -> String {
        if fields.is_empty() {
            return message.to_string();
        }

        let mut line = message.to_string();
        for (key, value) in fields {
            line.push(' ');
            line.push_str(key);
            line.push('=');
            line.push_str(value);
        }
        line
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str, fields: Fields<'_>) {
        let line = Self::format(message, fields);
        let name = self.name.as_deref().unwrap_or("");

        // tracing needs the level at the callsite
        if level == Level::TRACE {
            tracing::trace!(logger = name, "{}", line);
        } else if level == Level::DEBUG {
            tracing::debug!(logger = name, "{}", line);
        } else if level == Level::INFO {
            tracing::info!(logger = name, "{}", line);
        } else if level == Level::WARN {
            tracing::warn!(logger = name, "{}", line);
        } else {
            tracing::error!(logger = name, "{}", line);
        }
    }

    fn is_enabled(&self, level: Level) -> bool {
        if level == Level::TRACE {
            tracing::enabled!(Level::TRACE)
        } else if level == Level::DEBUG {
            tracing::enabled!(Level::DEBUG)
        } else if level == Level::INFO {
            tracing::enabled!(Level::INFO)
        } else if level == Level::WARN {
            tracing::enabled!(Level::WARN)
        } else {
            tracing::enabled!(Level::ERROR)
        }
    }

    fn named(&self, name: &str) -> SharedLogger {
        Arc::new(self.child(name))
    }
}
