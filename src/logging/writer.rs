//! `io::Write` adapter over a [`Logger`]
//!
//! Lets code that expects a standard stream write into the logger. Each
//! completed line becomes one log call; a trailing partial line is emitted
//! on `flush` or drop.

use super::traits::SharedLogger;
use std::io::{self, Write};
use tracing::Level;

pub struct LogWriter {
    logger: SharedLogger,
    level: Level,
    buffer: Vec<u8>,
}

impl LogWriter {
    pub fn new(logger: SharedLogger, level: Level) -> Self {
        Self {
            logger,
            level,
            buffer: Vec::new(),
        }
    }

    fn emit(&self, line: &[u8]) {
        let line = String::from_utf8_lossy(line);
        let line = line.strip_suffix('\r').unwrap_or(&line);
        self.logger.log(self.level, line, &[]);
    }
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);

        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            self.emit(&line[..line.len() - 1]);
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buffer.is_empty() {
            let line = std::mem::take(&mut self.buffer);
            self.emit(&line);
        }
        Ok(())
    }
}

impl Drop for LogWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
