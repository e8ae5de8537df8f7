//! Response rendering
//!
//! Lineage responses are open-ended JSON objects, so they are rendered
//! verbatim as JSON rather than decoded into a fixed schema.

use std::io::{self, Write};

use serde_json::Value;

use crate::error::{LineageError, Result};

/// Sink for decoded API responses
pub trait OutputSink {
    /// Write a rendered representation of `value` to the sink
    fn render(&mut self, value: &Value) -> Result<()>;
}

/// Pretty-printed JSON sink over any writer
pub struct JsonSink<W: Write> {
    writer: W,
}

impl JsonSink<io::Stdout> {
    /// Sink writing to standard output
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> JsonSink<W> {
    /// Sink writing to an arbitrary writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputSink for JsonSink<W> {
    fn render(&mut self, value: &Value) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, value)
            .map_err(|e| LineageError::Render(e.to_string()))?;
        writeln!(self.writer).map_err(|e| LineageError::Render(e.to_string()))?;
        Ok(())
    }
}
