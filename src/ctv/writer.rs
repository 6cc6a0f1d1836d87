use crate::Result;

use std::io::{BufWriter, Write};

use serde::Serialize;

/// Newline-delimited JSON sink: one object per line, every line newline-terminated.
/// Counting is left to the caller.
pub struct JsonLinesWriter<W: Write> {
    inner: BufWriter<W>,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(writer: W) -> Self {
        return Self {
            inner: BufWriter::new(writer),
        };
    }

    pub fn write_record<T: Serialize>(&mut self, record: &T) -> Result {
        serde_json::to_writer(&mut self.inner, record)?;
        self.inner.write_all(b"\n")?;

        return Ok(());
    }

    /// Flushes buffered lines and hands back the underlying writer
    pub fn finish(self) -> Result<W> {
        let writer = self.inner.into_inner().map_err(|e| e.into_error())?;
        return Ok(writer);
    }
}
