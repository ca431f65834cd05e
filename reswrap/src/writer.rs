//! Buffered, indent-tracking implementation of [`LineWriter`].

use crate::{error::Error, traits::LineWriter};

const INDENT_UNIT: &str = "    ";

/// Collects emitted lines into a single `String`.
///
/// Lines always end with `\n`, regardless of platform.
#[derive(Debug, Default, Clone)]
pub struct OutputWriter {
    buffer: String,
    indent_level: usize,
}

impl OutputWriter {
    /// Creates a new, empty writer at indentation level zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current indentation level.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Consumes the writer and returns the collected text.
    pub fn into_output(self) -> String {
        self.buffer
    }
}

impl LineWriter for OutputWriter {
    fn write_line(&mut self, line: &str) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(INDENT_UNIT);
        }
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    fn blank_line(&mut self) {
        self.buffer.push('\n');
    }

    fn indent(&mut self) {
        self.indent_level += 1;
    }

    fn dedent(&mut self) -> Result<(), Error> {
        self.indent_level = self
            .indent_level
            .checked_sub(1)
            .ok_or(Error::IndentUnderflow)?;
        Ok(())
    }

    fn output(&self) -> &str {
        &self.buffer
    }
}
