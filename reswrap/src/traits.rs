//! Traits for target-agnostic code emission in reswrap.

use crate::error::Error;

/// A line-oriented text sink with block indentation.
///
/// The wrapper emitter only ever talks to this trait, so it stays unaware of
/// how lines are buffered or which indent unit is used.
///
/// # Example
///
/// ```rust
/// use reswrap::traits::LineWriter;
/// use reswrap::writer::OutputWriter;
///
/// let mut writer = OutputWriter::new();
/// writer.write_line("namespace Sample {");
/// writer.indent();
/// writer.write_line("// body");
/// writer.dedent()?;
/// writer.write_line("}");
/// assert_eq!(writer.output(), "namespace Sample {\n    // body\n}\n");
/// # Ok::<(), reswrap::Error>(())
/// ```
pub trait LineWriter {
    /// Write one line at the current indentation level.
    fn write_line(&mut self, line: &str);

    /// Write an empty line. Blank lines never carry indentation.
    fn blank_line(&mut self);

    /// Open one indentation level.
    fn indent(&mut self);

    /// Close one indentation level.
    ///
    /// Closing a level that was never opened is a bug in the caller and
    /// returns [`Error::IndentUnderflow`].
    fn dedent(&mut self) -> Result<(), Error>;

    /// Everything written so far.
    fn output(&self) -> &str;
}
