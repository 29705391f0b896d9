//! Plain text output formatter

use super::SummaryFormatter;
use anyhow::Result;
use std::io::{self, Write};
use youyaku_core::Output;

/// Plain text formatter - outputs one summary per document
pub struct TextFormatter<W: Write> {
    writer: W,
    show_source: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter.
    ///
    /// With `show_source`, each summary line is prefixed with the document
    /// it came from (used for multi-document runs).
    pub fn new(writer: W, show_source: bool) -> Self {
        Self {
            writer,
            show_source,
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(show_source: bool) -> Self {
        Self::new(io::stdout(), show_source)
    }
}

impl<W: Write + Send + Sync> SummaryFormatter for TextFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        if self.show_source {
            writeln!(self.writer, "{}: {}", source, output.summary)?;
        } else {
            writeln!(self.writer, "{}", output.summary)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
