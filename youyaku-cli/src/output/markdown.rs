//! Markdown output formatter

use super::SummaryFormatter;
use anyhow::Result;
use std::io::Write;
use youyaku_core::Output;

/// Markdown formatter - outputs one section per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> SummaryFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        self.document_count += 1;
        writeln!(self.writer, "## {}", source)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", output.summary)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Documents summarized: {}*",
            self.document_count
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
