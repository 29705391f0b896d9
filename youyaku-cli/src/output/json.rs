//! JSON output formatter

use super::SummaryFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use youyaku_core::{Output, SelectedSentence};

/// JSON formatter - outputs document summaries as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentSummary>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentSummary {
    /// Source document (file path or `-` for stdin)
    pub file: String,
    /// The extracted summary
    pub summary: String,
    /// Sentences found by segmentation
    pub total_sentences: usize,
    /// The selected sentences with their document positions
    pub selected: Vec<SelectedSentence>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> SummaryFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()> {
        self.documents.push(DocumentSummary {
            file: source.to_string(),
            summary: output.summary.clone(),
            total_sentences: output.metadata.total_sentences,
            selected: output.selected.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use youyaku_core::SummaryExtractor;

    #[test]
    fn emits_json_array_with_selection() {
        let output = SummaryExtractor::new()
            .extract_text("One. Two. Three. Four.")
            .unwrap();

        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter.format_document("story.txt", &output).unwrap();
            formatter.finish().unwrap();
        }

        let parsed: Vec<DocumentSummary> =
            serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].file, "story.txt");
        assert_eq!(parsed[0].summary, "One. Three. Four.");
        assert_eq!(parsed[0].total_sentences, 4);
        let indices: Vec<usize> = parsed[0].selected.iter().map(|s| s.index).collect();
        assert_eq!(indices, [0, 2, 3]);
    }

    #[test]
    fn pretty_output_is_indented() {
        let output = SummaryExtractor::new().extract_text("One. Two.").unwrap();

        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, true);
            formatter.format_document("story.txt", &output).unwrap();
            formatter.finish().unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("  \"file\""));
    }

    #[test]
    fn empty_run_is_empty_array() {
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, false);
            formatter.finish().unwrap();
        }

        assert_eq!(String::from_utf8(buffer).unwrap(), "[]\n");
    }
}
