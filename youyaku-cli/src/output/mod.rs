//! Output formatting module

use anyhow::Result;
use youyaku_core::Output;

/// Trait for summary output formatters
pub trait SummaryFormatter: Send + Sync {
    /// Format and output one document's summary
    fn format_document(&mut self, source: &str, output: &Output) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
