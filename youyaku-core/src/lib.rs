//! Extractive preview summaries for prose documents
//!
//! Youyaku splits text into sentences with a punctuation heuristic and keeps
//! a representative subset (first, middle, last) as a short preview, e.g. for
//! cards in a UI. No statistical or machine-learning ranking is involved.
//!
//! The pure pipeline is exposed as free functions ([`segment`], [`select`],
//! [`extract_summary`]); [`SummaryExtractor`] wraps it with input handling
//! and runtime metadata.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;
pub mod segmenter;
pub mod selector;

use error::Result;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{Input, Metadata, Output, SelectedSentence};
pub use error::Error;
pub use segmenter::segment;
pub use selector::{select, select_indices};

/// Main entry point for summary extraction
///
/// Holds a [`Config`] and turns any [`Input`] into an [`Output`] carrying
/// the summary, the selected sentences, and runtime metadata.
#[derive(Debug, Clone, Default)]
pub struct SummaryExtractor {
    config: Config,
}

impl SummaryExtractor {
    /// Create an extractor with the default configuration (3 sentences)
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create an extractor with a specific summary length bound
    pub fn with_max_sentences(max_sentences: usize) -> Self {
        Self::with_config(Config::builder().max_sentences(max_sentences).build())
    }

    /// Create an extractor with a custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Extract a summary from the given input
    pub fn extract(&self, input: Input) -> Result<Output> {
        let start = std::time::Instant::now();

        let text = input.read_text()?;
        let total_bytes = text.len();

        let sentences = segment(&text);
        let indices = select_indices(sentences.len(), self.config.max_sentences);

        let selected: Vec<SelectedSentence> = indices
            .iter()
            .map(|&index| SelectedSentence {
                text: sentences[index].clone(),
                index,
            })
            .collect();

        let summary = selected
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let metadata = Metadata {
            total_sentences: sentences.len(),
            selected_count: selected.len(),
            total_bytes,
            processing_time_ms: start.elapsed().as_millis() as u64,
        };

        Ok(Output {
            summary,
            selected,
            metadata,
        })
    }

    /// Extract a summary from a text string (convenience method)
    pub fn extract_text(&self, text: &str) -> Result<Output> {
        self.extract(Input::from_text(text))
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

// Convenience functions

/// Extract a summary string with up to `max_sentences` sentences.
///
/// Equivalent to `select(&segment(text), max_sentences)`.
///
/// ```
/// use youyaku_core::extract_summary;
///
/// let text = "First. Second. Third. Fourth.";
/// assert_eq!(extract_summary(text, 3), "First. Third. Fourth.");
/// ```
pub fn extract_summary(text: &str, max_sentences: usize) -> String {
    select(&segment(text), max_sentences)
}

/// Summarize a file with the default configuration
pub fn summarize_file<P: AsRef<std::path::Path>>(path: P) -> Result<Output> {
    SummaryExtractor::new().extract(Input::from_file(path.as_ref().to_path_buf()))
}
