//! Data Transfer Objects for the extraction API

use crate::error::{Error, Result};
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Input source for extraction
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Input {
    /// Raw text string
    Text(String),
    /// File path
    File(PathBuf),
    /// Raw bytes (UTF-8)
    Bytes(Vec<u8>),
    /// Reader (not serializable)
    #[cfg_attr(feature = "serde", serde(skip))]
    Reader(Box<dyn Read>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Input::File(path) => f.debug_tuple("File").field(path).finish(),
            Input::Bytes(bytes) => f.debug_tuple("Bytes").field(&bytes.len()).finish(),
            Input::Reader(_) => f.debug_tuple("Reader").field(&"<dyn Read>").finish(),
        }
    }
}

impl Input {
    /// Create input from text
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    /// Create input from file path
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from a reader
    pub fn from_reader<R: Read + 'static>(reader: R) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Read the text content from the input
    pub fn read_text(self) -> Result<String> {
        match self {
            Input::Text(text) => Ok(text),
            Input::File(path) => fs::read_to_string(&path).map_err(Error::Io),
            Input::Bytes(bytes) => String::from_utf8(bytes).map_err(Error::Utf8),
            Input::Reader(mut reader) => {
                let mut buffer = String::new();
                reader.read_to_string(&mut buffer).map_err(Error::Io)?;
                Ok(buffer)
            }
        }
    }
}

/// A sentence chosen for the summary, with its position in the
/// segmented document
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectedSentence {
    /// The sentence text
    pub text: String,
    /// Index into the segmented sentence list
    pub index: usize,
}

/// Extraction metadata with runtime statistics
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Metadata {
    /// Sentences found by segmentation
    pub total_sentences: usize,
    /// Sentences kept in the summary
    pub selected_count: usize,
    /// Total bytes of input text
    pub total_bytes: usize,
    /// Extraction time in milliseconds
    pub processing_time_ms: u64,
}

/// Complete extraction output with summary and metadata
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// The summary string, selected sentences joined by single spaces
    pub summary: String,
    /// The selected sentences in output order
    pub selected: Vec<SelectedSentence>,
    /// Extraction metadata
    pub metadata: Metadata,
}
