//! Punctuation-based sentence segmentation
//!
//! Splits prose into sentences at `.`, `!`, or `?` followed by whitespace.
//! The heuristic is intentionally naive: ASCII terminators only, no
//! abbreviation handling ("Dr. Smith" splits after "Dr."). Callers that need
//! language-aware boundaries should segment upstream and feed the sentence
//! list to [`crate::select`] directly.

/// Sentence-terminating characters.
const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Split `text` into an ordered list of sentences.
///
/// The input is trimmed, then cut at every point where a terminator is
/// immediately followed by whitespace. The terminator stays attached to the
/// preceding sentence; the whitespace run between sentences is consumed. The
/// final segment is kept even without a trailing terminator, and empty
/// segments are dropped.
///
/// ```
/// use youyaku_core::segment;
///
/// let sentences = segment("First one. Second one! Third?");
/// assert_eq!(sentences, ["First one.", "Second one!", "Third?"]);
/// ```
pub fn segment(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut after_terminator = false;
    // True while consuming the whitespace run that separates two sentences.
    let mut in_separator = false;

    for (idx, ch) in trimmed.char_indices() {
        if in_separator {
            if ch.is_whitespace() {
                continue;
            }
            start = idx;
            in_separator = false;
        }

        if ch.is_whitespace() && after_terminator {
            let sentence = &trimmed[start..idx];
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            in_separator = true;
            after_terminator = false;
            continue;
        }

        after_terminator = TERMINATORS.contains(&ch);
    }

    // Trimmed input never ends in whitespace, so the tail is non-empty
    // unless the whole text was a single separator run.
    if !in_separator {
        let tail = &trimmed[start..];
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
    }

    sentences
}
