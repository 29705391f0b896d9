//! Representative-sentence selection
//!
//! Picks up to `max_sentences` sentences from a segmented document: the
//! first, the structurally middle (`n / 2`), and the last. Short documents
//! pass through unchanged. Index computation and string assembly are kept
//! separate so callers can recover which sentences were chosen.

/// Compute the indices of the selected sentences, in output order.
///
/// For `n <= max_sentences` every index is returned. Otherwise the list is
/// built as first, then middle (only when `max_sentences >= 3`), then last
/// (only when `max_sentences >= 2`), and truncated to `max_sentences`
/// entries. The truncation is what makes `max_sentences == 0` yield an
/// empty selection; the gating alone can never overshoot the bound.
pub fn select_indices(n: usize, max_sentences: usize) -> Vec<usize> {
    if n <= max_sentences {
        return (0..n).collect();
    }

    let mut indices = vec![0];
    if max_sentences >= 3 {
        indices.push(n / 2);
    }
    if max_sentences >= 2 {
        indices.push(n - 1);
    }
    indices.truncate(max_sentences);
    indices
}

/// Join up to `max_sentences` representative sentences into a summary.
///
/// Selection follows [`select_indices`]; the chosen sentences are joined
/// with a single space, in selection order (first, middle, last — never
/// re-sorted). When the list already fits the bound it is returned joined
/// as-is.
///
/// `max_sentences == 0` produces an empty summary for any input.
///
/// ```
/// use youyaku_core::select;
///
/// let sentences: Vec<String> = ["One.", "Two.", "Three.", "Four.", "Five."]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// assert_eq!(select(&sentences, 3), "One. Three. Five.");
/// ```
pub fn select(sentences: &[String], max_sentences: usize) -> String {
    let picked: Vec<&str> = select_indices(sentences.len(), max_sentences)
        .into_iter()
        .map(|i| sentences[i].as_str())
        .collect();
    picked.join(" ")
}
