use crate::types::WordFrequencyTable;

/// Reorders a frequency table for display.
///
/// ### Sorting Order:
/// - **Primary:** Sorts by frequency in descending order (higher frequency first).
/// - **Secondary:** If two words have the same frequency, sorts by word in
///   descending lexicographical order for deterministic ordering.
///
/// The row-ordered table returned by the analyzer is left untouched; this
/// produces the ordering a frequency table is presented in, while the
/// original remains indexed by plot row.
///
/// ### Example:
/// ```rust
/// use word_dispersion::sort_frequencies;
///
/// let frequencies = vec![
///     ("mat".to_string(), 1),
///     ("cat".to_string(), 1),
///     ("the".to_string(), 2),
/// ];
///
/// let sorted = sort_frequencies(&frequencies);
/// assert_eq!(sorted, vec![
///     ("the".to_string(), 2),
///     ("mat".to_string(), 1),
///     ("cat".to_string(), 1),
/// ]);
/// ```
pub fn sort_frequencies(frequencies: &WordFrequencyTable) -> WordFrequencyTable {
    let mut sorted: WordFrequencyTable = frequencies.to_vec();

    sorted.sort_by(|a, b| {
        b.1.cmp(&a.1) // Sort by frequency (descending)
            .then_with(|| b.0.cmp(&a.0)) // Secondary sort by word (descending)
    });

    sorted
}
