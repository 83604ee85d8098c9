use std::collections::HashMap;

use crate::models::Error;
use crate::types::{RowIndex, Word, WordFrequencyTable, WordRef};

/// Maps each target word to its plot row.
///
/// Rows are assigned in *reversed* listing order: the first-listed word gets
/// the highest row and the last-listed word gets row 0, so the first word
/// ends up at the top of a dispersion plot. Duplicate words are dropped on
/// their first occurrence before rows are assigned, keeping row indices
/// dense.
#[derive(Clone, Debug)]
pub struct WordRowMapper {
    // Original listing order, deduplicated.
    words: Vec<Word>,
    rows: HashMap<Word, RowIndex>,
}

impl WordRowMapper {
    /// Builds the mapper from the raw space-separated words input.
    ///
    /// Returns [`Error::MissingWords`] when the input is empty or
    /// whitespace-only.
    pub fn new(words_input: &str) -> Result<Self, Error> {
        let mut words: Vec<Word> = Vec::new();
        for word in words_input.split_whitespace() {
            if !words.iter().any(|seen| seen.as_str() == word) {
                words.push(word.to_string());
            }
        }

        if words.is_empty() {
            return Err(Error::MissingWords);
        }

        let word_count = words.len();
        let rows = words
            .iter()
            .enumerate()
            .map(|(position, word)| (word.clone(), word_count - 1 - position))
            .collect();

        Ok(Self { words, rows })
    }

    /// The target words in their original listing order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Row assigned to `word`, if it is a known target word.
    pub fn row(&self, word: &WordRef) -> Option<RowIndex> {
        self.rows.get(word).copied()
    }

    pub fn row_count(&self) -> usize {
        self.words.len()
    }

    /// A zeroed frequency table with one entry per word, ordered by ascending
    /// row index (last-listed word first). Index == row, so the analyzer can
    /// increment counts by row directly.
    pub fn empty_frequency_table(&self) -> WordFrequencyTable {
        self.words
            .iter()
            .rev()
            .map(|word| (word.clone(), 0))
            .collect()
    }
}
