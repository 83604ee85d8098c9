use std::borrow::Cow;

use log::debug;

use crate::models::{Error, TermMatcher, Tokenizer, WordRowMapper};
use crate::types::{Hit, WordFrequencyTable};

/// Matching options for one analysis call.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Match regardless of letter case.
    pub ignore_case: bool,
    /// Treat each target word as a regular expression instead of a literal.
    pub use_regex: bool,
}

/// Result of a successful analysis.
///
/// `hits` and `frequencies` are always mutually consistent: the counts sum to
/// the number of hits, and every target word has an entry even when its count
/// is 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispersionAnalysis {
    /// `(token position, row)` pairs in ascending token-position order.
    pub hits: Vec<Hit>,
    /// Per-word occurrence counts, ordered by ascending row index so the
    /// entries double as plot row labels (see
    /// [`WordFrequencyTable`](crate::types::WordFrequencyTable)).
    pub frequencies: WordFrequencyTable,
}

/// Runs the full pipeline for one document: guard the inputs, normalize
/// case, build the row mapping and matcher, tokenize, and accumulate hits
/// and frequencies in a single pass over the tokens.
///
/// The analyzer holds no state between calls; identical inputs always yield
/// identical results.
pub struct DocumentWordAnalyzer {
    config: AnalyzerConfig,
    tokenizer: Tokenizer,
}

impl DocumentWordAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Analyzes `text` for occurrences of the space-separated `words`.
    ///
    /// Input guards run in a fixed, documented order: blank text yields
    /// [`Error::MissingText`] before blank words yields
    /// [`Error::MissingWords`]. Well-formed inputs with zero hits yield
    /// [`Error::NoMatches`] rather than an empty result.
    pub fn analyze(&self, text: &str, words: &str) -> Result<DispersionAnalysis, Error> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::MissingText);
        }

        let words = words.trim();
        if words.is_empty() {
            return Err(Error::MissingWords);
        }

        // Literal matching lowers both sides up front. Regex matching must
        // not: lowering a pattern would corrupt constructs like `\p{Lu}`, so
        // case-insensitivity is handled as a compile flag instead.
        let lower_for_literal = self.config.ignore_case && !self.config.use_regex;
        let text: Cow<'_, str> = if lower_for_literal {
            Cow::Owned(text.to_lowercase())
        } else {
            Cow::Borrowed(text)
        };
        let words: Cow<'_, str> = if lower_for_literal {
            Cow::Owned(words.to_lowercase())
        } else {
            Cow::Borrowed(words)
        };

        let mapper = WordRowMapper::new(&words)?;
        let matcher = if self.config.use_regex {
            TermMatcher::pattern(&mapper, self.config.ignore_case)?
        } else {
            TermMatcher::literal(&mapper)
        };

        let tokens = self.tokenizer.tokenize(&text);
        debug!(
            "analyzing {} tokens against {} words",
            tokens.len(),
            mapper.row_count()
        );

        let mut frequencies = mapper.empty_frequency_table();
        let mut hits: Vec<Hit> = Vec::new();
        for (position, token) in tokens.iter().enumerate() {
            if let Some(row) = matcher.match_token(token) {
                hits.push((position, row));
                frequencies[row].1 += 1;
            }
        }

        if hits.is_empty() {
            return Err(Error::NoMatches);
        }

        debug!("found {} hits", hits.len());

        Ok(DispersionAnalysis { hits, frequencies })
    }
}
