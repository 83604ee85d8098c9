mod constants;
pub mod models;
pub use constants::DEFAULT_ANALYZER_CONFIG;
pub use models::{
    AnalyzerConfig, DispersionAnalysis, DocumentWordAnalyzer, Error, TermMatcher, Tokenizer,
    WordRowMapper,
};
pub mod types;
mod utils;
pub use types::{
    Hit, RowIndex, TokenPosition, TokenRef, Word, WordFrequency, WordFrequencyTable, WordRef,
};
pub use utils::sort_frequencies;

/// Splits `text` into word and punctuation tokens using the crate's
/// Unicode-aware rule. See [`Tokenizer`] for the exact contract.
pub fn tokenize(text: &str) -> Vec<&TokenRef> {
    Tokenizer::new().tokenize(text)
}

/// Analyzes `text` for occurrences of the space-separated `words` using
/// [`DEFAULT_ANALYZER_CONFIG`] (case-sensitive, literal matching).
pub fn analyze_text(text: &str, words: &str) -> Result<DispersionAnalysis, Error> {
    analyze_text_with_config(text, words, &DEFAULT_ANALYZER_CONFIG)
}

/// Analyzes `text` for occurrences of the space-separated `words` with the
/// given matching options.
pub fn analyze_text_with_config(
    text: &str,
    words: &str,
    config: &AnalyzerConfig,
) -> Result<DispersionAnalysis, Error> {
    let analyzer = DocumentWordAnalyzer::new(*config);
    analyzer.analyze(text, words)
}
