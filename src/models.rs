pub mod document_word_analyzer;
pub use document_word_analyzer::{AnalyzerConfig, DispersionAnalysis, DocumentWordAnalyzer};

pub mod word_row_mapper;
pub use word_row_mapper::WordRowMapper;

pub mod term_matcher;
pub use term_matcher::TermMatcher;

pub mod tokenizer;
pub use tokenizer::Tokenizer;

pub mod error;
pub use error::Error;
