use std::sync::LazyLock;

use regex::Regex;

use crate::types::TokenRef;

/// A token is either a run that starts and ends with a Unicode-alphabetic
/// character (interior non-whitespace is allowed, keeping "well-known" and
/// "don't" whole), or a run of non-whitespace characters containing no
/// alphabetic character at all ("...", "$5"). Whitespace always separates
/// tokens and is never part of one.
const TOKEN_PATTERN: &str = r"\p{Alphabetic}(?:\S*\p{Alphabetic})?|[^\s\p{Alphabetic}]+";

static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).expect("token pattern must compile"));

/// Splits raw text into word and punctuation tokens.
///
/// The split rule is Unicode-aware: "alphabetic" means the Unicode
/// `Alphabetic` property, not ASCII letters, so non-Latin scripts tokenize
/// correctly. Tokens are borrowed slices of the input; nothing is copied.
#[derive(Clone, Debug)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        // `Regex` is an `Arc` around the compiled program, so this clone is cheap.
        Self {
            pattern: TOKEN_REGEX.clone(),
        }
    }

    /// Tokenizer function to split the text into individual tokens.
    ///
    /// Note: This explicitly does not modify the case of the text. Matching
    /// is greedy, leftmost-first, and non-overlapping; every non-whitespace
    /// character of the input lands in exactly one token. Any input is
    /// valid; empty input yields an empty sequence.
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t TokenRef> {
        self.pattern.find_iter(text).map(|m| m.as_str()).collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}
