use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::models::{Error, WordRowMapper};
use crate::types::{RowIndex, TokenRef, Word};

/// Per-token match strategy, selected once per analysis call.
///
/// Both variants answer the same question: does this token match one of the
/// target words, and if so, which plot row does it land on? When several
/// words could match the same token, the earliest-listed word wins.
pub enum TermMatcher {
    /// Exact string equality against the target words (after any upstream
    /// case lowering).
    Literal { rows: HashMap<Word, RowIndex> },
    /// Each target word is a regular expression. All patterns are compiled
    /// into a single anchored alternation with one named group per word, in
    /// original listing order; the engine's leftmost-alternative preference
    /// then implements earliest-listed-wins, and the participating group
    /// identifies the winner.
    Pattern {
        combined: Regex,
        group_names: Vec<String>,
        group_rows: Vec<RowIndex>,
    },
}

impl TermMatcher {
    pub fn literal(mapper: &WordRowMapper) -> Self {
        let rows = mapper
            .words()
            .iter()
            .filter_map(|word| mapper.row(word).map(|row| (word.clone(), row)))
            .collect();
        Self::Literal { rows }
    }

    /// Compiles the target words as regular expressions.
    ///
    /// Every pattern must match the *entire* token for a hit, hence the
    /// `^(?:...)$` anchoring. Each pattern is validated on its own first so
    /// that [`Error::InvalidPattern`] can name the offending one.
    /// Case-insensitivity is applied as a compile flag, never by lowering
    /// the patterns, so classes like `\p{Lu}` keep their meaning.
    pub fn pattern(mapper: &WordRowMapper, ignore_case: bool) -> Result<Self, Error> {
        for word in mapper.words() {
            RegexBuilder::new(&format!("^(?:{word})$"))
                .case_insensitive(ignore_case)
                .build()
                .map_err(|source| Error::InvalidPattern {
                    pattern: word.clone(),
                    source,
                })?;
        }

        let mut group_names = Vec::with_capacity(mapper.row_count());
        let mut group_rows = Vec::with_capacity(mapper.row_count());
        let mut alternatives = Vec::with_capacity(mapper.row_count());
        for (index, word) in mapper.words().iter().enumerate() {
            let name = format!("t{index}");
            alternatives.push(format!("(?P<{name}>{word})"));
            group_names.push(name);
            group_rows.push(mapper.row(word).unwrap_or_default());
        }

        let joined = format!("^(?:{})$", alternatives.join("|"));
        let combined = RegexBuilder::new(&joined)
            .case_insensitive(ignore_case)
            .build()
            // Individually valid patterns can still clash here, e.g. two
            // patterns defining the same group name.
            .map_err(|source| Error::InvalidPattern {
                pattern: joined.clone(),
                source,
            })?;

        Ok(Self::Pattern {
            combined,
            group_names,
            group_rows,
        })
    }

    /// Returns the plot row of the earliest-listed target word matching the
    /// whole token, or `None` when no word matches.
    pub fn match_token(&self, token: &TokenRef) -> Option<RowIndex> {
        match self {
            Self::Literal { rows } => rows.get(token).copied(),
            Self::Pattern {
                combined,
                group_names,
                group_rows,
            } => {
                let captures = combined.captures(token)?;
                group_names
                    .iter()
                    .position(|name| captures.name(name).is_some())
                    .map(|index| group_rows[index])
            }
        }
    }
}
