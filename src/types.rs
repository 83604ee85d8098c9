// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a borrowed view of a token as a `str`. Tokens are slices of the
/// analyzed text and are never copied during tokenization.
pub type TokenRef = str;

/// Represents a target word (or, in regex mode, a pattern) as an owned `String`,
/// exactly as the user listed it.
pub type Word = String;

/// Represents a borrowed view of a target word as a `str`. This is used when
/// ownership is not required.
pub type WordRef = str;

/// 0-based index of a token within the tokenized text.
pub type TokenPosition = usize;

/// Vertical plot row assigned to a target word. Rows run in *reversed* listing
/// order: the first-listed word gets the highest row, the last-listed word
/// gets row 0, so the first word renders at the top of a dispersion plot.
pub type RowIndex = usize;

/// A single match: the position of the matching token paired with the row of
/// the target word it matched.
pub type Hit = (TokenPosition, RowIndex);

/// Represents the total number of occurrences of a target word within a text
/// document.
pub type WordFrequency = usize;

/// Frequency table: one `(Word, WordFrequency)` entry per target word,
/// ordered by ascending [`RowIndex`]. Because the order matches row
/// assignment, indexing by row yields that row's word and count, and the
/// words double as plot row labels (last-listed word first).
pub type WordFrequencyTable = Vec<(Word, WordFrequency)>;
