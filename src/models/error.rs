use thiserror::Error;

/// Expected, user-facing analysis conditions. None of these are program
/// faults: `MissingText`, `MissingWords`, and `NoMatches` are recoverable
/// input states the caller should surface as guidance, and `InvalidPattern`
/// reports a malformed user regex rather than silently treating it as a
/// non-match.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Please provide an input text.")]
    MissingText,

    #[error("Please provide words to plot.")]
    MissingWords,

    #[error("None of the words were found.")]
    NoMatches,

    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

impl Error {
    /// Stable identifier for this condition, intended as the key for
    /// dismissable warning banners so repeated identical warnings replace
    /// each other instead of stacking.
    pub fn id(&self) -> &'static str {
        match self {
            Error::MissingText => "no-text",
            Error::MissingWords => "no-words",
            Error::NoMatches => "no-plot",
            Error::InvalidPattern { .. } => "bad-pattern",
        }
    }
}
