use thiserror::Error;

/// Errors raised while configuring or building a `Bag`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BagError {
    /// n-gram window must hold at least one token
    #[error("invalid max n-gram length: {0} (must be at least 1)")]
    InvalidNgramLength(usize),
    /// no stopword dictionary is registered under this language name
    #[error("unknown stopword language: {0}")]
    UnknownLanguage(String),
}

/// Reason a normalization degraded to an empty text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("input is not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 { valid_up_to: usize },
}
