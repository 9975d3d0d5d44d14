use serde::{Deserialize, Serialize};

use crate::{error::BagError, utils::stopwords};

pub const DEFAULT_MAX_NGRAM_LENGTH: usize = 3;

/// Where sentence splitting happens relative to text cleaning
///
/// Normalization strips the terminal punctuation sentences are split on,
/// so splitting the cleaned text finds nothing when normalization is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentencePolicy {
    /// split the original text, then clean every sentence
    #[default]
    SplitBeforeCleaning,
    /// split the cleaned text
    /// a normalized document yields no sentences and no terms
    Legacy,
    /// split the cleaned text, the whole cleaned text is one sentence if nothing matched
    WholeTextFallback,
}

/// Options of a `Bag` build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BagConfig {
    /// normalize documents before analysis
    pub normalize: bool,
    /// drop stopwords of `language`
    pub remove_stop_words: bool,
    /// longest n-gram, in tokens
    pub max_ngram_length: usize,
    /// shorter tokens are not part of any n-gram
    pub min_token_length: usize,
    /// stopword dictionary name
    pub language: String,
    pub sentence_policy: SentencePolicy,
}

impl Default for BagConfig {
    fn default() -> Self {
        Self {
            normalize: false,
            remove_stop_words: false,
            max_ngram_length: DEFAULT_MAX_NGRAM_LENGTH,
            min_token_length: crate::bag::ngram::MIN_TOKEN_LENGTH,
            language: stopwords::ENGLISH.to_string(),
            sentence_policy: SentencePolicy::default(),
        }
    }
}

impl BagConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn with_remove_stop_words(mut self, remove_stop_words: bool) -> Self {
        self.remove_stop_words = remove_stop_words;
        self
    }

    pub fn with_max_ngram_length(mut self, max_ngram_length: usize) -> Self {
        self.max_ngram_length = max_ngram_length;
        self
    }

    pub fn with_min_token_length(mut self, min_token_length: usize) -> Self {
        self.min_token_length = min_token_length;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_sentence_policy(mut self, sentence_policy: SentencePolicy) -> Self {
        self.sentence_policy = sentence_policy;
        self
    }

    /// Check the options before a build
    /// The language is only checked when stopwords are removed.
    pub fn validate(&self) -> Result<(), BagError> {
        if self.max_ngram_length == 0 {
            return Err(BagError::InvalidNgramLength(self.max_ngram_length));
        }
        if self.remove_stop_words && stopwords::stop_words(&self.language).is_none() {
            return Err(BagError::UnknownLanguage(self.language.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = BagConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.max_ngram_length, 3);
        assert_eq!(config.min_token_length, 3);
        assert_eq!(config.sentence_policy, SentencePolicy::SplitBeforeCleaning);
    }

    #[test]
    fn zero_ngram_length_is_rejected() {
        let config = BagConfig::new().with_max_ngram_length(0);
        assert_eq!(config.validate(), Err(BagError::InvalidNgramLength(0)));
    }

    #[test]
    fn unknown_language_only_matters_with_stop_words() {
        let config = BagConfig::new().with_language("klingon");
        assert_eq!(config.validate(), Ok(()));
        let config = config.with_remove_stop_words(true);
        assert_eq!(config.validate(), Err(BagError::UnknownLanguage("klingon".to_string())));
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: BagConfig =
            serde_json::from_str(r#"{"normalize": true, "sentence_policy": "whole_text_fallback"}"#).unwrap();
        assert!(config.normalize);
        assert!(!config.remove_stop_words);
        assert_eq!(config.max_ngram_length, DEFAULT_MAX_NGRAM_LENGTH);
        assert_eq!(config.sentence_policy, SentencePolicy::WholeTextFallback);
    }
}
