use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::error::BagError;

pub const ENGLISH: &str = "english";

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "aren't", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "can't", "cannot", "could", "couldn't", "did", "didn't", "do", "does", "doesn't",
    "doing", "don't", "down", "during", "each", "few", "for", "from", "further", "had", "hadn't",
    "has", "hasn't", "have", "haven't", "having", "he", "he'd", "he'll", "he's", "her", "here",
    "here's", "hers", "herself", "him", "himself", "his", "how", "how's", "i", "i'd", "i'll",
    "i'm", "i've", "if", "in", "into", "is", "isn't", "it", "it's", "its", "itself", "let's", "me",
    "more", "most", "mustn't", "my", "myself", "no", "nor", "not", "of", "off", "on", "once",
    "only", "or", "other", "ought", "our", "ours", "ourselves", "out", "over", "own", "same",
    "shan't", "she", "she'd", "she'll", "she's", "should", "shouldn't", "so", "some", "such",
    "than", "that", "that's", "the", "their", "theirs", "them", "themselves", "then", "there",
    "there's", "these", "they", "they'd", "they'll", "they're", "they've", "this", "those",
    "through", "to", "too", "under", "until", "up", "very", "was", "wasn't", "we", "we'd",
    "we'll", "we're", "we've", "were", "weren't", "what", "what's", "when", "when's", "where",
    "where's", "which", "while", "who", "who's", "whom", "why", "why's", "with", "won't",
    "would", "wouldn't", "you", "you'd", "you'll", "you're", "you've", "your", "yours",
    "yourself", "yourselves",
];

/// language name -> stopword set
/// built on first access, never mutated
static STOP_WORDS: LazyLock<HashMap<&'static str, HashSet<&'static str>>> = LazyLock::new(|| {
    let mut dict = HashMap::new();
    dict.insert(ENGLISH, ENGLISH_STOP_WORDS.iter().copied().collect());
    dict
});

/// Stopword set of a language
///
/// # Arguments
/// * `language` - language name, e.g. `"english"`
///
/// # Returns
/// * `Option<&HashSet<&str>>` - `None` if the language is not registered
#[inline]
pub fn stop_words(language: &str) -> Option<&'static HashSet<&'static str>> {
    STOP_WORDS.get(language)
}

/// Names of all registered languages
pub fn languages() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = STOP_WORDS.keys().copied().collect();
    names.sort_unstable();
    names
}

/// Check if `word` is a stopword of `language`
/// Exact match, case sensitive.
#[inline]
pub fn is_stop_word(language: &str, word: &str) -> bool {
    stop_words(language).is_some_and(|set| set.contains(word))
}

/// Remove stopwords of `language` from a text
/// Splits on single ' ', so the text should be normalized first.
///
/// # Arguments
/// * `text` - text to filter
/// * `language` - language name
///
/// # Returns
/// * `Result<String, BagError>` - filtered text joined by ' '
pub fn remove_stop_words(text: &str, language: &str) -> Result<String, BagError> {
    let set = stop_words(language).ok_or_else(|| BagError::UnknownLanguage(language.to_string()))?;
    Ok(filter_with(text, set))
}

/// Remove english stopwords from a text
pub fn remove_stop_words_english(text: &str) -> String {
    match stop_words(ENGLISH) {
        Some(set) => filter_with(text, set),
        None => text.to_string(),
    }
}

pub(crate) fn filter_with(text: &str, set: &HashSet<&str>) -> String {
    text.split(' ')
        .filter(|word| !set.contains(word))
        .collect::<Vec<&str>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_is_registered() {
        assert!(languages().contains(&ENGLISH));
        assert!(is_stop_word(ENGLISH, "the"));
        assert!(!is_stop_word(ENGLISH, "rust"));
    }

    #[test]
    fn removes_english_stop_words() {
        let out = remove_stop_words_english("the cat and the dog sat on a mat");
        assert_eq!(out, "cat dog sat mat");
        let set = stop_words(ENGLISH).unwrap();
        assert!(out.split(' ').all(|w| !set.contains(w)));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert_eq!(remove_stop_words_english("The cat"), "The cat");
    }

    #[test]
    fn unknown_language_is_an_error() {
        assert_eq!(
            remove_stop_words("the cat", "klingon"),
            Err(BagError::UnknownLanguage("klingon".to_string()))
        );
    }

    #[test]
    fn empty_tokens_survive_the_split() {
        assert_eq!(remove_stop_words_english("cat  the dog"), "cat  dog");
    }
}
