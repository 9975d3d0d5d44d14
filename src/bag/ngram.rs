use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::normalizer::normalize;

/// tokens shorter than this (in chars) are not part of any n-gram
pub const MIN_TOKEN_LENGTH: usize = 3;

/// An n-gram found in one document
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NgramRecord {
    /// tokens joined by ' '
    pub term: String,
    /// every occurrence counts, repeats in one sentence included
    pub frequency: u64,
    /// ascending sentence indices, each at most once
    pub sentence_indices: Vec<usize>,
}

impl NgramRecord {
    fn new(term: String) -> Self {
        Self {
            term,
            frequency: 0,
            sentence_indices: Vec::new(),
        }
    }

    #[inline]
    fn hit(&mut self, sentence_index: usize) {
        self.frequency += 1;
        // sentences are visited in order, so a repeat is always the last entry
        if self.sentence_indices.last() != Some(&sentence_index) {
            self.sentence_indices.push(sentence_index);
        }
    }
}

/// Split a text on white space and keep words of at least `min_length` chars
///
/// # Arguments
/// * `text` - text to split
/// * `min_length` - minimum word length in chars
///
/// # Returns
/// * `Vec<&str>` - words in text order
pub fn extract_words(text: &str, min_length: usize) -> Vec<&str> {
    text.split_whitespace()
        .filter(|word| word.chars().count() >= min_length)
        .collect()
}

/// Extract every n-gram of 1..=`max_length` tokens from sentences
/// with the default minimum token length.
///
/// # Arguments
/// * `sentences` - sentences of one document, index = position in the slice
/// * `max_length` - longest n-gram in tokens
///
/// # Returns
/// * `Vec<NgramRecord>` - distinct n-grams in first-encountered order
pub fn extract_ngrams<S>(sentences: &[S], max_length: usize) -> Vec<NgramRecord>
where
    S: AsRef<str>,
{
    extract_ngrams_with_min_length(sentences, max_length, MIN_TOKEN_LENGTH)
}

/// Extract every n-gram of 1..=`max_length` tokens from sentences.
///
/// Every sentence is normalized again and trimmed, then split into words
/// of at least `min_length` chars. From each word position the window grows
/// one word at a time up to `max_length` words or the end of the sentence,
/// and every window is one n-gram occurrence.
pub fn extract_ngrams_with_min_length<S>(
    sentences: &[S],
    max_length: usize,
    min_length: usize,
) -> Vec<NgramRecord>
where
    S: AsRef<str>,
{
    let mut records: IndexMap<String, NgramRecord> = IndexMap::new();

    for (sentence_index, sentence) in sentences.iter().enumerate() {
        let cleaned = normalize(sentence.as_ref());
        let words = extract_words(cleaned.trim(), min_length);

        for start in 0..words.len() {
            let end = usize::min(start.saturating_add(max_length), words.len());
            let mut ngram = String::new();
            for (offset, word) in words[start..end].iter().enumerate() {
                if offset > 0 {
                    ngram.push(' ');
                }
                ngram.push_str(word);
                records
                    .entry(ngram.clone())
                    .or_insert_with(|| NgramRecord::new(ngram.clone()))
                    .hit(sentence_index);
            }
        }
    }

    records.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(records: &[NgramRecord]) -> Vec<&str> {
        records.iter().map(|r| r.term.as_str()).collect()
    }

    #[test]
    fn windows_up_to_max_length() {
        let records = extract_ngrams(&["alpha beta gamma delta"], 3);
        assert_eq!(
            terms(&records),
            vec![
                "alpha",
                "alpha beta",
                "alpha beta gamma",
                "beta",
                "beta gamma",
                "beta gamma delta",
                "gamma",
                "gamma delta",
                "delta",
            ]
        );
        assert!(records.iter().all(|r| r.frequency == 1));
    }

    #[test]
    fn unigrams_only() {
        let records = extract_ngrams(&["Cats run fast."], 1);
        assert_eq!(terms(&records), vec!["cats", "run", "fast"]);
    }

    #[test]
    fn short_tokens_are_skipped_before_windowing() {
        let records = extract_ngrams(&["cats in a box"], 2);
        assert_eq!(terms(&records), vec!["cats", "cats box", "box"]);
    }

    #[test]
    fn repeats_count_but_sentence_recorded_once() {
        let sentences = ["run run run.", "walk.", "run!"];
        let records = extract_ngrams(&sentences, 2);
        let run = records.iter().find(|r| r.term == "run").unwrap();
        assert_eq!(run.frequency, 4);
        assert_eq!(run.sentence_indices, vec![0, 2]);
        let run_run = records.iter().find(|r| r.term == "run run").unwrap();
        assert_eq!(run_run.frequency, 2);
        assert_eq!(run_run.sentence_indices, vec![0]);
        let walk = records.iter().find(|r| r.term == "walk").unwrap();
        assert_eq!(walk.sentence_indices, vec![1]);
    }

    #[test]
    fn empty_input() {
        let none: [&str; 0] = [];
        assert!(extract_ngrams(&none, 3).is_empty());
        assert!(extract_ngrams(&["  ", "a b"], 3).is_empty());
    }

    #[test]
    fn huge_max_length_stops_at_sentence_end() {
        let records = extract_ngrams(&["alpha beta gamma."], usize::MAX);
        assert_eq!(
            terms(&records),
            vec!["alpha", "alpha beta", "alpha beta gamma", "beta", "beta gamma", "gamma"]
        );
    }

    #[test]
    fn custom_min_length() {
        let records = extract_ngrams_with_min_length(&["a bb ccc"], 1, 1);
        assert_eq!(terms(&records), vec!["a", "bb", "ccc"]);
    }

    #[test]
    fn extract_words_filters_by_char_length() {
        assert_eq!(extract_words("añó an  and", 3), vec!["añó", "and"]);
    }
}
