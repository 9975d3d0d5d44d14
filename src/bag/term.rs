use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::normalizer::normalize;

/// A term of the corpus
/// One per distinct key. `idf` is only known once the whole corpus was counted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Term<N = f64> {
    /// word or n-gram joined by ' '
    pub term: String,
    /// occurrences over all documents
    pub frequency: u64,
    /// documents containing the term
    pub document_count: u64,
    pub idf: N,
}

/// A term and its occurrence count
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TermCount {
    pub term: String,
    pub frequency: u64,
}

/// TermFrequency struct
/// Counts the occurrences of each term, in first-seen order.
///
/// # Examples
/// ```
/// use tf_idf_bag::bag::term::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_terms(&["term1", "term2", "term1"]);
///
/// let counts = term_freq.term_count_vector();
/// assert_eq!(counts[0].term, "term1");
/// assert_eq!(counts[0].frequency, 2);
/// assert_eq!(counts[1].frequency, 1);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
}

impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
        }
    }

    #[inline]
    fn add_term(&mut self, term: &str) {
        *self.term_count.entry(term.to_string()).or_insert(0) += 1;
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }

    /// Terms with counts in first-seen order
    pub fn term_count_vector(&self) -> Vec<TermCount> {
        self.term_count
            .iter()
            .map(|(term, &frequency)| TermCount { term: term.clone(), frequency })
            .collect()
    }
}

/// Count the terms of a text
/// Splits on single ' ', so consecutive spaces produce empty terms.
///
/// # Arguments
/// * `text` - text to count
/// * `normalize_first` - normalize the text before splitting
///
/// # Returns
/// * `Vec<TermCount>` - terms in first-seen order
pub fn get_terms_frequency(text: &str, normalize_first: bool) -> Vec<TermCount> {
    let normalized;
    let text = if normalize_first {
        normalized = normalize(text);
        normalized.as_str()
    } else {
        text
    };
    let words: Vec<&str> = text.split(' ').collect();
    let mut freq = TermFrequency::new();
    freq.add_terms(&words);
    freq.term_count_vector()
}
