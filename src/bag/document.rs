use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A term in one document
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocumentTerm<N = f64> {
    pub term: String,
    /// occurrences in this document
    pub frequency: u64,
    /// indices into `Document::sentences`
    pub sentence_indices: Vec<usize>,
    /// `frequency * idf` of the corpus term
    pub tfidf: N,
}

/// A document of the bag
/// Terms are ranked by `tfidf` (desc), ties in first-seen order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound(serialize = "N: Serialize", deserialize = "N: Deserialize<'de>"))]
pub struct Document<N = f64> {
    /// input text
    pub text: String,
    /// text after normalization / stopword removal
    pub normalized_text: String,
    pub sentences: Vec<String>,
    #[serde(with = "indexmap::map::serde_seq")]
    pub(crate) terms: IndexMap<String, DocumentTerm<N>>,
}

impl<N> Document<N> {
    /// Ranked terms
    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = &DocumentTerm<N>> {
        self.terms.values()
    }

    /// Get a term by key
    #[inline]
    pub fn term(&self, key: &str) -> Option<&DocumentTerm<N>> {
        self.terms.get(key)
    }

    /// Get the n best ranked terms
    pub fn top_terms(&self, n: usize) -> Vec<&DocumentTerm<N>> {
        self.terms.values().take(n).collect()
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn sentence_num(&self) -> usize {
        self.sentences.len()
    }
}
