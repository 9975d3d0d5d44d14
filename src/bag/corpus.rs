use indexmap::IndexMap;
use num::{Float, FromPrimitive};

use crate::bag::{ngram::NgramRecord, term::Term, tfidf::TfIdfEngine};

/// Corpus-wide counts of a term, before IDF exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TermStats {
    /// occurrences over all documents
    pub frequency: u64,
    /// documents containing the term
    pub document_count: u64,
}

/// keep document count and term counts of the corpus
/// Terms are kept in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    doc_num: u64,
    term_stats: IndexMap<String, TermStats>,
}

impl Corpus {
    /// Create a new instance
    pub fn new() -> Self {
        Self {
            doc_num: 0,
            term_stats: IndexMap::new(),
        }
    }

    /// Add a document's terms to the corpus
    /// A term seen for the first time starts at 0, then every record adds its
    /// document-local frequency.
    pub fn add_document(&mut self, records: &[NgramRecord]) {
        self.doc_num += 1;
        for record in records {
            let stats = self.term_stats.entry(record.term.clone()).or_default();
            stats.frequency += record.frequency;
            stats.document_count += 1;
        }
    }

    /// Get the number of documents in the corpus
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.doc_num
    }

    /// Get the counts of a term
    #[inline]
    pub fn term_stats(&self, term: &str) -> Option<&TermStats> {
        self.term_stats.get(term)
    }

    /// Get the current vocabulary size (number of unique terms)
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.term_stats.len()
    }

    /// Compute IDF for every term
    /// Consumes the corpus: counting is over once IDF exists.
    ///
    /// # Returns
    /// * `IndexMap<String, Term<N>>` - terms in first-seen order
    pub fn into_terms<N, E>(self) -> IndexMap<String, Term<N>>
    where
        N: Float + FromPrimitive,
        E: TfIdfEngine<N>,
    {
        let doc_num = self.doc_num;
        self.term_stats
            .into_iter()
            .map(|(key, stats)| {
                let idf = E::idf(doc_num, &stats);
                let term = Term {
                    term: key.clone(),
                    frequency: stats.frequency,
                    document_count: stats.document_count,
                    idf,
                };
                (key, term)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bag::{ngram::extract_ngrams, tfidf::DefaultTfIdfEngine};

    #[test]
    fn sums_local_frequencies_in_first_seen_order() {
        let mut corpus = Corpus::new();
        corpus.add_document(&extract_ngrams(&["cats run. run."], 1));
        corpus.add_document(&extract_ngrams(&["dogs run."], 1));
        assert_eq!(corpus.doc_num(), 2);
        assert_eq!(corpus.vocab_size(), 3);
        assert_eq!(
            corpus.term_stats("run"),
            Some(&TermStats { frequency: 3, document_count: 2 })
        );
        let terms = corpus.into_terms::<f64, DefaultTfIdfEngine>();
        let keys: Vec<&str> = terms.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["cats", "run", "dogs"]);
    }

    #[test]
    fn empty_corpus_has_no_terms() {
        let corpus = Corpus::new();
        assert_eq!(corpus.doc_num(), 0);
        assert!(corpus.into_terms::<f64, DefaultTfIdfEngine>().is_empty());
    }
}
