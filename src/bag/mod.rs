pub mod config;
pub mod corpus;
pub mod document;
pub mod ngram;
pub mod sentence;
pub mod term;
pub mod tfidf;

use std::collections::HashSet;
use std::marker::PhantomData;

use indexmap::IndexMap;
use num::{Float, FromPrimitive};
use serde::Serialize;

use crate::{
    bag::{
        config::{BagConfig, SentencePolicy},
        corpus::Corpus,
        document::{Document, DocumentTerm},
        ngram::{extract_ngrams_with_min_length, NgramRecord},
        sentence::split_sentences,
        term::Term,
        tfidf::{DefaultTfIdfEngine, TfIdfEngine},
    },
    error::BagError,
    utils::{normalizer::normalize, sort::sort_desc_stable, stopwords},
};

/// Bag of words model of a corpus
///
/// Built in two passes by `Bag::build`:
/// 1. every document is cleaned, split into sentences and n-grams, and counted into the corpus
/// 2. IDF of every corpus term, then TF-IDF of every document term
///
/// Immutable once built.
/// Corpus terms are ranked by frequency (desc), document terms by TF-IDF (desc).
/// Ties keep first-seen order in both.
///
/// `Bag<N, E>`:
/// - `N`: score type (f32, f64)
/// - `E`: TF-IDF calculation engine
#[derive(Debug, Clone, Serialize)]
#[serde(bound(serialize = "N: Serialize"))]
pub struct Bag<N = f64, E = DefaultTfIdfEngine> {
    #[serde(with = "indexmap::map::serde_seq")]
    terms: IndexMap<String, Term<N>>,
    documents: Vec<Document<N>>,
    config: BagConfig,
    #[serde(skip)]
    _marker: PhantomData<E>,
}

/// A document after pass 1
struct ScannedDocument {
    text: String,
    normalized_text: String,
    sentences: Vec<String>,
    records: Vec<NgramRecord>,
}

impl<N, E> Bag<N, E>
where
    N: Float + FromPrimitive,
    E: TfIdfEngine<N>,
{
    /// Build a bag from documents
    ///
    /// # Arguments
    /// * `documents` - document texts
    /// * `config` - build options
    ///
    /// # Returns
    /// * `Result<Bag<N, E>, BagError>` - fails only on an invalid config
    pub fn build<S>(documents: &[S], config: &BagConfig) -> Result<Self, BagError>
    where
        S: AsRef<str>,
    {
        config.validate()?;
        let stop_words = if config.remove_stop_words {
            let set = stopwords::stop_words(&config.language)
                .ok_or_else(|| BagError::UnknownLanguage(config.language.clone()))?;
            Some(set)
        } else {
            None
        };

        // pass 1: per document n-grams and corpus counts
        let mut corpus = Corpus::new();
        let mut scanned = Vec::with_capacity(documents.len());
        for text in documents {
            let doc = scan_document(text.as_ref(), config, stop_words);
            corpus.add_document(&doc.records);
            scanned.push(doc);
        }
        tracing::debug!(
            documents = corpus.doc_num(),
            terms = corpus.vocab_size(),
            "corpus counted"
        );

        // pass 2: corpus complete, idf and tfidf
        let mut terms = corpus.into_terms::<N, E>();
        let documents: Vec<Document<N>> = scanned
            .into_iter()
            .map(|doc| Self::score_document(doc, &terms))
            .collect();
        sort_desc_stable(&mut terms, |term| term.frequency);

        Ok(Self {
            terms,
            documents,
            config: config.clone(),
            _marker: PhantomData,
        })
    }

    fn score_document(doc: ScannedDocument, terms: &IndexMap<String, Term<N>>) -> Document<N> {
        let mut doc_terms: IndexMap<String, DocumentTerm<N>> = doc
            .records
            .into_iter()
            .map(|record| {
                let idf = terms[record.term.as_str()].idf;
                let doc_term = DocumentTerm {
                    tfidf: E::tfidf(record.frequency, idf),
                    term: record.term.clone(),
                    frequency: record.frequency,
                    sentence_indices: record.sentence_indices,
                };
                (record.term, doc_term)
            })
            .collect();
        sort_desc_stable(&mut doc_terms, |term| term.tfidf);

        Document {
            text: doc.text,
            normalized_text: doc.normalized_text,
            sentences: doc.sentences,
            terms: doc_terms,
        }
    }
}

/// Pass 1 for one document
fn scan_document(
    text: &str,
    config: &BagConfig,
    stop_words: Option<&HashSet<&'static str>>,
) -> ScannedDocument {
    let normalized_text = clean(text, config.normalize, stop_words);
    let sentences = match config.sentence_policy {
        SentencePolicy::SplitBeforeCleaning => split_sentences(text)
            .iter()
            .map(|sentence| clean(sentence, config.normalize, stop_words))
            .collect(),
        SentencePolicy::Legacy => split_sentences(&normalized_text),
        SentencePolicy::WholeTextFallback => {
            let sentences = split_sentences(&normalized_text);
            if sentences.is_empty() && !normalized_text.trim().is_empty() {
                vec![normalized_text.clone()]
            } else {
                sentences
            }
        }
    };
    let records = extract_ngrams_with_min_length(
        &sentences,
        config.max_ngram_length,
        config.min_token_length,
    );
    ScannedDocument {
        text: text.to_string(),
        normalized_text,
        sentences,
        records,
    }
}

fn clean(text: &str, normalize_text: bool, stop_words: Option<&HashSet<&'static str>>) -> String {
    let cleaned = if normalize_text {
        normalize(text)
    } else {
        text.to_string()
    };
    match stop_words {
        Some(set) => stopwords::filter_with(&cleaned, set),
        None => cleaned,
    }
}

/// Accessors
impl<N, E> Bag<N, E> {
    /// Corpus terms, ranked by frequency
    #[inline]
    pub fn terms(&self) -> impl Iterator<Item = &Term<N>> {
        self.terms.values()
    }

    /// Get a corpus term by key
    #[inline]
    pub fn term(&self, key: &str) -> Option<&Term<N>> {
        self.terms.get(key)
    }

    /// Get the n most frequent corpus terms
    pub fn top_terms(&self, n: usize) -> Vec<&Term<N>> {
        self.terms.values().take(n).collect()
    }

    /// Number of distinct terms in the corpus
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.terms.len()
    }

    /// Documents in input order
    #[inline]
    pub fn documents(&self) -> &[Document<N>] {
        &self.documents
    }

    #[inline]
    pub fn document(&self, index: usize) -> Option<&Document<N>> {
        self.documents.get(index)
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.documents.len()
    }

    /// Options the bag was built with
    #[inline]
    pub fn config(&self) -> &BagConfig {
        &self.config
    }
}

/// Build a bag with the default engine and n-gram options
///
/// # Arguments
/// * `documents` - document texts
/// * `normalize_documents` - normalize before analysis
/// * `remove_stop_words` - drop english stopwords
pub fn bag_of_words<S>(
    documents: &[S],
    normalize_documents: bool,
    remove_stop_words: bool,
) -> Result<Bag, BagError>
where
    S: AsRef<str>,
{
    let config = BagConfig::default()
        .with_normalize(normalize_documents)
        .with_remove_stop_words(remove_stop_words);
    Bag::build(documents, &config)
}
