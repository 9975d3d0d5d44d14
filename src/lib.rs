/// This crate builds a Bag of Words model with n-grams and TF-IDF ranking.
pub mod bag;
pub mod error;
pub mod utils;

/// Bag of Words model
/// The top-level struct of this crate.
/// It turns a document collection into ranked term lists: per document by TF-IDF,
/// and for the whole corpus by frequency.
///
/// Internally, it holds:
/// - The corpus terms with their frequency and IDF
/// - Every document with its cleaned text, sentences and scored terms
/// - The options it was built with
///
/// `Bag<N, E>` has the following generic parameters:
/// - `N`: score type (f32, f64)
/// - `E`: TF-IDF calculation engine (e.g., DefaultTfIdfEngine)
///
/// The model is built once by `Bag::build` and is immutable afterwards.
/// Building is a pure function of the documents and the config.
///
/// # Serialization
/// Supported (output only).
pub use bag::Bag;

/// Build a `Bag` from documents and two flags
/// (normalize documents, remove english stopwords), other options default.
pub use bag::bag_of_words;

/// Build options for `Bag`
/// Normalization, stopword removal, n-gram length, minimum token length,
/// stopword language and sentence policy.
///
/// Deserializable with missing fields taking their default.
pub use bag::config::{BagConfig, SentencePolicy};

/// Corpus term and document term
/// `Term` holds the corpus-wide frequency and the IDF,
/// `DocumentTerm` the document-local frequency, sentence indices and TF-IDF.
pub use bag::{document::{Document, DocumentTerm}, term::Term};

/// TF IDF Calculation Engine Trait
/// A trait that defines how IDF and TF-IDF are computed.
///
/// - `DefaultTfIdfEngine`: `1 + ln(documents / occurrences)`
/// - `ClassicTfIdfEngine`: `1 + ln(documents / documents containing the term)`
pub use bag::tfidf::{ClassicTfIdfEngine, DefaultTfIdfEngine, TfIdfEngine};

/// N-gram extraction
pub use bag::ngram::{extract_ngrams, NgramRecord};

/// Term counting of a single text
pub use bag::term::{get_terms_frequency, TermCount, TermFrequency};

/// Text cleaning
pub use utils::normalizer::{normalize, normalize_bytes, remove_multiple_white_spaces, remove_punctuation, Normalized};
pub use utils::stopwords::{remove_stop_words, remove_stop_words_english};

pub use error::{BagError, NormalizeError};
