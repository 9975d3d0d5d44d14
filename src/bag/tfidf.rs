use num::{Float, FromPrimitive};

use crate::bag::corpus::TermStats;

/// TF-IDF calculation engine
/// Plug a different IDF / TF-IDF formula into `Bag<N, E>`.
pub trait TfIdfEngine<N>
where
    N: Float + FromPrimitive,
{
    /// IDF of a term
    ///
    /// # Arguments
    /// * `doc_num` - number of documents in the corpus
    /// * `stats` - corpus-wide counts of the term, `frequency >= 1`
    fn idf(doc_num: u64, stats: &TermStats) -> N;

    /// TF-IDF of a term in one document
    ///
    /// # Arguments
    /// * `frequency` - document-local frequency
    /// * `idf` - the term's corpus IDF
    #[inline]
    fn tfidf(frequency: u64, idf: N) -> N {
        from_u64::<N>(frequency) * idf
    }
}

#[inline]
fn from_u64<N: Float + FromPrimitive>(value: u64) -> N {
    N::from_u64(value).unwrap_or_else(N::nan)
}

/// Default engine
/// `idf = 1 + ln(doc_num / frequency)` where `frequency` is the raw number of
/// occurrences over the corpus, not the number of documents containing the term.
/// A term occurring more often than there are documents gets an IDF below 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTfIdfEngine;

impl<N> TfIdfEngine<N> for DefaultTfIdfEngine
where
    N: Float + FromPrimitive,
{
    #[inline]
    fn idf(doc_num: u64, stats: &TermStats) -> N {
        N::one() + (from_u64::<N>(doc_num) / from_u64::<N>(stats.frequency)).ln()
    }
}

/// Document-frequency engine
/// `idf = 1 + ln(doc_num / document_count)`, the textbook smooth-less IDF.
/// Opt in with `Bag::<f64, ClassicTfIdfEngine>::build`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicTfIdfEngine;

impl<N> TfIdfEngine<N> for ClassicTfIdfEngine
where
    N: Float + FromPrimitive,
{
    #[inline]
    fn idf(doc_num: u64, stats: &TermStats) -> N {
        N::one() + (from_u64::<N>(doc_num) / from_u64::<N>(stats.document_count)).ln()
    }
}
