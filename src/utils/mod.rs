pub mod normalizer;
pub mod sort;
pub mod stopwords;
