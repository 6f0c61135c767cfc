// Similarity engine: term frequencies and cosine similarity.

pub mod cosine;
pub mod frequency;

pub use cosine::{cosine_similarity, vocabulary_stats, VocabularyStats};
pub use frequency::{term_frequencies, TermFrequencies};
