// Checker: tokenize two documents and score how alike they are.
//
// This is the one operation the rest of the program cares about:
//   text A, text B -> tokens -> term frequencies -> cosine similarity
// A checker owns its tokenizer (and the loaded dictionary), so building one
// is the expensive part; comparisons after that are cheap and independent.

use serde::Serialize;
use tracing::debug;

use crate::similarity::{cosine_similarity, term_frequencies, vocabulary_stats};
use crate::tokenize::Tokenizer;

/// Outcome of comparing an original document with a candidate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// Cosine similarity in [0, 1]
    pub score: f64,
    /// Number of tokens in the original
    pub original_tokens: usize,
    /// Number of tokens in the candidate
    pub candidate_tokens: usize,
    /// Distinct tokens across both documents
    pub vocabulary: usize,
    /// Distinct tokens that appear in both documents
    pub shared_terms: usize,
}

pub struct Checker {
    tokenizer: Tokenizer,
}

impl Checker {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Similarity of two raw documents, in [0, 1].
    ///
    /// Never fails: documents with no recognizable words score 0.0.
    pub fn similarity(&self, original: &str, candidate: &str) -> f64 {
        self.compare(original, candidate).score
    }

    /// Like `similarity`, with token and vocabulary counts alongside.
    pub fn compare(&self, original: &str, candidate: &str) -> Comparison {
        let original_tokens = self.tokenizer.tokenize(original);
        let candidate_tokens = self.tokenizer.tokenize(candidate);

        let original_tf = term_frequencies(&original_tokens);
        let candidate_tf = term_frequencies(&candidate_tokens);

        let score = cosine_similarity(&original_tf, &candidate_tf);
        let stats = vocabulary_stats(&original_tf, &candidate_tf);

        debug!(
            original_tokens = original_tokens.len(),
            candidate_tokens = candidate_tokens.len(),
            vocabulary = stats.vocabulary,
            shared_terms = stats.shared_terms,
            score,
            "Compared documents"
        );

        Comparison {
            score,
            original_tokens: original_tokens.len(),
            candidate_tokens: candidate_tokens.len(),
            vocabulary: stats.vocabulary,
            shared_terms: stats.shared_terms,
        }
    }
}

impl Default for Checker {
    fn default() -> Self {
        Self::new(Tokenizer::default())
    }
}
