// Cosine similarity over sparse term frequency vectors.
//
// Conceptually both documents are laid out as dense vectors over the union
// vocabulary (0 where a term is missing), and the score is
//
//   dot(A, B) / (|A| * |B|)
//
// Terms missing from either side contribute nothing to the dot product, so
// it is enough to walk the smaller map and look each term up in the larger.
// Each magnitude only involves that document's own counts.

use super::frequency::TermFrequencies;

/// Cosine similarity of two term frequency vectors, in [0, 1].
///
/// If either vector has zero magnitude (no tokens at all) the result is 0.0.
/// Symmetric in its arguments.
pub fn cosine_similarity(a: &TermFrequencies, b: &TermFrequencies) -> f64 {
    let mag_a = magnitude(a);
    let mag_b = magnitude(b);

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }

    let dot = dot_product(a, b);

    (dot / (mag_a * mag_b)).clamp(0.0, 1.0)
}

/// Sum of count_a * count_b over the shared terms.
fn dot_product(a: &TermFrequencies, b: &TermFrequencies) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };

    small
        .iter()
        .filter_map(|(term, &count)| large.get(term).map(|&other| count as f64 * other as f64))
        .sum()
}

/// Euclidean norm of the counts.
fn magnitude(v: &TermFrequencies) -> f64 {
    v.values()
        .map(|&count| {
            let c = count as f64;
            c * c
        })
        .sum::<f64>()
        .sqrt()
}

/// Vocabulary sizes for a pair of documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VocabularyStats {
    /// Distinct terms across both documents
    pub vocabulary: usize,
    /// Distinct terms present in both documents
    pub shared_terms: usize,
}

/// Union and intersection sizes of the two key sets.
pub fn vocabulary_stats(a: &TermFrequencies, b: &TermFrequencies) -> VocabularyStats {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let shared_terms = small.keys().filter(|term| large.contains_key(*term)).count();

    VocabularyStats {
        vocabulary: a.len() + b.len() - shared_terms,
        shared_terms,
    }
}
