// Term frequency vectors.
//
// A document's frequency vector maps each distinct token to how many times
// it occurs. Token order is irrelevant here.

use std::collections::HashMap;

/// Token -> occurrence count for one document.
pub type TermFrequencies = HashMap<String, u32>;

/// Count token occurrences.
pub fn term_frequencies<I, S>(tokens: I) -> TermFrequencies
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts = TermFrequencies::new();
    for token in tokens {
        *counts.entry(token.into()).or_insert(0) += 1;
    }
    counts
}
