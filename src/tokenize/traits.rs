// Segmenter trait: swap-ready abstraction for word segmentation.
//
// The tokenizer only needs "split this cleaned text into words". Jieba is
// the default; a plain whitespace splitter covers corpora that are already
// space-delimited.

/// Splits punctuation-free text into word units.
///
/// Implementations must be deterministic: the same input (and the same
/// loaded dictionary) always gives the same output.
pub trait Segmenter: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Segment text into words, in reading order.
    ///
    /// Whitespace delimits words. Implementations may still emit
    /// whitespace pieces; the tokenizer drops them.
    fn segment(&self, text: &str) -> Vec<String>;
}
