// Whitespace segmenter: for scripts that already delimit words with spaces.

use super::traits::Segmenter;

/// Splits on Unicode whitespace. Ideographic runs stay as one token.
pub struct WhitespaceSegmenter;

impl Segmenter for WhitespaceSegmenter {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn segment(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }
}
