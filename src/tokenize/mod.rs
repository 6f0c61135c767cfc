// Tokenization: punctuation stripping and word segmentation.
//
// Raw text goes through two steps: everything that is not a word character
// or whitespace is removed, then a Segmenter splits the cleaned text into
// words. Ideographic text has no spaces between words, so the default
// segmenter is dictionary-backed (jieba) rather than a whitespace split.

pub mod jieba;
pub mod traits;
pub mod whitespace;

use anyhow::Result;
use tracing::info;

use crate::config::{Config, SegmenterBackend};
use jieba::JiebaSegmenter;
use traits::Segmenter;
use whitespace::WhitespaceSegmenter;

/// Turns raw document text into an ordered list of word tokens.
pub struct Tokenizer {
    segmenter: Box<dyn Segmenter>,
}

impl Tokenizer {
    pub fn new(segmenter: Box<dyn Segmenter>) -> Self {
        Self { segmenter }
    }

    /// Build the tokenizer selected by the configuration.
    ///
    /// Fails only if a configured user dictionary can't be read or parsed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let segmenter: Box<dyn Segmenter> = match config.segmenter_backend {
            SegmenterBackend::Jieba => {
                let mut jieba = JiebaSegmenter::new().with_hmm(config.hmm);
                if let Some(path) = &config.user_dict {
                    jieba.load_user_dict(path)?;
                }
                Box::new(jieba)
            }
            SegmenterBackend::Whitespace => Box::new(WhitespaceSegmenter),
        };

        info!(
            segmenter = segmenter.name(),
            hmm = config.hmm,
            user_dict = ?config.user_dict,
            "Tokenizer ready"
        );

        Ok(Self::new(segmenter))
    }

    /// Name of the underlying segmenter, for logs and diagnostics.
    pub fn segmenter_name(&self) -> &'static str {
        self.segmenter.name()
    }

    /// Strip punctuation, segment, and drop whitespace-only pieces.
    ///
    /// Never fails: empty or punctuation-only input yields an empty list.
    /// Case is kept as written.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let cleaned = strip_punctuation(text);
        self.segmenter
            .segment(&cleaned)
            .into_iter()
            .filter(|token| !token.trim().is_empty())
            .collect()
    }
}

impl Default for Tokenizer {
    /// Jieba with HMM enabled and only the built-in dictionary.
    fn default() -> Self {
        Self::new(Box::new(JiebaSegmenter::new()))
    }
}

/// Remove every character that is neither a word character nor whitespace.
///
/// Word characters are letters and digits of any script plus `_`, so CJK
/// ideographs, accented Latin and Cyrillic all survive while ASCII and
/// full-width punctuation (`，`, `！`, `“`) and symbols are dropped.
pub fn strip_punctuation(text: &str) -> String {
    text.chars()
        .filter(|c| is_word_char(*c) || c.is_whitespace())
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
