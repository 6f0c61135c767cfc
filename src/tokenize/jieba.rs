// Jieba segmenter: dictionary-backed word segmentation.
//
// Text is split on whitespace first. Inside each chunk, runs of ideographic
// characters go to jieba, which builds a DAG of dictionary words and picks
// the maximum-probability path; with HMM enabled, characters the dictionary
// doesn't know are grouped by a hidden Markov model. Every other run
// (Latin, Cyrillic, Hangul, digits, `_`) is kept whole, since jieba would
// emit non-ASCII letters one character at a time.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use jieba_rs::Jieba;
use tracing::info;

use super::traits::Segmenter;

/// Jieba with the embedded default dictionary, optionally extended with a
/// user dictionary.
pub struct JiebaSegmenter {
    jieba: Jieba,
    hmm: bool,
}

impl JiebaSegmenter {
    /// Load the built-in dictionary. HMM is enabled.
    pub fn new() -> Self {
        Self {
            jieba: Jieba::new(),
            hmm: true,
        }
    }

    pub fn with_hmm(mut self, hmm: bool) -> Self {
        self.hmm = hmm;
        self
    }

    /// Add entries from a jieba-format user dictionary.
    ///
    /// One entry per line: `word [freq] [tag]`. Entries override the
    /// built-in frequencies, so domain terms stay in one piece.
    pub fn load_user_dict(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open user dictionary {}", path.display()))?;
        let mut reader = BufReader::new(file);
        self.jieba
            .load_dict(&mut reader)
            .with_context(|| format!("Failed to load user dictionary {}", path.display()))?;

        info!(path = %path.display(), "Loaded user dictionary");
        Ok(())
    }

    /// Add a single word to the dictionary with a frequency suggested by
    /// jieba itself (high enough that the word is kept whole).
    pub fn add_word(&mut self, word: &str) {
        self.jieba.add_word(word, None, None);
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn name(&self) -> &'static str {
        "jieba"
    }

    fn segment(&self, text: &str) -> Vec<String> {
        let mut words = Vec::new();
        for chunk in text.split_whitespace() {
            for (run, ideographic) in script_runs(chunk) {
                if ideographic {
                    words.extend(self.jieba.cut(run, self.hmm).into_iter().map(str::to_string));
                } else {
                    words.push(run.to_string());
                }
            }
        }
        words
    }
}

/// Split a whitespace-free chunk into maximal runs that are either all
/// ideographic or all not, in order. `true` marks an ideographic run.
fn script_runs(chunk: &str) -> Vec<(&str, bool)> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (idx, c) in chunk.char_indices() {
        let ideographic = is_ideographic(c);
        if let Some(kind) = current {
            if kind != ideographic {
                runs.push((&chunk[start..idx], kind));
                start = idx;
            }
        }
        current = Some(ideographic);
    }

    if let Some(kind) = current {
        runs.push((&chunk[start..], kind));
    }
    runs
}

/// CJK ideograph blocks, the same ranges jieba treats as Han text.
fn is_ideographic(c: char) -> bool {
    matches!(
        c,
        '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{20000}'..='\u{2FA1F}'
    )
}
