use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Which word segmenter the tokenizer uses.
#[derive(Debug, Clone, PartialEq)]
pub enum SegmenterBackend {
    /// Dictionary-backed jieba segmentation (default), handles text with
    /// no spaces between words
    Jieba,
    /// Plain whitespace split, only for corpora that already delimit words
    Whitespace,
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy, so these can live
/// next to the documents being checked.
#[derive(Debug, Clone)]
pub struct Config {
    /// Which segmenter to use (default: Jieba)
    pub segmenter_backend: SegmenterBackend,
    /// Let jieba group unknown words with its HMM (default: true)
    pub hmm: bool,
    /// Extra jieba dictionary loaded on top of the built-in one
    pub user_dict: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            segmenter_backend: SegmenterBackend::Jieba,
            hmm: true,
            user_dict: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default; only an unrecognized segmenter name is
    /// an error.
    pub fn load() -> Result<Self> {
        let segmenter_backend = match env::var("PAPERCHECK_SEGMENTER") {
            Ok(value) => parse_segmenter(&value)?,
            Err(_) => SegmenterBackend::Jieba,
        };

        let hmm = env::var("PAPERCHECK_HMM")
            .map(|value| parse_flag(&value))
            .unwrap_or(true);

        let user_dict = env::var("PAPERCHECK_USER_DICT")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            segmenter_backend,
            hmm,
            user_dict,
        })
    }

    /// Check that a configured user dictionary actually exists.
    /// Call this before building the tokenizer.
    pub fn require_user_dict(&self) -> Result<()> {
        if let Some(path) = &self.user_dict {
            if !path.is_file() {
                anyhow::bail!(
                    "User dictionary not found: {}\n\
                     Fix PAPERCHECK_USER_DICT or unset it to use the built-in dictionary.",
                    path.display()
                );
            }
            if self.segmenter_backend != SegmenterBackend::Jieba {
                tracing::warn!(
                    path = %path.display(),
                    "PAPERCHECK_USER_DICT is ignored by the whitespace segmenter"
                );
            }
        }
        Ok(())
    }
}

fn parse_segmenter(value: &str) -> Result<SegmenterBackend> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "jieba" => Ok(SegmenterBackend::Jieba),
        "whitespace" => Ok(SegmenterBackend::Whitespace),
        other => anyhow::bail!(
            "Unknown PAPERCHECK_SEGMENTER value '{other}' (expected 'jieba' or 'whitespace')"
        ),
    }
}

/// Anything other than an explicit "off" value counts as enabled.
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}
