// Colored terminal summary of a comparison.

use colored::{ColoredString, Colorize};

use super::format_score;
use crate::checker::Comparison;

/// How worrying a score is. Only used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarityBand {
    High,
    Moderate,
    Low,
}

impl SimilarityBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.80 {
            Self::High
        } else if score >= 0.50 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

/// Print the score line and the token diagnostics below it.
pub fn display_comparison(cmp: &Comparison) {
    let band = SimilarityBand::from_score(cmp.score);

    println!(
        "Similarity: {} ({})",
        colorize_band(&format_score(cmp.score), band).bold(),
        colorize_band(band.label(), band)
    );

    let details = format!(
        "original {} tokens, candidate {} tokens, {} shared of {} distinct terms",
        cmp.original_tokens, cmp.candidate_tokens, cmp.shared_terms, cmp.vocabulary
    );
    println!("  {}", details.dimmed());
}

fn colorize_band(text: &str, band: SimilarityBand) -> ColoredString {
    match band {
        SimilarityBand::High => text.red(),
        SimilarityBand::Moderate => text.yellow(),
        SimilarityBand::Low => text.green(),
    }
}
