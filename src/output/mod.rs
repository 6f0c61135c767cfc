// Output: the answer file and terminal display.

pub mod terminal;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Render a score as fixed-point with exactly two decimals, e.g. `0.87`.
pub fn format_score(score: f64) -> String {
    format!("{score:.2}")
}

/// Write the formatted score to `path`, replacing any existing content.
pub fn write_score(path: &Path, score: f64) -> Result<()> {
    fs::write(path, format_score(score))
        .with_context(|| format!("Error writing to output file {}", path.display()))
}
