// Reading input documents from disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read a UTF-8 document and trim surrounding whitespace.
///
/// The error names the path, since it goes straight to the user.
pub fn read_document(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading file {}", path.display()))?;
    Ok(content.trim().to_string())
}
