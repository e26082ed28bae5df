//! Reading one-shot input from a file or stdin.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Largest input accepted for a single translation request.
pub const MAX_INPUT_SIZE: usize = 1024 * 1024; // 1MB

/// Reads the text to translate from `file`, or from stdin when `None`.
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => read_file(path),
        None => read_from(io::stdin().lock(), "stdin"),
    }
}

fn too_large(size: usize, what: &str) -> Result<()> {
    if size > MAX_INPUT_SIZE {
        bail!(
            "Input size ({:.1} MB) from {what} exceeds maximum allowed size (1 MB).\n\n\
             Consider splitting it into smaller parts.",
            size as f64 / 1024.0 / 1024.0
        );
    }
    Ok(())
}

fn read_file(path: &Path) -> Result<String> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to access file: {}", path.display()))?;
    too_large(metadata.len() as usize, &path.display().to_string())?;

    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

/// Reads everything from `reader`, stopping as soon as the limit is crossed.
pub fn read_from(reader: impl Read, what: &str) -> Result<String> {
    let mut buffer = Vec::new();
    reader
        .take(MAX_INPUT_SIZE as u64 + 1)
        .read_to_end(&mut buffer)
        .with_context(|| format!("Failed to read from {what}"))?;
    too_large(buffer.len(), what)?;

    String::from_utf8(buffer).with_context(|| format!("Input from {what} is not valid UTF-8"))
}
