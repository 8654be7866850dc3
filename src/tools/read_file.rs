use anyhow::Context;
use std::fs;
use std::path::Path;

/// Reads the whole file at `path` into memory.
pub fn read_file(path: &Path) -> anyhow::Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    log::debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}
