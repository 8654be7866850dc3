use anyhow::Context;
use std::fs;
use std::path::Path;

// Creates the file if absent, truncates it otherwise.
pub fn write_file(path: &Path, content: &str) -> anyhow::Result<()> {
    fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    log::debug!("wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
