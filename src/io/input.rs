use anyhow::Result;
use std::path::Path;
use tokio::fs;

/// Reads the whole input file into memory as UTF-8 text.
/// Fails on a missing/unreadable file or invalid UTF-8.
pub async fn read_text(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path).await?;
    Ok(content)
}
