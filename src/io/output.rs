use anyhow::Result;
use std::path::Path;
use tokio::fs;

/// Writes the URLs one per line, newline-terminated, truncating any
/// existing file at `path`.
pub async fn write_url_list(path: &Path, urls: &[String]) -> Result<()> {
    let mut content = String::new();
    for url in urls {
        content.push_str(url);
        content.push('\n');
    }

    fs::write(path, content).await?;
    Ok(())
}
