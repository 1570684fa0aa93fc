use anyhow::Result;
use std::path::Path;

use crate::io::{input::read_text, output::write_url_list};
use crate::models::UrlPatterns;

/// All non-overlapping URL matches in left-to-right scan order.
/// Duplicates are kept, once per occurrence.
pub fn extract_urls(text: &str, patterns: &UrlPatterns) -> Vec<String> {
    patterns
        .url_regex
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Full pipeline: read the input file, match, write the URL list to the
/// output file. Returns the number of URLs found.
pub async fn extract_to_file(
    input: &Path,
    output: &Path,
    patterns: &UrlPatterns,
) -> Result<usize> {
    let text = read_text(input).await?;
    let urls = extract_urls(&text, patterns);
    tracing::debug!("matched {} urls in {} chars", urls.len(), text.len());

    write_url_list(output, &urls).await?;
    Ok(urls.len())
}
