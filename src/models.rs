use regex::Regex;

/// Compiled patterns, built once per run.
pub struct UrlPatterns {
    pub url_regex: Regex,
}

impl UrlPatterns {
    pub fn new() -> Self {
        Self {
            // http(s) scheme, then everything up to whitespace, a quote, a
            // comma (ASCII or full-width), or a closing bracket/parenthesis.
            url_regex: Regex::new(r#"https?://[^\s'"，,\])]+"#).unwrap(),
        }
    }
}
