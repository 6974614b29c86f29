use regex::Regex;
use std::sync::OnceLock;

// scheme, host, then at least one path segment
const URL_PATTERN: &str = r"https?://\S+/\S+";

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(URL_PATTERN).expect("URL_PATTERN is a valid regex"))
}

/// Every `http(s)://host/path` link in `text`, in order of appearance
pub fn detect_urls(text: &str) -> Vec<String> {
    url_regex()
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
