// Pure navigation logic - no Tauri imports allowed.
// Turns whatever the user typed into the URL field into something a webview can load.

use url::Url;
use crate::settings::Settings;

const ACCEPTED_SCHEMES: [&str; 5] = ["http", "https", "file", "about", "data"];

/// Logic for parsing input into a navigable URL.
///
/// Purely local string manipulation: no DNS lookups, no prefetching. The only
/// network request happens when the webview loads the returned URL.
pub fn smart_parse_url(input: &str, settings: &Settings) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return "about:blank".to_string();
    }

    // 1. Force HTTP for implicit localhost/IP (if no scheme present)
    let has_scheme_separator = trimmed.contains("://");
    let is_localhost = trimmed.starts_with("localhost") || trimmed.starts_with("127.0.0.1");
    let is_ip = trimmed.parse::<std::net::IpAddr>().is_ok();

    if (is_localhost || is_ip) && !has_scheme_separator {
        let candidate = format!("http://{}", trimmed);
        if let Ok(u) = Url::parse(&candidate) {
            return u.to_string();
        }
    }

    // 2. Known scheme: keep as-is. "google.com" must not parse as scheme "google".
    if let Ok(u) = Url::parse(trimmed) {
        if ACCEPTED_SCHEMES.contains(&u.scheme()) {
            return u.to_string();
        }
    }

    // 3. Dot without spaces looks like a domain
    if !trimmed.contains(' ') && trimmed.contains('.') && !trimmed.ends_with('.') {
        let scheme = if settings.https_only { "https" } else { "http" };
        let candidate = format!("{}://{}", scheme, trimmed);
        if let Ok(u) = Url::parse(&candidate) {
            if u.host().is_some() {
                return u.to_string();
            }
        }
    }

    // 4. Fallback to configured Search Engine
    settings.search_engine.query_url(trimmed)
}

/// The homepage is user-editable, so it goes through the same normalization.
pub fn home_url(settings: &Settings) -> String {
    smart_parse_url(&settings.homepage, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{Settings, SearchEngine};
    use rstest::rstest;

    #[rstest]
    // Standard URLs (normalized)
    #[case("https://example.com", "https://example.com/")]
    #[case("http://example.com", "http://example.com/")]
    #[case("https://example.com/path?query=1", "https://example.com/path?query=1")]
    // Localhost and IPs get http://
    #[case("localhost", "http://localhost/")]
    #[case("localhost:3000", "http://localhost:3000/")]
    #[case("127.0.0.1:8080", "http://127.0.0.1:8080/")]
    #[case("192.168.1.1", "http://192.168.1.1/")]
    // Domain-like strings get https://
    #[case("google.com", "https://google.com/")]
    #[case("example.co.uk", "https://example.co.uk/")]
    #[case("docs.rs/url", "https://docs.rs/url")]
    #[case("google.com/test?x=1#frag", "https://google.com/test?x=1#frag")]
    // Special schemes
    #[case("about:blank", "about:blank")]
    #[case("file:///home/user/doc.html", "file:///home/user/doc.html")]
    // Edge cases
    #[case("", "about:blank")]
    #[case("   ", "about:blank")]
    #[case("  example.com  ", "https://example.com/")]
    fn test_smart_url_parsing(#[case] input: &str, #[case] expected: &str) {
        let settings = Settings::default();
        assert_eq!(smart_parse_url(input, &settings), expected);
    }

    #[rstest]
    #[case("hello world", "https://google.com/search?q=hello%20world")]
    #[case("c++", "https://google.com/search?q=c%2B%2B")]
    #[case("trailing.", "https://google.com/search?q=trailing.")]
    fn test_search_fallback(#[case] input: &str, #[case] expected: &str) {
        let settings = Settings::default();
        assert_eq!(smart_parse_url(input, &settings), expected);
    }

    #[test]
    fn test_other_search_engine() {
        let settings = Settings {
            search_engine: SearchEngine::DuckDuckGo,
            ..Settings::default()
        };
        assert_eq!(
            smart_parse_url("test query", &settings),
            "https://duckduckgo.com/?q=test%20query"
        );
    }

    #[test]
    fn test_https_only_off() {
        let settings = Settings {
            https_only: false,
            ..Settings::default()
        };
        assert_eq!(smart_parse_url("example.com", &settings), "http://example.com/");
    }

    #[test]
    fn test_home_url_is_normalized() {
        assert_eq!(home_url(&Settings::default()), "http://google.com/");

        let settings = Settings {
            homepage: "rust-lang.org".to_string(),
            ..Settings::default()
        };
        assert_eq!(home_url(&settings), "https://rust-lang.org/");
    }
}
