use std::sync::LazyLock;

use regex::Regex;

use super::classify::is_bare_url;

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Pull inline URLs out of a candidate record.
///
/// `"Great quote http://x.y/q"` becomes `["Great quote", "http://x.y/q"]`.
/// Text after a URL is kept and scanned again, so nothing is lost. A bare URL
/// comes back unchanged.
pub fn extract_urls(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = text.trim();

    while !rest.is_empty() {
        if is_bare_url(rest) {
            out.push(rest.to_string());
            break;
        }
        let Some(m) = URL_RE.find(rest) else {
            out.push(rest.to_string());
            break;
        };
        let before = rest[..m.start()].trim();
        if !before.is_empty() {
            out.push(before.to_string());
        }
        out.push(m.as_str().to_string());
        rest = rest[m.end()..].trim();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_url_split_out() {
        assert_eq!(
            extract_urls("Great quote here http://example.com/q"),
            vec!["Great quote here", "http://example.com/q"]
        );
    }

    #[test]
    fn bare_url_passes_through() {
        assert_eq!(
            extract_urls("https://example.com/a?b=c"),
            vec!["https://example.com/a?b=c"]
        );
    }

    #[test]
    fn plain_text_untouched() {
        assert_eq!(extract_urls("  No links here.  "), vec!["No links here."]);
    }

    #[test]
    fn text_after_url_is_kept() {
        assert_eq!(
            extract_urls("Read this https://a.example/x and then https://b.example/y today"),
            vec!["Read this", "https://a.example/x", "and then", "https://b.example/y", "today"]
        );
    }

    #[test]
    fn leading_url_with_caption() {
        assert_eq!(
            extract_urls("https://a.example/x worth a look"),
            vec!["https://a.example/x", "worth a look"]
        );
    }

    #[test]
    fn multi_line_lead_text_keeps_breaks() {
        assert_eq!(
            extract_urls("first line\nsecond line https://a.example"),
            vec!["first line\nsecond line", "https://a.example"]
        );
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(extract_urls("   ").is_empty());
    }
}
