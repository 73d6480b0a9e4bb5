//! Named predicates behind the grouping heuristics. Each one looks at a single
//! text span and nothing else, so the trigger conditions can be tested apart.

use std::sync::LazyLock;

use regex::Regex;

use crate::settings::Heuristics;

static FROM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)^from(?:\b|\s*["\x{201c}])"#).unwrap());
static DASH_LEAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x{2014}\x{2013}-]\s*\w").unwrap());
static BY_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\bby\s+[A-Z][a-z]+").unwrap());
static DASH_AUTHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\s[-\x{2013}\x{2014}]{1,2}\s+[A-Z"(]"#).unwrap());
static BARE_URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://\S+$").unwrap());
static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:Rule\s+\d|\d+\.|\w+\s\d)").unwrap());

const DOUBLE_DASH: &str = " -- ";

/// Attribution line: a "From ..." lead-in, a dash followed by a name, or a
/// short text containing "by Name". First match wins.
pub fn is_attribution(text: &str, h: &Heuristics) -> bool {
    let t = text.trim();
    if FROM_RE.is_match(t) {
        return true;
    }
    if DASH_LEAD_RE.is_match(t) {
        return true;
    }
    BY_NAME_RE.is_match(t) && t.chars().count() < h.attribution_max_len
}

/// Several short lines. Only used to pick merge candidates for an attribution.
pub fn is_poem_like(text: &str, h: &Heuristics) -> bool {
    let lines = content_lines(text);
    lines.len() >= h.poem_min_lines && mean_len(&lines) < h.poem_max_avg_len
}

/// +1 for a dash-style author separator, +1 more for a spaced double hyphen.
pub fn line_score(line: &str) -> usize {
    let mut score = 0;
    if DASH_AUTHOR_RE.is_match(line) {
        score += 1;
    }
    if line.contains(DOUBLE_DASH) {
        score += 1;
    }
    score
}

/// True when the span reads as independent one-liners rather than one quote.
pub fn is_multi_quote_block(text: &str, h: &Heuristics) -> bool {
    let lines = content_lines(text);
    if lines.len() < 2 {
        return false;
    }
    let score: usize = lines.iter().map(|l| line_score(l)).sum();
    if lines.len() == 2 && score >= 2 {
        return true;
    }
    let threshold = (lines.len() / h.split_score_divisor.max(1)).max(1);
    mean_len(&lines) > h.split_min_avg_len && score >= threshold
}

pub fn is_bare_url(text: &str) -> bool {
    BARE_URL_RE.is_match(text.trim())
}

/// Header for a numbered list: trimmed text ends with a colon.
pub fn is_list_header(text: &str) -> bool {
    text.trim_end().ends_with(':')
}

/// `Rule 3`, `3.` or `Step 3` at the start.
pub fn is_list_item(text: &str) -> bool {
    LIST_ITEM_RE.is_match(text)
}

/// Nothing left once whitespace, control and zero-width characters are gone.
pub fn is_effectively_empty(text: &str) -> bool {
    text.chars()
        .all(|c| c.is_whitespace() || c.is_control() || is_invisible(c))
}

fn is_invisible(c: char) -> bool {
    matches!(c, '\u{00ad}' | '\u{200b}'..='\u{200d}' | '\u{2060}' | '\u{feff}')
}

fn content_lines(text: &str) -> Vec<&str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty()).collect()
}

fn mean_len(lines: &[&str]) -> f64 {
    if lines.is_empty() {
        return 0.0;
    }
    let total: usize = lines.iter().map(|l| l.chars().count()).sum();
    total as f64 / lines.len() as f64
}
