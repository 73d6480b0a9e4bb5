//! Cross-check attributed records against a reference page per author.
//!
//! Only textual containment is checked: a quote is FOUND when its text, with
//! line breaks flattened, appears case-insensitively in the fetched page.

pub mod fetch;

use std::sync::LazyLock;

use itertools::Itertools;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use tracing::warn;

use crate::utils::truncate;
use fetch::PageSource;

static DASH_ATTR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-\x{2013}\x{2014}]{1,2}\s*(.+)").unwrap());
static PAREN_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\((.+)\)$").unwrap());

/// Characters left alone in a page name, matching common wiki links.
const PAGE_NAME: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

const SNIPPET_CHARS: usize = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributedRecord {
    /// 1-based position in the quote file.
    pub index: usize,
    pub quote: String,
    pub author: String,
}

#[derive(Debug)]
pub struct AuthorGroup<'a> {
    pub author: &'a str,
    pub records: Vec<&'a AttributedRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordCheck {
    pub index: usize,
    pub snippet: String,
    pub found: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorCheck {
    pub author: String,
    pub page_url: String,
    pub error: Option<String>,
    pub records: Vec<RecordCheck>,
}

/// Split a record into (quote, author) when its last line is a citation:
/// `— Name`, `-- Name` or `(Name)`.
pub fn split_attribution(record: &str) -> Option<(String, String)> {
    let lines: Vec<&str> = record
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    let (last, body) = lines.split_last()?;

    let caps = DASH_ATTR_RE
        .captures(last)
        .or_else(|| PAREN_ATTR_RE.captures(last))?;
    let author = caps[1].trim().to_string();
    let quote = body.join("\n");
    if author.is_empty() || quote.is_empty() {
        return None;
    }
    Some((quote, author))
}

pub fn attributed_records(records: &[String]) -> Vec<AttributedRecord> {
    records
        .iter()
        .enumerate()
        .filter_map(|(i, record)| {
            let (quote, author) = split_attribution(record)?;
            Some(AttributedRecord {
                index: i + 1,
                quote,
                author,
            })
        })
        .collect()
}

/// Authors in first-appearance order, each with its records.
pub fn group_by_author(records: &[AttributedRecord]) -> Vec<AuthorGroup<'_>> {
    records
        .iter()
        .map(|r| r.author.as_str())
        .unique()
        .map(|author| AuthorGroup {
            author,
            records: records.iter().filter(|r| r.author == author).collect(),
        })
        .collect()
}

pub fn reference_url(base: &str, author: &str) -> String {
    let name = author.replace(' ', "_");
    format!("{}{}", base, utf8_percent_encode(&name, PAGE_NAME))
}

fn flatten(quote: &str) -> String {
    quote.trim().replace('\n', " ")
}

/// Fetch one author's page and test each of their quotes against it. A
/// failed fetch is recorded and every quote reported as missing.
pub fn check_author(group: &AuthorGroup<'_>, base_url: &str, source: &dyn PageSource) -> AuthorCheck {
    let page_url = reference_url(base_url, group.author);
    let (page, error) = match source.fetch(&page_url) {
        Ok(body) => (body.to_lowercase(), None),
        Err(e) => {
            warn!(author = group.author, error = %e, "reference fetch failed");
            (String::new(), Some(e.to_string()))
        }
    };

    let records = group
        .records
        .iter()
        .map(|r| {
            let snippet = flatten(&r.quote);
            let found = page.contains(&snippet.to_lowercase());
            RecordCheck {
                index: r.index,
                snippet,
                found,
            }
        })
        .collect();

    AuthorCheck {
        author: group.author.to_string(),
        page_url,
        error,
        records,
    }
}

/// Check every author in turn; `on_author` runs after each one.
pub fn check_authors<F>(
    groups: &[AuthorGroup<'_>],
    base_url: &str,
    source: &dyn PageSource,
    mut on_author: F,
) -> Vec<AuthorCheck>
where
    F: FnMut(&AuthorCheck),
{
    groups
        .iter()
        .map(|g| {
            let check = check_author(g, base_url, source);
            on_author(&check);
            check
        })
        .collect()
}

pub fn render_report(checks: &[AuthorCheck]) -> String {
    let mut lines = Vec::new();
    for check in checks {
        lines.push(format!("=== {} ===", check.author));
        lines.push(format!("Page: {}", check.page_url));
        if let Some(err) = &check.error {
            lines.push(format!("  Error fetching page: {}", err));
        }
        for r in &check.records {
            lines.push(format!(
                "  record {}: {} -> {}",
                r.index,
                if r.found { "FOUND" } else { "MISSING" },
                truncate(&r.snippet, SNIPPET_CHARS)
            ));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

pub fn summarize(checks: &[AuthorCheck]) -> String {
    let found = checks
        .iter()
        .flat_map(|c| &c.records)
        .filter(|r| r.found)
        .count();
    let total: usize = checks.iter().map(|c| c.records.len()).sum();
    let errors = checks.iter().filter(|c| c.error.is_some()).count();
    format!(
        "Checked {} authors: {} found, {} missing, {} fetch errors.",
        checks.len(),
        found,
        total - found,
        errors
    )
}
