use std::sync::LazyLock;

use regex::Regex;

static BLANK_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());

/// Fortune separator; a line holding only this token ends a record.
pub const SEPARATOR: &str = "%";

/// A blank-line delimited span of the source, as laid out in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group(String);

impl Group {
    /// Join several groups back into one, separated by a blank line.
    pub fn merge<'a>(parts: impl IntoIterator<Item = &'a Group>) -> Group {
        let joined = parts
            .into_iter()
            .map(|g| g.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");
        Group(joined)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }

    /// Trimmed, non-blank lines.
    pub fn content_lines(&self) -> impl Iterator<Item = &str> {
        self.0.lines().map(str::trim).filter(|l| !l.is_empty())
    }
}

#[cfg(test)]
impl From<&str> for Group {
    fn from(s: &str) -> Self {
        Group(s.to_string())
    }
}

/// Unify line endings, drop a leading BOM and trailing whitespace per line.
/// A line holding only the separator is fenced off with blank lines so it
/// becomes a group of its own and never ends up inside a record.
pub fn normalize(raw: &str) -> String {
    let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split('\n')
        .map(str::trim_end)
        .flat_map(|l| {
            if is_separator_line(l) {
                vec!["", l.trim_start(), ""]
            } else {
                vec![l]
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn is_separator_line(line: &str) -> bool {
    line.trim() == SEPARATOR
}

/// Split normalized text on runs of blank lines. Groups keep their internal
/// line breaks and leading indentation; blank groups are dropped.
pub fn read_groups(text: &str) -> Vec<Group> {
    BLANK_RUN_RE
        .split(text.trim_matches('\n'))
        .filter(|part| !part.trim().is_empty())
        .map(|part| Group(part.trim_end().to_string()))
        .collect()
}
