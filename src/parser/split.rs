use tracing::debug;

use super::classify::{is_bare_url, is_effectively_empty, is_multi_quote_block};
use super::groups::{is_separator_line, Group};
use super::urls::extract_urls;
use crate::settings::Heuristics;

/// Turn one group into records, splitting run-together one-liners and
/// pulling out URLs. Groups with no visible content, and stray separator
/// lines, go to `unparseable`.
pub fn emit_group(
    group: Group,
    h: &Heuristics,
    records: &mut Vec<String>,
    unparseable: &mut Vec<String>,
) {
    if is_separator_line(group.as_str()) {
        unparseable.push(group.into_inner());
        return;
    }

    let lines: Vec<&str> = group.as_str().lines().map(str::trim_end).collect();

    if let [only] = lines.as_slice() {
        if is_bare_url(only) {
            records.push(only.trim().to_string());
            return;
        }
    }

    if is_multi_quote_block(group.as_str(), h) {
        debug!(lines = lines.len(), "splitting multi-quote block");
        for line in group.content_lines() {
            if is_effectively_empty(line) {
                unparseable.push(line.to_string());
            } else {
                records.extend(extract_urls(line));
            }
        }
        return;
    }

    let cleaned = lines.join("\n");
    if is_effectively_empty(&cleaned) {
        unparseable.push(group.into_inner());
        return;
    }
    records.extend(extract_urls(&cleaned));
}
