pub mod classify;
pub mod groups;
pub mod lists;
pub mod merge;
pub mod split;
pub mod urls;

use crate::metrics::PassTracker;
use crate::settings::Heuristics;

pub struct ParseOutput {
    pub input_groups: usize,
    pub records: Vec<String>,
    pub unparseable: Vec<String>,
}

/// Raw dump → groups → attribution merge → split/URLs → list rejoin.
/// Every stage sees the whole output of the one before it.
pub fn process_text(raw: &str, h: &Heuristics, tracker: &mut PassTracker) -> ParseOutput {
    let normalized = groups::normalize(raw);
    let line_count = normalized.lines().filter(|l| !l.is_empty()).count();
    let groups = groups::read_groups(&normalized);
    let input_groups = groups.len();
    tracker.record("group", line_count, input_groups);

    let merged = merge::merge_attributions(groups, h);
    tracker.record("merge_attributions", input_groups, merged.len());

    let merged_count = merged.len();
    let mut records = Vec::with_capacity(merged_count);
    let mut unparseable = Vec::new();
    for group in merged {
        split::emit_group(group, h, &mut records, &mut unparseable);
    }
    tracker.record("split_blocks", merged_count, records.len());

    let before_lists = records.len();
    let records = lists::reassemble_lists(records);
    tracker.record("reassemble_lists", before_lists, records.len());

    ParseOutput {
        input_groups,
        records,
        unparseable,
    }
}

// ── Tests ──
