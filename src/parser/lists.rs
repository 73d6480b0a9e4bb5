use super::classify::{is_list_header, is_list_item};

/// Rejoin a `Header:` record with the numbered or `Rule N` records after it.
/// A header with nothing list-shaped behind it stays as it is.
pub fn reassemble_lists(records: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(records.len());
    let mut iter = records.into_iter().peekable();

    while let Some(current) = iter.next() {
        if !is_list_header(&current) {
            out.push(current);
            continue;
        }
        let mut parts = vec![current];
        while let Some(item) = iter.next_if(|r| is_list_item(r)) {
            parts.push(item);
        }
        out.push(parts.join("\n\n"));
    }

    out
}
