//! The fortune file format: each record followed by a line holding only `%`.

use crate::parser::groups::SEPARATOR;

pub fn format_records(records: &[String]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(record.trim_end());
        out.push('\n');
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out
}

/// Split a fortune file back into records. Blank records are skipped and a
/// missing final separator is tolerated.
pub fn read_records(text: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim_end() == SEPARATOR {
            push_record(&mut records, &current);
            current.clear();
        } else {
            current.push(line);
        }
    }
    push_record(&mut records, &current);

    records
}

fn push_record(records: &mut Vec<String>, lines: &[&str]) {
    let joined = lines.join("\n");
    let record = joined.trim_matches('\n').trim_end();
    if !record.trim().is_empty() {
        records.push(record.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_record_gets_a_separator() {
        let records = vec!["one".to_string(), "two\nlines  ".to_string()];
        assert_eq!(format_records(&records), "one\n%\ntwo\nlines\n%\n");
    }

    #[test]
    fn no_records_no_bytes() {
        assert_eq!(format_records(&[]), "");
    }

    #[test]
    fn reads_back_multi_line_records() {
        let text = "first\n%\nsecond line\n\nafter blank\n%\n";
        assert_eq!(
            read_records(text),
            vec!["first".to_string(), "second line\n\nafter blank".to_string()]
        );
    }

    #[test]
    fn tolerates_crlf_and_missing_tail() {
        let text = "a\r\n%\r\n\r\n%\r\nb";
        assert_eq!(read_records(text), vec!["a".to_string(), "b".to_string()]);
    }
}
