use std::fmt::Write as _;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::files::write_text;
use crate::fortune::format_records;
use crate::metrics::{PassMetric, PassTracker};
use crate::parser::ParseOutput;

/// Counts printed at the end of a parse run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QcReport {
    pub run_id: String,
    pub input_groups: usize,
    pub records: usize,
    pub unparseable: usize,
    pub passes: Vec<PassMetric>,
}

impl QcReport {
    pub fn new(tracker: &PassTracker, output: &ParseOutput) -> Self {
        QcReport {
            run_id: tracker.run_id().to_string(),
            input_groups: output.input_groups,
            records: output.records.len(),
            unparseable: output.unparseable.len(),
            passes: tracker.metrics().to_vec(),
        }
    }

    pub fn render(&self, quote_path: &Path, unparseable_path: &Path) -> String {
        let mut out = String::from("QC Report:\n");
        let _ = writeln!(out, "- Total input groups: {}", self.input_groups);
        let _ = writeln!(out, "- Parsed quotes (entries): {}", self.records);
        let _ = writeln!(out, "- Unparseable groups: {}", self.unparseable);
        if self.unparseable > 0 {
            let _ = writeln!(out, "- See {} for details", unparseable_path.display());
        }
        let _ = write!(out, "- Fortune file written: {}", quote_path.display());
        out
    }
}

/// Fragments separated by a blank line; empty when there are none.
pub fn format_unparseable(fragments: &[String]) -> String {
    fragments.join("\n\n")
}

/// Write the quote file and the unparseable side file. The side file is
/// always written, zero bytes when nothing was rejected.
pub fn write_outputs(output: &ParseOutput, quote_path: &Path, unparseable_path: &Path) -> Result<()> {
    write_text(quote_path, &format_records(&output.records))?;
    write_text(unparseable_path, &format_unparseable(&output.unparseable))?;
    info!(
        records = output.records.len(),
        unparseable = output.unparseable.len(),
        path = %quote_path.display(),
        "wrote fortune file"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::process_text;
    use crate::settings::Heuristics;

    fn run(text: &str) -> (PassTracker, ParseOutput) {
        let mut tracker = PassTracker::new("run-test".into());
        let output = process_text(text, &Heuristics::default(), &mut tracker);
        (tracker, output)
    }

    #[test]
    fn empty_input_reports_zeros() {
        let (tracker, output) = run("   \n\n  \t\n");
        let report = QcReport::new(&tracker, &output);
        assert_eq!((report.input_groups, report.records, report.unparseable), (0, 0, 0));

        let text = report.render(Path::new("fortune/quotes"), Path::new("fortune/unparseable.txt"));
        assert!(text.contains("- Total input groups: 0"));
        assert!(text.contains("- Parsed quotes (entries): 0"));
        assert!(text.contains("- Unparseable groups: 0"));
        assert!(!text.contains("See "));
        assert!(text.ends_with("- Fortune file written: fortune/quotes"));
    }

    #[test]
    fn render_points_at_side_file_when_needed() {
        let (tracker, output) = run("Fine.\n\n\u{200b}");
        let report = QcReport::new(&tracker, &output);
        let text = report.render(Path::new("q"), Path::new("u.txt"));
        assert!(text.contains("- Unparseable groups: 1"));
        assert!(text.contains("- See u.txt for details"));
    }

    #[test]
    fn json_has_counts_and_passes() {
        let (tracker, output) = run("One.\n\nTwo.");
        let report = QcReport::new(&tracker, &output);
        let json: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(json["records"], 2);
        assert_eq!(json["passes"][0]["pass_name"], "group");
        assert_eq!(json["passes"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let quotes = dir.path().join("fortune/quotes");
        let side = dir.path().join("fortune/unparseable.txt");
        let (_, output) = run("Line A -- Author X\nLine B -- Author Y\n\n\u{200b}\n\n\u{feff}x\u{200b}\n");
        write_outputs(&output, &quotes, &side).unwrap();

        let written = std::fs::read_to_string(&quotes).unwrap();
        assert!(written.starts_with("Line A -- Author X\n%\nLine B -- Author Y\n%\n"));
        assert_eq!(std::fs::read_to_string(&side).unwrap(), "\u{200b}");
    }

    #[test]
    fn empty_side_file_when_clean() {
        let dir = tempfile::tempdir().unwrap();
        let quotes = dir.path().join("quotes");
        let side = dir.path().join("unparseable.txt");
        let (_, output) = run("Just one quote.");
        write_outputs(&output, &quotes, &side).unwrap();
        assert_eq!(std::fs::read(&side).unwrap().len(), 0);
        assert_eq!(std::fs::read_to_string(&quotes).unwrap(), "Just one quote.\n%\n");
    }
}
