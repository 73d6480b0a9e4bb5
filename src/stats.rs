use crate::parser::classify::is_bare_url;
use crate::verify::{attributed_records, group_by_author};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct FortuneStats {
    pub records: usize,
    pub multi_line: usize,
    pub urls: usize,
    pub attributed: usize,
    pub authors: usize,
}

impl FortuneStats {
    pub fn compute(records: &[String]) -> Self {
        let attributed = attributed_records(records);
        FortuneStats {
            records: records.len(),
            multi_line: records.iter().filter(|r| r.contains('\n')).count(),
            urls: records.iter().filter(|r| is_bare_url(r)).count(),
            attributed: attributed.len(),
            authors: group_by_author(&attributed).len(),
        }
    }

    pub fn print(&self) {
        println!("Records:     {}", self.records);
        println!("Multi-line:  {}", self.multi_line);
        println!("URLs:        {}", self.urls);
        println!("Attributed:  {}", self.attributed);
        println!("Authors:     {}", self.authors);
    }
}
