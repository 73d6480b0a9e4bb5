use chrono::Utc;
use serde::Serialize;
use tracing::info;

/// Unit counts before and after each pipeline pass.
pub struct PassTracker {
    run_id: String,
    metrics: Vec<PassMetric>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PassMetric {
    pub pass_name: String,
    pub before: usize,
    pub after: usize,
}

impl PassTracker {
    pub fn new(run_id: String) -> Self {
        PassTracker {
            run_id,
            metrics: Vec::new(),
        }
    }

    pub fn record(&mut self, pass_name: &str, before: usize, after: usize) {
        info!(run_id = %self.run_id, pass = pass_name, before, after, "pass done");
        self.metrics.push(PassMetric {
            pass_name: pass_name.to_string(),
            before,
            after,
        });
    }

    pub fn print(&self) {
        for metric in &self.metrics {
            println!(
                "  {}: {} -> {}",
                metric.pass_name, metric.before, metric.after
            );
        }
    }

    pub fn metrics(&self) -> &[PassMetric] {
        &self.metrics
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }
}

pub fn new_run_id() -> String {
    format!("run-{}", Utc::now().format("%Y%m%dT%H%M%S"))
}
