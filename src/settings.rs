use std::path::PathBuf;

use config::Config;
use serde::Deserialize;

use crate::error::Result;

pub const DEFAULT_ATTRIBUTION_MAX_LEN: usize = 120;
pub const DEFAULT_POEM_MIN_LINES: usize = 3;
pub const DEFAULT_POEM_MAX_AVG_LEN: f64 = 60.0;
pub const DEFAULT_LOOKBACK_CAP: usize = 10;
pub const DEFAULT_SPLIT_MIN_AVG_LEN: f64 = 40.0;
pub const DEFAULT_SPLIT_SCORE_DIVISOR: usize = 4;

const ENV_PREFIX: &str = "FORTUNE";
const CONFIG_FILE: &str = "quote_fortune";

/// Tunable cutoffs for the grouping heuristics. These were tuned against a
/// single corpus; treat them as best-effort.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Heuristics {
    /// "by Name" attributions only count below this length.
    pub attribution_max_len: usize,
    pub poem_min_lines: usize,
    pub poem_max_avg_len: f64,
    /// Maximum number of earlier groups an attribution may absorb.
    pub lookback_cap: usize,
    pub split_min_avg_len: f64,
    pub split_score_divisor: usize,
}

impl Default for Heuristics {
    fn default() -> Self {
        Heuristics {
            attribution_max_len: DEFAULT_ATTRIBUTION_MAX_LEN,
            poem_min_lines: DEFAULT_POEM_MIN_LINES,
            poem_max_avg_len: DEFAULT_POEM_MAX_AVG_LEN,
            lookback_cap: DEFAULT_LOOKBACK_CAP,
            split_min_avg_len: DEFAULT_SPLIT_MIN_AVG_LEN,
            split_score_divisor: DEFAULT_SPLIT_SCORE_DIVISOR,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub input: PathBuf,
    pub out_dir: PathBuf,
    pub quote_file: String,
    pub unparseable_file: String,
    pub report_file: String,
    pub reference_base_url: String,
    pub fetch_timeout_secs: u64,
    pub heuristics: Heuristics,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            input: PathBuf::from("raw_input.txt"),
            out_dir: PathBuf::from("fortune"),
            quote_file: "quotes".to_string(),
            unparseable_file: "unparseable.txt".to_string(),
            report_file: "attribution_report.txt".to_string(),
            reference_base_url: "https://en.wikiquote.org/wiki/".to_string(),
            fetch_timeout_secs: 20,
            heuristics: Heuristics::default(),
        }
    }
}

impl Settings {
    /// Defaults, then an optional `quote_fortune.toml`, then `FORTUNE_*` env vars
    /// (nested keys use `__`, e.g. `FORTUNE_HEURISTICS__LOOKBACK_CAP`).
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    pub fn quote_path(&self) -> PathBuf {
        self.out_dir.join(&self.quote_file)
    }

    pub fn unparseable_path(&self) -> PathBuf {
        self.out_dir.join(&self.unparseable_file)
    }

    pub fn report_path(&self) -> PathBuf {
        self.out_dir.join(&self.report_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_tuned_constants() {
        let h = Heuristics::default();
        assert_eq!(h.attribution_max_len, 120);
        assert_eq!(h.poem_min_lines, 3);
        assert_eq!(h.lookback_cap, 10);
        assert_eq!(h.split_score_divisor, 4);
    }

    #[test]
    fn output_paths_live_under_out_dir() {
        let s = Settings {
            out_dir: PathBuf::from("out"),
            ..Settings::default()
        };
        assert_eq!(s.quote_path(), PathBuf::from("out/quotes"));
        assert_eq!(s.unparseable_path(), PathBuf::from("out/unparseable.txt"));
        assert_eq!(s.report_path(), PathBuf::from("out/attribution_report.txt"));
    }

    #[test]
    fn partial_heuristics_fill_from_defaults() {
        let settings: Settings = Config::builder()
            .set_override("heuristics.lookback_cap", 4)
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.heuristics.lookback_cap, 4);
        assert_eq!(settings.heuristics.poem_min_lines, 3);
        assert_eq!(settings.quote_file, "quotes");
    }
}
