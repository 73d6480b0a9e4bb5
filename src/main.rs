mod error;
mod files;
mod fortune;
mod metrics;
mod parser;
mod settings;
mod stats;
mod utils;
mod verify;
mod writer;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use metrics::{new_run_id, PassTracker};
use settings::Settings;
use verify::fetch::HttpSource;
use writer::QcReport;

#[derive(Parser)]
#[command(name = "quote_fortune", about = "Turn a raw quotation dump into a fortune file")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group, classify and write quotes as a fortune file
    Parse {
        /// Raw text dump (default: raw_input.txt)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output directory for the quote and unparseable files
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
        /// Also print the QC report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Look up each attributed author's reference page and report matches
    Check {
        /// Quote file to read (default: <out_dir>/quotes)
        #[arg(short, long)]
        quotes: Option<PathBuf>,
        /// Where to write the report (default: <out_dir>/attribution_report.txt)
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
    /// Show statistics for an existing quote file
    Stats {
        #[arg(short, long)]
        quotes: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let mut settings = Settings::load().context("Failed to load settings")?;

    let result = match cli.command {
        Commands::Parse {
            input,
            out_dir,
            json,
        } => {
            if let Some(input) = input {
                settings.input = input;
            }
            if let Some(dir) = out_dir {
                settings.out_dir = dir;
            }
            run_parse(&settings, json)
        }
        Commands::Check { quotes, report } => {
            let quotes = quotes.unwrap_or_else(|| settings.quote_path());
            let report = report.unwrap_or_else(|| settings.report_path());
            run_check(&settings, &quotes, &report)
        }
        Commands::Stats { quotes } => {
            let quotes = quotes.unwrap_or_else(|| settings.quote_path());
            let text = files::read_text(&quotes)
                .with_context(|| format!("Failed to read {}", quotes.display()))?;
            stats::FortuneStats::compute(&fortune::read_records(&text)).print();
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", utils::format_duration(elapsed));
    }

    result
}

fn run_parse(settings: &Settings, json: bool) -> anyhow::Result<()> {
    let raw = files::read_text(&settings.input)
        .with_context(|| format!("Failed to read {}", settings.input.display()))?;
    info!(input = %settings.input.display(), "parsing quote dump");

    let mut tracker = PassTracker::new(new_run_id());
    let output = parser::process_text(&raw, &settings.heuristics, &mut tracker);
    tracker.print();

    let quote_path = settings.quote_path();
    let unparseable_path = settings.unparseable_path();
    writer::write_outputs(&output, &quote_path, &unparseable_path)?;

    let report = QcReport::new(&tracker, &output);
    println!("{}", report.render(&quote_path, &unparseable_path));
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}

fn run_check(settings: &Settings, quotes: &Path, report_path: &Path) -> anyhow::Result<()> {
    let text = files::read_text(quotes)
        .with_context(|| format!("Failed to read {}", quotes.display()))?;
    let records = fortune::read_records(&text);
    let attributed = verify::attributed_records(&records);
    let groups = verify::group_by_author(&attributed);
    println!(
        "Found {} attributed records with {} distinct authors.",
        attributed.len(),
        groups.len()
    );

    let source = HttpSource::new(Duration::from_secs(settings.fetch_timeout_secs))?;
    let pb = ProgressBar::new(groups.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")?
            .progress_chars("=> "),
    );

    let checks = verify::check_authors(&groups, &settings.reference_base_url, &source, |check| {
        pb.set_message(check.author.clone());
        pb.inc(1);
    });
    pb.finish_and_clear();

    let report = verify::render_report(&checks);
    files::write_text(report_path, &report)?;
    println!("{}", verify::summarize(&checks));
    println!("Report written to {}", report_path.display());
    Ok(())
}
