use crate::model::Report;
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "lockhist",
    version,
    about = "Overlaid idle-latency histograms for mutex vs semaphore captures"
)]
pub struct Cli {
    /// CSV with one mutex latency sample (ns) per line, no header
    #[arg(long, default_value = "../csvs/mutex_ns.csv")]
    pub mutex_csv: PathBuf,

    /// CSV with one semaphore latency sample (ns) per line, no header
    #[arg(long, default_value = "../csvs/sem_ns.csv")]
    pub sem_csv: PathBuf,

    /// Number of shared histogram bin edges
    #[arg(long, default_value_t = 100)]
    pub bins: usize,

    /// Print a text summary and exit (no TUI)
    #[arg(long)]
    pub text: bool,

    /// Print the full report as JSON and exit (no TUI)
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: Cli) -> Result<()> {
    let report = Report::build(&args.mutex_csv, &args.sem_csv, args.bins)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !args.text {
        #[cfg(feature = "tui")]
        {
            return crate::tui::run(&args, report);
        }
        #[cfg(not(feature = "tui"))]
        {
            // Fallback when built without TUI support.
            return run_text(report);
        }
    }

    run_text(report)
}

fn run_text(report: Report) -> Result<()> {
    let summary = crate::text_summary::build_text_summary(&report);
    for line in summary.lines {
        println!("{line}");
    }
    Ok(())
}
