//! Command-line surface: parse the digit count, run the pipeline with a
//! terminal progress bar, save the result, and print a short verification
//! prefix with the elapsed wall-clock time.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use chudnovsky::{write_digits, ChudnovskyError, NoProgress, PrecisionPlan, ProgressSink};

#[derive(Parser)]
#[command(name = "chudnovsky")]
#[command(about = "Compute π to a requested number of decimal digits")]
struct Cli {
    /// Number of decimal digits of π to compute
    digits: u64,

    /// Destination file for the digit string, overwritten if present
    #[arg(long, default_value = "pi.txt")]
    output: PathBuf,

    /// Suppress the per-term progress bar
    #[arg(long)]
    quiet: bool,
}

/// Adapts the terminal bar to the library's per-term observer.
struct TermBar {
    bar: ProgressBar,
}

impl ProgressSink for TermBar {
    fn term_completed(&self) {
        self.bar.inc(1);
    }
}

fn run(cli: &Cli) -> Result<(), ChudnovskyError> {
    let plan = PrecisionPlan::for_digits(cli.digits)?;
    let start = Instant::now();

    let computation = if cli.quiet {
        plan.compute(&NoProgress)
    } else {
        let bar = ProgressBar::new(plan.total_terms as u64);
        bar.set_style(
            ProgressStyle::with_template(
                "  {spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} terms ({per_sec}) ETA {eta}",
            )
            .unwrap()
            .progress_chars("=>-"),
        );
        let sink = TermBar { bar };
        let computation = plan.compute(&sink);
        sink.bar.finish_and_clear();
        computation
    };

    println!("saving {}", cli.output.display());
    write_digits(&cli.output, &computation.formatted)?;

    let elapsed = start.elapsed().as_secs_f64();
    println!(
        "computed {} digits in {elapsed:.3}s ({} series terms)",
        cli.digits, computation.terms_used
    );
    let preview_end = computation.formatted.len().min(52);
    println!("first 50 digits: {}", &computation.formatted[..preview_end]);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
