//! lendsweep CLI: run a threshold sweep over a loan evaluation set.

use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use lsw_common::{OutputFormat, Result};
use lsw_core::{evaluate_thresholds, EvaluationInput, SweepReport};

/// Evaluate loan-approval thresholds for accuracy and profit.
#[derive(Debug, Parser)]
#[command(name = "lendsweep", version, about)]
struct Cli {
    /// Path to the JSON evaluation input document.
    input: PathBuf,

    /// Override the document's candidate thresholds.
    #[arg(long, value_delimiter = ',')]
    thresholds: Option<Vec<f64>>,

    /// Report output format.
    #[arg(long, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut input = EvaluationInput::from_file(&cli.input)?;
    if let Some(thresholds) = &cli.thresholds {
        input.thresholds = thresholds.clone();
    }
    input.validate()?;

    debug!(
        cases = input.cases.len(),
        thresholds = input.thresholds.len(),
        "input loaded"
    );

    let results = evaluate_thresholds(&input.cases, &input.thresholds)?;
    let report = SweepReport::new(&input.cases, results);

    info!(
        run_id = %report.run_id,
        best_threshold = ?report.best_threshold,
        baseline_profit = report.baseline_profit,
        "sweep complete"
    );

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print!("{}", report.render_table()),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        error!(code = err.code(), "{err}");
        exit(lsw_core::exit_codes::ExitCode::from(&err).as_i32());
    }
}
