use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fanchart_core::{SimulationParameters, generate_paths, summarize};

mod export;
mod report;

#[derive(Parser, Debug)]
#[command(name = "fanchart")]
#[command(about = "Monte Carlo portfolio simulator with percentile fan-chart output")]
struct Args {
    /// Initial investment ($)
    #[arg(long, default_value_t = 10_000.0)]
    initial_investment: f64,

    /// Expected annual return (%)
    #[arg(long, default_value_t = 7.0)]
    annual_return: f64,

    /// Annual volatility (%)
    #[arg(long, default_value_t = 15.0)]
    volatility: f64,

    /// Time horizon (years)
    #[arg(long, default_value_t = 20)]
    years: usize,

    /// Number of simulated paths
    #[arg(long, default_value_t = 1_000)]
    paths: usize,

    /// Random seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Write the full simulation grid to a CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(&args.log_level);

    // Percent-style inputs are converted to fractions here, at the boundary;
    // the engine contract is fraction-based.
    let params = SimulationParameters::from_percent(
        args.initial_investment,
        args.annual_return,
        args.volatility,
        args.years,
        args.paths,
        args.seed,
    );

    let started = Instant::now();
    let grid = generate_paths(&params)?;
    let summary = summarize(&grid);
    info!(
        rows = grid.num_rows(),
        paths = grid.num_paths(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "simulation complete"
    );

    let report = report::RunReport::new(&params, &grid, &summary);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }

    if let Some(path) = &args.output {
        export::write_simulation_csv(path, &grid)?;
        info!(path = %path.display(), "simulation grid exported");
    }

    Ok(())
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("fanchart={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
