//! Plain-text and JSON views of a finished run.

use serde::Serialize;

use fanchart_core::{
    DistributionSummary, PathGrid, SimulationParameters, TRADING_DAYS_PER_YEAR, percentile,
};

/// Percentile bands at one yearly checkpoint.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct YearlyBands {
    pub year: usize,
    pub p5: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
}

/// Terminal-value distribution statistics.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TerminalStats {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub p5: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
}

/// Everything the shell shows for one run: the parameters, the fan-chart
/// bands sampled at yearly checkpoints, and the terminal distribution.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub parameters: SimulationParameters,
    pub yearly_bands: Vec<YearlyBands>,
    pub terminal: TerminalStats,
}

impl RunReport {
    pub fn new(
        params: &SimulationParameters,
        grid: &PathGrid,
        summary: &DistributionSummary,
    ) -> Self {
        let bands = &summary.percentiles;
        let yearly_bands = (0..=grid.horizon_years())
            .map(|year| {
                let [p5, p25, p50, p75, p95] = bands.at_row(year * TRADING_DAYS_PER_YEAR);
                YearlyBands {
                    year,
                    p5,
                    p25,
                    p50,
                    p75,
                    p95,
                }
            })
            .collect();

        let mut sorted = summary.terminal_values.clone();
        sorted.sort_unstable_by(f64::total_cmp);
        let terminal = TerminalStats {
            mean: sorted.iter().sum::<f64>() / sorted.len() as f64,
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            p5: percentile(&sorted, 5.0),
            p25: percentile(&sorted, 25.0),
            p50: percentile(&sorted, 50.0),
            p75: percentile(&sorted, 75.0),
            p95: percentile(&sorted, 95.0),
        };

        Self {
            parameters: *params,
            yearly_bands,
            terminal,
        }
    }

    /// Print the fan-chart table and terminal distribution to stdout.
    pub fn print(&self) {
        println!(
            "Monte Carlo portfolio simulation: {} paths over {} years (seed {})",
            self.parameters.num_paths, self.parameters.horizon_years, self.parameters.seed
        );
        println!(
            "initial ${:.2}, expected return {:.2}%/yr, volatility {:.2}%/yr",
            self.parameters.initial_investment,
            self.parameters.annual_return * 100.0,
            self.parameters.annual_volatility * 100.0
        );
        println!();
        println!(
            "{:>4}  {:>14}  {:>14}  {:>14}  {:>14}  {:>14}",
            "year", "p5", "p25", "median", "p75", "p95"
        );
        for b in &self.yearly_bands {
            println!(
                "{:>4}  {:>14.2}  {:>14.2}  {:>14.2}  {:>14.2}  {:>14.2}",
                b.year, b.p5, b.p25, b.p50, b.p75, b.p95
            );
        }
        println!();
        println!(
            "terminal values: mean {:.2}, min {:.2}, max {:.2}",
            self.terminal.mean, self.terminal.min, self.terminal.max
        );
    }
}
