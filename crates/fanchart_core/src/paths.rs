//! GBM path generation.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::error::ParameterError;
use crate::params::{SimulationParameters, TRADING_DAYS_PER_YEAR};

/// A fully materialized grid of simulated portfolio values.
///
/// Shape is `(total_steps + 1) x num_paths`, stored row-major. Row 0 holds
/// the initial investment in every column; row `t` holds the value of every
/// path after `t` trading days. The grid is frozen once generated: consumers
/// only get shared access.
#[derive(Debug, Clone, PartialEq)]
pub struct PathGrid {
    values: Vec<f64>,
    num_paths: usize,
    horizon_years: usize,
}

impl PathGrid {
    /// Number of time rows, `horizon_years * 252 + 1`.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.values.len() / self.num_paths
    }

    #[must_use]
    pub fn num_paths(&self) -> usize {
        self.num_paths
    }

    #[must_use]
    pub fn horizon_years(&self) -> usize {
        self.horizon_years
    }

    /// Values of every path after `t` trading days.
    ///
    /// # Panics
    /// Panics if `t >= num_rows()`.
    #[must_use]
    pub fn row(&self, t: usize) -> &[f64] {
        &self.values[t * self.num_paths..(t + 1) * self.num_paths]
    }

    /// Iterate rows in time order.
    pub fn rows(&self) -> std::slice::ChunksExact<'_, f64> {
        self.values.chunks_exact(self.num_paths)
    }

    /// The finishing value of every path (the last row, untransformed).
    #[must_use]
    pub fn terminal_row(&self) -> &[f64] {
        self.row(self.num_rows() - 1)
    }

    /// Time axis in years, positionally aligned with rows: `num_rows()`
    /// values evenly spaced from 0 to `horizon_years`.
    #[must_use]
    pub fn time_axis(&self) -> Vec<f64> {
        let total_steps = (self.num_rows() - 1) as f64;
        let horizon = self.horizon_years as f64;
        (0..self.num_rows())
            .map(|t| t as f64 * horizon / total_steps)
            .collect()
    }
}

/// Generate the full value grid for one parameter set.
///
/// The generator is constructed locally from `params.seed`, so the same seed
/// and parameters reproduce a bit-identical grid regardless of call order.
/// Draws are consumed one time step at a time, in column order within each
/// step. Each step applies the exact log-normal solution of GBM over `dt`,
/// not an Euler approximation; `sigma = 0` flows through the same formula and
/// degenerates to deterministic compounding.
pub fn generate_paths(params: &SimulationParameters) -> Result<PathGrid, ParameterError> {
    params.validate()?;

    let num_paths = params.num_paths;
    let total_steps = params.total_steps();
    let dt = 1.0 / TRADING_DAYS_PER_YEAR as f64;

    let sigma = params.annual_volatility;
    let drift = (params.annual_return - 0.5 * sigma * sigma) * dt;
    let diffusion = sigma * dt.sqrt();

    let mut rng = SmallRng::seed_from_u64(params.seed);
    let mut values = vec![0.0_f64; (total_steps + 1) * num_paths];
    values[..num_paths].fill(params.initial_investment);

    for t in 1..=total_steps {
        let (done, rest) = values.split_at_mut(t * num_paths);
        let prev = &done[(t - 1) * num_paths..];
        let cur = &mut rest[..num_paths];
        for (value, last) in cur.iter_mut().zip(prev) {
            let z: f64 = rng.sample(StandardNormal);
            *value = last * (drift + diffusion * z).exp();
        }
    }

    Ok(PathGrid {
        values,
        num_paths,
        horizon_years: params.horizon_years,
    })
}
