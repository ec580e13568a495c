use serde::{Deserialize, Serialize};

use crate::error::ParameterError;

/// Fixed trading-day convention used to discretize a year into steps.
pub const TRADING_DAYS_PER_YEAR: usize = 252;

/// Immutable inputs for one simulation run.
///
/// Return and volatility are fractions (0.07 means 7% a year). Callers that
/// work in percent units convert once at the boundary via
/// [`SimulationParameters::from_percent`]; the engine itself never converts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    pub initial_investment: f64,
    pub annual_return: f64,
    pub annual_volatility: f64,
    pub horizon_years: usize,
    pub num_paths: usize,
    pub seed: u64,
}

impl SimulationParameters {
    /// Build parameters from percent-style return and volatility inputs.
    #[must_use]
    pub fn from_percent(
        initial_investment: f64,
        annual_return_pct: f64,
        annual_volatility_pct: f64,
        horizon_years: usize,
        num_paths: usize,
        seed: u64,
    ) -> Self {
        Self {
            initial_investment,
            annual_return: annual_return_pct / 100.0,
            annual_volatility: annual_volatility_pct / 100.0,
            horizon_years,
            num_paths,
            seed,
        }
    }

    /// Number of discrete time steps in the run (row 0 excluded).
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.horizon_years * TRADING_DAYS_PER_YEAR
    }

    /// Check every precondition the path generator relies on.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !self.initial_investment.is_finite() {
            return Err(ParameterError::NonFinite {
                field: "initial_investment",
                value: self.initial_investment,
            });
        }
        if !self.annual_return.is_finite() {
            return Err(ParameterError::NonFinite {
                field: "annual_return",
                value: self.annual_return,
            });
        }
        if !self.annual_volatility.is_finite() {
            return Err(ParameterError::NonFinite {
                field: "annual_volatility",
                value: self.annual_volatility,
            });
        }
        if self.initial_investment <= 0.0 {
            return Err(ParameterError::NonPositiveInvestment(
                self.initial_investment,
            ));
        }
        if self.annual_volatility < 0.0 {
            return Err(ParameterError::NegativeVolatility(self.annual_volatility));
        }
        if self.horizon_years == 0 {
            return Err(ParameterError::ZeroHorizon);
        }
        if self.num_paths == 0 {
            return Err(ParameterError::ZeroPaths);
        }
        Ok(())
    }
}
