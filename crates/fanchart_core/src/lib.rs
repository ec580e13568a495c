//! Monte Carlo simulation of portfolio value under Geometric Brownian Motion.
//!
//! The crate exposes two entry points:
//! - [`generate_paths`] builds the full `(steps + 1) x paths` value grid from
//!   a locally-seeded generator, one exact log-normal step per trading day.
//! - [`summarize`] reduces a grid to 5/25/50/75/95 percentile bands over time
//!   plus the terminal-value distribution.
//!
//! ```ignore
//! use fanchart_core::{generate_paths, summarize, SimulationParameters};
//!
//! let params = SimulationParameters::from_percent(10_000.0, 7.0, 15.0, 20, 1_000, 42);
//! let grid = generate_paths(&params)?;
//! let summary = summarize(&grid);
//! ```

#![warn(clippy::all)]

pub mod error;
pub mod params;
pub mod paths;
pub mod summary;

#[cfg(test)]
mod tests;

pub use error::ParameterError;
pub use params::{SimulationParameters, TRADING_DAYS_PER_YEAR};
pub use paths::{PathGrid, generate_paths};
pub use summary::{
    DistributionSummary, PERCENTILE_LEVELS, PercentileSeries, percentile, summarize,
};
