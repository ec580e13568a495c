//! Tests for the GBM path generator
//!
//! These tests verify that:
//! - The same seed and parameters reproduce bit-identical grids
//! - Grid shape and the initial row match the parameters
//! - GBM values stay strictly positive
//! - Zero volatility degenerates to deterministic compounding

use crate::error::ParameterError;
use crate::params::{SimulationParameters, TRADING_DAYS_PER_YEAR};
use crate::paths::generate_paths;
use crate::summary::{percentile, summarize};

fn base_params() -> SimulationParameters {
    SimulationParameters {
        initial_investment: 10_000.0,
        annual_return: 0.07,
        annual_volatility: 0.15,
        horizon_years: 2,
        num_paths: 25,
        seed: 42,
    }
}

#[test]
fn test_same_seed_reproduces_identical_grid() {
    let params = base_params();

    let first = generate_paths(&params).unwrap();
    let second = generate_paths(&params).unwrap();
    assert_eq!(first, second, "same seed must reproduce the grid bit-for-bit");

    let other = generate_paths(&SimulationParameters {
        seed: 43,
        ..params
    })
    .unwrap();
    assert_ne!(first, other, "a different seed should produce different draws");
}

#[test]
fn test_grid_shape_matches_parameters() {
    let params = base_params();
    let grid = generate_paths(&params).unwrap();

    assert_eq!(grid.num_rows(), 2 * TRADING_DAYS_PER_YEAR + 1);
    assert_eq!(grid.num_paths(), 25);
    assert_eq!(grid.row(0).len(), 25);
    assert_eq!(grid.rows().count(), grid.num_rows());
}

#[test]
fn test_time_axis_spans_zero_to_horizon() {
    let grid = generate_paths(&base_params()).unwrap();
    let axis = grid.time_axis();

    assert_eq!(axis.len(), grid.num_rows());
    assert_eq!(axis[0], 0.0);
    assert_eq!(axis[axis.len() - 1], 2.0);
    // Evenly spaced: one year is exactly 252 steps in.
    assert!((axis[TRADING_DAYS_PER_YEAR] - 1.0).abs() < 1e-12);
}

#[test]
fn test_initial_row_is_broadcast_investment() {
    let grid = generate_paths(&base_params()).unwrap();
    assert!(grid.row(0).iter().all(|&v| v == 10_000.0));
}

#[test]
fn test_all_values_strictly_positive() {
    // High volatility stresses the log-normal step; values still cannot
    // reach zero from a positive start.
    let params = SimulationParameters {
        annual_volatility: 1.0,
        annual_return: -0.10,
        ..base_params()
    };
    let grid = generate_paths(&params).unwrap();

    assert!(grid.rows().flatten().all(|&v| v > 0.0));
}

#[test]
fn test_zero_volatility_compounds_deterministically() {
    let params = SimulationParameters {
        annual_volatility: 0.0,
        horizon_years: 1,
        num_paths: 10,
        ..base_params()
    };
    let grid = generate_paths(&params).unwrap();

    // Row t is exactly 10_000 * exp(mu * t * dt) in every column.
    let dt = 1.0 / TRADING_DAYS_PER_YEAR as f64;
    for (t, row) in grid.rows().enumerate() {
        let expected = 10_000.0 * (0.07 * t as f64 * dt).exp();
        for &v in row {
            assert!(
                (v - expected).abs() < 1e-5,
                "row {t}: expected {expected}, got {v}"
            );
        }
    }

    // Terminal value: 10_000 * exp(0.07) = 10_725.08...
    let expected_terminal = 10_000.0 * 0.07_f64.exp();
    assert!((expected_terminal - 10_725.08).abs() < 0.01);
    for &v in grid.terminal_row() {
        assert!((v - expected_terminal).abs() < 1e-5);
    }
}

#[test]
fn test_single_path_grid() {
    let params = SimulationParameters {
        num_paths: 1,
        ..base_params()
    };
    let grid = generate_paths(&params).unwrap();

    assert_eq!(grid.num_paths(), 1);
    assert_eq!(grid.terminal_row().len(), 1);
    assert!(grid.terminal_row()[0] > 0.0);
}

#[test]
fn test_twenty_year_scenario_shape_and_plausible_median() {
    let params = SimulationParameters::from_percent(10_000.0, 7.0, 15.0, 20, 1_000, 42);
    let grid = generate_paths(&params).unwrap();

    assert_eq!(grid.num_rows(), 5_041);
    assert_eq!(grid.num_paths(), 1_000);

    // Theoretical GBM median is 10_000 * exp((0.07 - 0.15^2/2) * 20) ~ 32_384.
    // The sample median of 1_000 paths should land in a broad band around it.
    let mut terminal = grid.terminal_row().to_vec();
    terminal.sort_unstable_by(f64::total_cmp);
    let median = percentile(&terminal, 50.0);
    assert!(
        (15_000.0..70_000.0).contains(&median),
        "median terminal value {median} outside plausible band"
    );

    // Shape also flows through to the summary.
    let summary = summarize(&grid);
    assert_eq!(summary.percentiles.len(), 5_041);
    assert_eq!(summary.terminal_values.len(), 1_000);
}

#[test]
fn test_from_percent_converts_at_the_boundary() {
    let params = SimulationParameters::from_percent(10_000.0, 7.0, 15.0, 20, 1_000, 42);

    assert_eq!(params.annual_return, 0.07);
    assert_eq!(params.annual_volatility, 0.15);
    assert_eq!(params.total_steps(), 5_040);
}

#[test]
fn test_invalid_parameters_fail_fast() {
    let valid = base_params();

    let err = generate_paths(&SimulationParameters {
        initial_investment: -1.0,
        ..valid
    })
    .unwrap_err();
    assert_eq!(err, ParameterError::NonPositiveInvestment(-1.0));

    let err = generate_paths(&SimulationParameters {
        annual_volatility: -0.05,
        ..valid
    })
    .unwrap_err();
    assert_eq!(err, ParameterError::NegativeVolatility(-0.05));

    let err = generate_paths(&SimulationParameters {
        horizon_years: 0,
        ..valid
    })
    .unwrap_err();
    assert_eq!(err, ParameterError::ZeroHorizon);

    let err = generate_paths(&SimulationParameters {
        num_paths: 0,
        ..valid
    })
    .unwrap_err();
    assert_eq!(err, ParameterError::ZeroPaths);

    let err = generate_paths(&SimulationParameters {
        initial_investment: f64::NAN,
        ..valid
    })
    .unwrap_err();
    assert!(matches!(err, ParameterError::NonFinite { field, .. } if field == "initial_investment"));
}

#[test]
fn test_error_messages_are_descriptive() {
    let msg = ParameterError::NonPositiveInvestment(-5.0).to_string();
    assert!(msg.contains("positive"), "unexpected message: {msg}");

    let msg = ParameterError::ZeroHorizon.to_string();
    assert!(msg.contains("year"), "unexpected message: {msg}");
}
