use std::fmt;

/// Precondition violations, surfaced before any computation starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterError {
    NonPositiveInvestment(f64),
    NegativeVolatility(f64),
    ZeroHorizon,
    ZeroPaths,
    NonFinite { field: &'static str, value: f64 },
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::NonPositiveInvestment(v) => {
                write!(f, "initial investment must be positive, got {v}")
            }
            ParameterError::NegativeVolatility(v) => {
                write!(f, "annual volatility must be non-negative, got {v}")
            }
            ParameterError::ZeroHorizon => write!(f, "horizon must be at least one year"),
            ParameterError::ZeroPaths => write!(f, "at least one simulated path is required"),
            ParameterError::NonFinite { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for ParameterError {}
