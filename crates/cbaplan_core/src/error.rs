use std::fmt;

/// Errors raised by the financial primitives
#[derive(Debug, Clone, PartialEq)]
pub enum FinanceError {
    /// Discount rate at or below -100%, or not a finite number
    InvalidRate(f64),
    /// Discounted cost base is zero, so a ratio is undefined
    ZeroDenominator,
    /// Newton-Raphson hit a flat point of the NPV curve
    ZeroDerivative { rate: f64, iteration: usize },
    /// Newton-Raphson produced a non-finite iterate
    Diverged { iteration: usize },
}

impl fmt::Display for FinanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinanceError::InvalidRate(rate) => {
                write!(f, "invalid discount rate {rate}: must be finite and greater than -1")
            }
            FinanceError::ZeroDenominator => {
                write!(f, "discounted costs are zero, ratio is undefined")
            }
            FinanceError::ZeroDerivative { rate, iteration } => {
                write!(
                    f,
                    "IRR derivative vanished at rate {rate} (iteration {iteration})"
                )
            }
            FinanceError::Diverged { iteration } => {
                write!(f, "IRR iteration diverged at iteration {iteration}")
            }
        }
    }
}

impl std::error::Error for FinanceError {}

/// Errors raised by the sensitivity and simulation engines
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    InvalidDistribution {
        distribution: &'static str,
        reason: String,
    },
    Finance(FinanceError),
    /// Summary statistics requested over an empty sample
    EmptySample,
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidDistribution {
                distribution,
                reason,
            } => write!(f, "invalid {distribution} parameters: {reason}"),
            AnalysisError::Finance(e) => write!(f, "{e}"),
            AnalysisError::EmptySample => write!(f, "sample is empty"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Finance(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FinanceError> for AnalysisError {
    fn from(err: FinanceError) -> Self {
        AnalysisError::Finance(err)
    }
}

pub type Result<T> = std::result::Result<T, FinanceError>;
