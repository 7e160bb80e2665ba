//! Error types for astronomical searches.

use thiserror::Error;

/// Errors from iterative astronomical searches.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AstroError {
    /// Iteration did not settle within the configured budget.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
    /// Search configuration is unusable.
    #[error("invalid search config: {0}")]
    InvalidConfig(&'static str),
}
