//! Structured error kinds for the solver's entry points.
use thiserror::Error;

/// Failures the solver can report synchronously, before or while a solve is
/// in progress. Normal SAT/UNSAT verdicts are not errors; see
/// [`crate::solver::Certificate`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The clause database handed to [`crate::solver::Solver::new`] violates
    /// a documented precondition (a literal outside the variable universe,
    /// a tautological clause, or an empty clause).
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Shorthand used by fallible setup operations.
pub type Result<T> = std::result::Result<T, SolverError>;
