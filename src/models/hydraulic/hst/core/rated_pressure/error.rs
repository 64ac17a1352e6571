use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::Power;

use crate::models::hydraulic::hst::core::EvaluateError;

/// Errors that can occur while searching for the rated-power discharge pressure.
#[derive(Debug, Error)]
pub enum RatedPressureError {
    /// The transmission cannot be evaluated in the requested conditions.
    #[error("evaluation failed")]
    Evaluate(#[from] EvaluateError),

    /// The bisection solver encountered an error.
    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The solver reached the iteration limit without converging.
    #[error("solver hit iteration limit: residual={residual:?}")]
    MaxIters {
        /// Best power residual achieved.
        residual: Power,

        /// Iteration count performed by the solver.
        iters: usize,
    },
}
