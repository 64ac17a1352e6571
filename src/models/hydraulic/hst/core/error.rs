use thiserror::Error;

use crate::support::oil::OilDataNotFound;

use super::{ConfigurationError, DegenerateGeometryError, OperatingPointError};

/// Errors that can occur while evaluating the HST model.
///
/// Every variant is a precondition failure. The model is deterministic, so
/// retrying with the same inputs reproduces the same error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluateError {
    /// The machine configuration is out of range.
    ///
    /// A [`MachineConfiguration`](super::MachineConfiguration) is validated
    /// when it is built, so evaluation never produces this variant. It lets
    /// callers chain configuration and evaluation with `?` into one error.
    #[error("invalid configuration")]
    InvalidConfiguration(#[from] ConfigurationError),

    /// The operating point violates a model precondition.
    #[error("invalid operating point")]
    InvalidOperatingPoint(#[from] OperatingPointError),

    /// A sealing band collapsed, so leakage is undefined.
    #[error("degenerate geometry")]
    DegenerateGeometry(#[from] DegenerateGeometryError),

    /// The oil table has no entry for the configured grade and temperature.
    #[error("oil data not found")]
    OilDataNotFound(#[from] OilDataNotFound),
}
