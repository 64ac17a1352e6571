//! Discharge pressure at which the pump absorbs its rated input power.
//!
//! Pump power rises monotonically with discharge pressure at a fixed speed and
//! charge pressure, so the search is a bracketed bisection on the discharge
//! pressure.

mod config;
mod error;
mod problem;

pub use config::RatedPressureConfig;
pub use error::RatedPressureError;

use tracing::debug;
use twine_solvers::equation::{EvalError, bisection};
use uom::si::{
    f64::{AngularVelocity, Power, Pressure},
    power::kilowatt,
    pressure::bar,
};

use super::{EvaluateError, Evaluation, OperatingPoint, Transmission};

use problem::{RatedPressureModel, RatedPressureProblem};

/// Finds the discharge pressure where pump power equals the rated input power.
///
/// # Errors
///
/// Returns [`RatedPressureError`] if the speed or charge pressure is invalid,
/// a sealing band is degenerate, the rated power is not bracketed, or the
/// solver fails to converge.
pub(super) fn rated_pressure(
    transmission: &Transmission,
    pump_speed: AngularVelocity,
    charge_pressure: Pressure,
    config: RatedPressureConfig,
) -> Result<Evaluation, RatedPressureError> {
    let [_, upper] = config.bracket;
    OperatingPoint {
        pump_speed,
        charge_pressure,
        discharge_pressure: upper,
    }
    .validate()
    .map_err(EvaluateError::from)?;
    transmission
        .geometry()
        .check_bands()
        .map_err(EvaluateError::from)?;

    let rated_power = transmission.config().rated_input_power();
    let model = RatedPressureModel::new(transmission, pump_speed, charge_pressure);
    let problem = RatedPressureProblem::new(rated_power);

    let solution = bisection::solve(
        &model,
        &problem,
        config.bracket_bar(),
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Discharge pressures at or below the charge pressure deliver no
            // power, so treat them as falling short of the rated power.
            // Any other model error ends the solve.
            match event.result() {
                Err(EvalError::Model(EvaluateError::InvalidOperatingPoint(_))) => {
                    Some(bisection::Action::assume_negative())
                }
                _ => None,
            }
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(RatedPressureError::MaxIters {
            residual: Power::new::<kilowatt>(solution.residual),
            iters: solution.iters,
        });
    }

    let evaluation = solution.snapshot.output;
    debug!(
        discharge_bar = evaluation.operating_point.discharge_pressure.get::<bar>(),
        iters = solution.iters,
        "rated pressure converged"
    );
    Ok(evaluation)
}
