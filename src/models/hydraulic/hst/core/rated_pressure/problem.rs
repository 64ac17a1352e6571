//! Problem formulation for the rated-power discharge pressure search.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{AngularVelocity, Power, Pressure},
    power::kilowatt,
    pressure::bar,
};

use crate::models::hydraulic::hst::core::{EvaluateError, Evaluation, OperatingPoint, Transmission};

/// Model adapter that exposes the discharge pressure as the sole input.
///
/// Loads are skipped while iterating.
pub(super) struct RatedPressureModel<'a> {
    transmission: &'a Transmission,
    pump_speed: AngularVelocity,
    charge_pressure: Pressure,
}

impl<'a> RatedPressureModel<'a> {
    pub(super) fn new(
        transmission: &'a Transmission,
        pump_speed: AngularVelocity,
        charge_pressure: Pressure,
    ) -> Self {
        Self {
            transmission,
            pump_speed,
            charge_pressure,
        }
    }
}

impl Model for RatedPressureModel<'_> {
    type Input = Pressure;
    type Output = Evaluation;
    type Error = EvaluateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let point = OperatingPoint {
            pump_speed: self.pump_speed,
            charge_pressure: self.charge_pressure,
            discharge_pressure: *input,
        };
        self.transmission.evaluate(&point, false)
    }
}

/// Computes the residual as `pump_power - rated_power`.
pub(super) struct RatedPressureProblem {
    rated_power: Power,
}

impl RatedPressureProblem {
    pub(super) fn new(rated_power: Power) -> Self {
        Self { rated_power }
    }
}

impl EquationProblem<1> for RatedPressureProblem {
    type Input = Pressure;
    type Output = Evaluation;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Pressure::new::<bar>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        let power = output.performance.pump.power.get::<kilowatt>();
        Ok([power - self.rated_power.get::<kilowatt>()])
    }
}
