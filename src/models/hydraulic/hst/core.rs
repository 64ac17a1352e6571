//! Steady-state performance model of a closed-loop hydrostatic transmission.
//!
//! The transmission is a swashplate axial-piston pump driving an identical
//! fixed-displacement motor. An evaluation runs a fixed chain of stages, each
//! a pure function of the machine configuration, the oil and the operating
//! point:
//!
//! 1. geometry sizing from displacement, swash angle and piston count,
//! 2. leakage through the block, shoe and piston films,
//! 3. volumetric and mechanical efficiencies of pump, motor and HST,
//! 4. shaft torque, power and speed,
//! 5. structural loads (optional),
//! 6. control and charge flow.

mod coefficients;
mod charge;
mod config;
mod efficiency;
mod error;
mod evaluation;
mod geometry;
mod leakage;
mod loads;
mod operating_point;
mod performance;
mod porting;
mod rated_pressure;

#[cfg(test)]
pub(super) mod test_support;

pub use coefficients::{Clearances, DesignBalance, FrictionCoefficients, ModelCoefficients};
pub use config::{ConfigurationError, MachineConfiguration};
pub use charge::{ChargeFlow, ControlActuator, control_flow};
pub use efficiency::{Efficiencies, EfficiencyKind, MachineEfficiency, OutOfRange, Unit};
pub use error::EvaluateError;
pub use evaluation::Evaluation;
pub use geometry::{Band, BandKind, DegenerateGeometryError, GeometrySizes};
pub use leakage::LeakageFlows;
pub use loads::{ForceComponents, Loads};
pub use operating_point::{OperatingPoint, OperatingPointError};
pub use performance::{PerformanceResult, ShaftPower};
pub use rated_pressure::{RatedPressureConfig, RatedPressureError};

use tracing::debug;
use uom::si::f64::{AngularVelocity, Pressure};

use crate::support::oil::{OilDataNotFound, OilProperties, OilPropertyLookup};

/// Evaluates one operating point from scratch.
///
/// Sizes the machine and looks up the oil on every call. Use a
/// [`Transmission`] to evaluate many points of the same machine.
///
/// # Errors
///
/// Returns an [`EvaluateError`] if the operating point is invalid, the oil is
/// not in the table, or a sealing band is degenerate.
pub fn evaluate(
    config: &MachineConfiguration,
    coefficients: &ModelCoefficients,
    point: &OperatingPoint,
    oil: &impl OilPropertyLookup,
) -> Result<Evaluation, EvaluateError> {
    point.validate()?;
    let oil = oil.oil_properties(config.oil_grade(), config.oil_temperature())?;
    let geometry = GeometrySizes::compute(config, &coefficients.design);
    evaluation::evaluate(config, coefficients, &geometry, &oil, point, true)
}

/// A sized machine with its oil properties resolved.
///
/// Geometry and oil depend only on the configuration, so they are computed
/// once and shared by every evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Transmission {
    config: MachineConfiguration,
    coefficients: ModelCoefficients,
    geometry: GeometrySizes,
    oil: OilProperties,
}

impl Transmission {
    /// Sizes the machine and resolves its oil.
    ///
    /// # Errors
    ///
    /// Returns [`OilDataNotFound`] if `oil` has no entry for the configured
    /// grade and temperature.
    pub fn new(
        config: MachineConfiguration,
        coefficients: ModelCoefficients,
        oil: &impl OilPropertyLookup,
    ) -> Result<Self, OilDataNotFound> {
        let oil = oil.oil_properties(config.oil_grade(), config.oil_temperature())?;
        let geometry = GeometrySizes::compute(&config, &coefficients.design);
        debug!(
            degenerate = geometry.is_degenerate(),
            "sized {} piston machine",
            config.pistons()
        );
        Ok(Self {
            config,
            coefficients,
            geometry,
            oil,
        })
    }

    /// Replaces the model coefficients and resizes the machine.
    #[must_use]
    pub fn with_coefficients(self, coefficients: ModelCoefficients) -> Self {
        let geometry = GeometrySizes::compute(&self.config, &coefficients.design);
        Self {
            coefficients,
            geometry,
            ..self
        }
    }

    #[must_use]
    pub fn config(&self) -> &MachineConfiguration {
        &self.config
    }

    #[must_use]
    pub fn coefficients(&self) -> &ModelCoefficients {
        &self.coefficients
    }

    #[must_use]
    pub fn geometry(&self) -> &GeometrySizes {
        &self.geometry
    }

    #[must_use]
    pub fn oil(&self) -> &OilProperties {
        &self.oil
    }

    /// Evaluates the transmission at `point`.
    ///
    /// # Errors
    ///
    /// Returns an [`EvaluateError`] if the operating point is invalid or a
    /// sealing band is degenerate.
    pub fn evaluate(
        &self,
        point: &OperatingPoint,
        include_loads: bool,
    ) -> Result<Evaluation, EvaluateError> {
        evaluation::evaluate(
            &self.config,
            &self.coefficients,
            &self.geometry,
            &self.oil,
            point,
            include_loads,
        )
    }

    /// Finds the discharge pressure at which the pump absorbs the rated
    /// input power of the configuration.
    ///
    /// The returned evaluation carries the converged discharge pressure in
    /// its operating point and has no loads.
    ///
    /// # Errors
    ///
    /// Returns a [`RatedPressureError`] if the speed or charge pressure is
    /// invalid, the rated power is outside the bracket, or the solver fails
    /// to converge.
    pub fn rated_pressure(
        &self,
        pump_speed: AngularVelocity,
        charge_pressure: Pressure,
        config: RatedPressureConfig,
    ) -> Result<Evaluation, RatedPressureError> {
        rated_pressure::rated_pressure(self, pump_speed, charge_pressure, config)
    }
}
