//! Hydrostatic transmission (HST) model.
//!
//! This module provides a [`twine_core::Model`] implementation for a
//! closed-loop pump and motor pair. The computational core is in the internal
//! [`core`] module.
//!
//! # Example
//!
//! ```
//! use hst_models::models::hydraulic::hst::{
//!     Hst, MachineConfiguration, ModelCoefficients, OperatingPoint,
//! };
//! use hst_models::support::oil::{OilProperties, OilTable};
//! use twine_core::Model;
//! use uom::si::{
//!     angle::degree,
//!     diffusion_coefficient::centistokes,
//!     dynamic_viscosity::millipascal_second,
//!     f64::{Angle, DiffusionCoefficient, DynamicViscosity, MassDensity, Pressure, Volume},
//!     mass_density::kilogram_per_cubic_meter,
//!     power::kilowatt,
//!     pressure::bar,
//!     volume::cubic_centimeter,
//! };
//!
//! let oil = OilProperties::new(
//!     DynamicViscosity::new::<millipascal_second>(11.52),
//!     DiffusionCoefficient::new::<centistokes>(14.2),
//!     MassDensity::new::<kilogram_per_cubic_meter>(811.3),
//!     Pressure::new::<bar>(15_000.0),
//! )?;
//! let table = OilTable::new().with_entry("SAE 15W40", 100, oil);
//!
//! let config = MachineConfiguration::new(
//!     Volume::new::<cubic_centimeter>(440.0),
//!     Angle::new::<degree>(18.0),
//!     9,
//! )?;
//! let hst = Hst::new(config, ModelCoefficients::default(), &table)?;
//!
//! let result = hst.call(&OperatingPoint::from_rpm_bar(2025.0, 25.0, 472.0))?;
//! assert!((result.performance.pump.power.get::<kilowatt>() - 681.93).abs() < 0.01);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub(crate) mod core;

pub use self::core::{
    Band, BandKind, ChargeFlow, Clearances, ConfigurationError, ControlActuator,
    DegenerateGeometryError, DesignBalance, Efficiencies, EfficiencyKind, EvaluateError,
    Evaluation, ForceComponents, FrictionCoefficients, GeometrySizes, LeakageFlows, Loads,
    MachineConfiguration, MachineEfficiency, ModelCoefficients, OperatingPoint,
    OperatingPointError, OutOfRange, PerformanceResult, RatedPressureConfig, RatedPressureError,
    ShaftPower, Transmission, Unit, control_flow, evaluate,
};

use twine_core::Model;
use uom::si::f64::{AngularVelocity, Pressure};

use crate::support::{
    oil::{OilDataNotFound, OilPropertyLookup},
    speed_limit::{SpeedLimitBand, SpeedLimitPredictor, speed_limit_band},
};

/// Hydrostatic transmission model.
///
/// Sizes the machine and resolves its oil once, then evaluates operating
/// points through [`Model::call`].
#[derive(Debug, Clone, PartialEq)]
pub struct Hst {
    transmission: Transmission,
    include_loads: bool,
}

impl Hst {
    /// Creates a model that includes structural loads in every evaluation.
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
        Ok(Self {
            transmission: Transmission::new(config, coefficients, oil)?,
            include_loads: true,
        })
    }

    /// Enables or disables the structural load stage.
    #[must_use]
    pub fn with_loads(self, include_loads: bool) -> Self {
        Self {
            include_loads,
            ..self
        }
    }

    /// Replaces the model coefficients and resizes the machine.
    #[must_use]
    pub fn with_coefficients(self, coefficients: ModelCoefficients) -> Self {
        Self {
            transmission: self.transmission.with_coefficients(coefficients),
            ..self
        }
    }

    #[must_use]
    pub fn transmission(&self) -> &Transmission {
        &self.transmission
    }

    #[must_use]
    pub fn config(&self) -> &MachineConfiguration {
        self.transmission.config()
    }

    #[must_use]
    pub fn geometry(&self) -> &GeometrySizes {
        self.transmission.geometry()
    }

    /// Operating point for an engine speed, using the input gear ratio.
    #[must_use]
    pub fn operating_point_at_engine_speed(
        &self,
        engine_speed: AngularVelocity,
        charge_pressure: Pressure,
        discharge_pressure: Pressure,
    ) -> OperatingPoint {
        OperatingPoint {
            pump_speed: self.config().pump_speed(engine_speed),
            charge_pressure,
            discharge_pressure,
        }
    }

    /// Finds the discharge pressure at which the pump absorbs its rated
    /// input power.
    ///
    /// # Errors
    ///
    /// Returns a [`RatedPressureError`] if the inputs are invalid, the rated
    /// power is not bracketed, or the solver fails to converge.
    pub fn rated_pressure(
        &self,
        pump_speed: AngularVelocity,
        charge_pressure: Pressure,
        config: RatedPressureConfig,
    ) -> Result<Evaluation, RatedPressureError> {
        self.transmission
            .rated_pressure(pump_speed, charge_pressure, config)
    }

    /// Speed limit band for the configured displacement.
    ///
    /// # Errors
    ///
    /// Propagates the predictor's error.
    pub fn speed_limit_band<P: SpeedLimitPredictor>(
        &self,
        predictor: &P,
    ) -> Result<SpeedLimitBand, P::Error> {
        speed_limit_band(predictor, self.config().displacement())
    }
}

impl Model for Hst {
    type Input = OperatingPoint;
    type Output = Evaluation;
    type Error = EvaluateError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.transmission.evaluate(input, self.include_loads)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use uom::si::{
        angular_velocity::revolution_per_minute, f64::Volume, power::kilowatt, pressure::bar,
        volume::cubic_centimeter,
    };

    use crate::support::{oil::OilTable, speed_limit::SpeedLimitPrediction};

    use crate::models::hydraulic::hst::core::test_support::{
        reference_config, reference_oil_table, reference_point,
    };

    fn hst() -> Hst {
        Hst::new(
            reference_config(),
            ModelCoefficients::default(),
            &reference_oil_table(),
        )
        .unwrap()
    }

    struct ConstantPredictor;

    impl SpeedLimitPredictor for ConstantPredictor {
        type Error = Infallible;

        fn predict(&self, displacement: Volume) -> Result<SpeedLimitPrediction, Self::Error> {
            assert_relative_eq!(
                displacement.get::<cubic_centimeter>(),
                440.0,
                max_relative = 1e-12
            );
            Ok(SpeedLimitPrediction {
                mean: AngularVelocity::new::<revolution_per_minute>(2400.0),
                uncertainty: AngularVelocity::new::<revolution_per_minute>(150.0),
            })
        }
    }

    #[test]
    fn call_evaluates_reference_point() {
        let result = hst().call(&reference_point()).unwrap();

        assert_relative_eq!(
            result.performance.motor.power.get::<kilowatt>(),
            554.522_546_276_102_7,
            max_relative = 1e-9
        );
        assert!(result.loads.is_some());
    }

    #[test]
    fn loads_can_be_skipped() {
        let with = hst().call(&reference_point()).unwrap();
        let without = hst().with_loads(false).call(&reference_point()).unwrap();

        assert!(without.loads.is_none());
        assert_eq!(with.performance, without.performance);
    }

    #[test]
    fn call_propagates_invalid_point() {
        let err = hst()
            .call(&OperatingPoint::from_rpm_bar(2025.0, 472.0, 25.0))
            .unwrap_err();
        assert!(matches!(err, EvaluateError::InvalidOperatingPoint(_)));
    }

    #[test]
    fn unknown_oil_fails_construction() {
        let result = Hst::new(
            reference_config().with_oil("SAE 10W30", 80),
            ModelCoefficients::default(),
            &OilTable::new(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn engine_speed_goes_through_gear_ratio() {
        let point = hst().operating_point_at_engine_speed(
            AngularVelocity::new::<revolution_per_minute>(2700.0),
            Pressure::new::<bar>(25.0),
            Pressure::new::<bar>(472.0),
        );
        assert_relative_eq!(
            point.pump_speed.get::<revolution_per_minute>(),
            2025.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rated_pressure_through_adapter() {
        let result = hst()
            .rated_pressure(
                AngularVelocity::new::<revolution_per_minute>(2025.0),
                Pressure::new::<bar>(25.0),
                RatedPressureConfig::default(),
            )
            .unwrap();
        assert_relative_eq!(
            result.performance.pump.power.get::<kilowatt>(),
            680.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn speed_limit_band_uses_displacement() {
        let band = hst().speed_limit_band(&ConstantPredictor).unwrap();
        let rpm = |v: AngularVelocity| v.get::<revolution_per_minute>();

        assert_relative_eq!(rpm(band.low), 2250.0, max_relative = 1e-12);
        assert_relative_eq!(rpm(band.nominal), 2400.0, max_relative = 1e-12);
        assert_relative_eq!(rpm(band.high), 2550.0, max_relative = 1e-12);
    }
}
