use thiserror::Error;
use uom::si::{
    angle::{degree, radian},
    f64::{Angle, AngularVelocity, Power, Volume},
    power::kilowatt,
    volume::cubic_centimeter,
};

use crate::support::constraint::StrictlyPositive;

/// Physical description of an HST built from two identical axial-piston machines.
///
/// Immutable once built. Construct with [`MachineConfiguration::new`] and adjust
/// the remaining settings with the `with_*` builders.
#[derive(Debug, Clone, PartialEq)]
pub struct MachineConfiguration {
    displacement: Volume,
    swash_angle: Angle,
    pistons: u32,
    oil_grade: String,
    oil_temperature: i32,
    input_gear_ratio: f64,
    rated_input_power: Power,
}

/// A machine configuration parameter is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("displacement must be strictly positive, got {0:?}")]
    Displacement(Volume),

    #[error("swash angle must lie strictly between 0 and 90 degrees, got {degrees}")]
    SwashAngle { degrees: f64 },

    #[error("at least 3 pistons are required, got {0}")]
    PistonCount(u32),

    #[error("input gear ratio must be strictly positive, got {0}")]
    InputGearRatio(f64),

    #[error("rated input power must be strictly positive, got {0:?}")]
    RatedInputPower(Power),
}

impl MachineConfiguration {
    /// Oil grade used unless [`with_oil`](Self::with_oil) says otherwise.
    pub const DEFAULT_OIL_GRADE: &'static str = "SAE 15W40";

    /// Oil temperature in °C used unless [`with_oil`](Self::with_oil) says otherwise.
    pub const DEFAULT_OIL_TEMPERATURE: i32 = 100;

    /// Creates a configuration for machines of `displacement` per revolution
    /// at maximum `swash_angle`, each with `pistons` pistons.
    ///
    /// Defaults: `SAE 15W40` oil at 100 °C, input gear ratio 0.75 and
    /// a rated input power of 680 kW.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the displacement is not strictly
    /// positive, the swash angle is outside (0°, 90°), or there are fewer than
    /// three pistons.
    pub fn new(
        displacement: Volume,
        swash_angle: Angle,
        pistons: u32,
    ) -> Result<Self, ConfigurationError> {
        if StrictlyPositive::new(displacement).is_err() {
            return Err(ConfigurationError::Displacement(displacement));
        }

        let degrees = swash_angle.get::<degree>();
        if !(degrees > 0.0 && degrees < 90.0) {
            return Err(ConfigurationError::SwashAngle { degrees });
        }

        if pistons < 3 {
            return Err(ConfigurationError::PistonCount(pistons));
        }

        Ok(Self {
            displacement,
            swash_angle,
            pistons,
            oil_grade: Self::DEFAULT_OIL_GRADE.to_owned(),
            oil_temperature: Self::DEFAULT_OIL_TEMPERATURE,
            input_gear_ratio: 0.75,
            rated_input_power: Power::new::<kilowatt>(680.0),
        })
    }

    /// Selects the working oil by grade and temperature in °C.
    #[must_use]
    pub fn with_oil(mut self, grade: impl Into<String>, temperature: i32) -> Self {
        self.oil_grade = grade.into();
        self.oil_temperature = temperature;
        self
    }

    /// Sets the ratio of pump speed to engine speed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InputGearRatio`] if `ratio` is not strictly positive.
    pub fn with_input_gear_ratio(mut self, ratio: f64) -> Result<Self, ConfigurationError> {
        if StrictlyPositive::new(ratio).is_err() {
            return Err(ConfigurationError::InputGearRatio(ratio));
        }
        self.input_gear_ratio = ratio;
        Ok(self)
    }

    /// Sets the maximum mechanical power the HST takes as input.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::RatedInputPower`] if `power` is not strictly positive.
    pub fn with_rated_input_power(mut self, power: Power) -> Result<Self, ConfigurationError> {
        if StrictlyPositive::new(power).is_err() {
            return Err(ConfigurationError::RatedInputPower(power));
        }
        self.rated_input_power = power;
        Ok(self)
    }

    #[must_use]
    pub fn displacement(&self) -> Volume {
        self.displacement
    }

    #[must_use]
    pub fn swash_angle(&self) -> Angle {
        self.swash_angle
    }

    #[must_use]
    pub fn pistons(&self) -> u32 {
        self.pistons
    }

    #[must_use]
    pub fn oil_grade(&self) -> &str {
        &self.oil_grade
    }

    /// Oil temperature in °C.
    #[must_use]
    pub fn oil_temperature(&self) -> i32 {
        self.oil_temperature
    }

    #[must_use]
    pub fn input_gear_ratio(&self) -> f64 {
        self.input_gear_ratio
    }

    #[must_use]
    pub fn rated_input_power(&self) -> Power {
        self.rated_input_power
    }

    /// Pump speed when the input shaft is driven at `engine_speed`.
    #[must_use]
    pub fn pump_speed(&self, engine_speed: AngularVelocity) -> AngularVelocity {
        engine_speed * self.input_gear_ratio
    }

    pub(super) fn displacement_cc(&self) -> f64 {
        self.displacement.get::<cubic_centimeter>()
    }

    pub(super) fn swash_degrees(&self) -> f64 {
        self.swash_angle.get::<degree>()
    }

    pub(super) fn swash_radians(&self) -> f64 {
        self.swash_angle.get::<radian>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::angular_velocity::revolution_per_minute;

    fn displacement() -> Volume {
        Volume::new::<cubic_centimeter>(440.0)
    }

    #[test]
    fn defaults() {
        let config =
            MachineConfiguration::new(displacement(), Angle::new::<degree>(18.0), 9).unwrap();

        assert_eq!(config.pistons(), 9);
        assert_eq!(config.oil_grade(), "SAE 15W40");
        assert_eq!(config.oil_temperature(), 100);
        assert_relative_eq!(config.input_gear_ratio(), 0.75);
        assert_relative_eq!(config.rated_input_power().get::<kilowatt>(), 680.0);
        assert_relative_eq!(config.displacement_cc(), 440.0, max_relative = 1e-12);
        assert_relative_eq!(config.swash_degrees(), 18.0, max_relative = 1e-12);
    }

    #[test]
    fn swash_angle_must_be_inside_open_interval() {
        for degrees in [0.0, -5.0, 90.0, 120.0, f64::NAN] {
            let err = MachineConfiguration::new(displacement(), Angle::new::<degree>(degrees), 9)
                .unwrap_err();
            assert!(matches!(err, ConfigurationError::SwashAngle { .. }));
        }
    }

    #[test]
    fn needs_three_pistons() {
        let err =
            MachineConfiguration::new(displacement(), Angle::new::<degree>(18.0), 2).unwrap_err();
        assert_eq!(err, ConfigurationError::PistonCount(2));

        assert!(MachineConfiguration::new(displacement(), Angle::new::<degree>(18.0), 3).is_ok());
    }

    #[test]
    fn displacement_must_be_positive() {
        let err = MachineConfiguration::new(
            Volume::new::<cubic_centimeter>(0.0),
            Angle::new::<degree>(18.0),
            9,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigurationError::Displacement(_)));
    }

    #[test]
    fn builders_validate() {
        let config =
            MachineConfiguration::new(displacement(), Angle::new::<degree>(18.0), 9).unwrap();

        assert!(config.clone().with_input_gear_ratio(0.0).is_err());
        assert!(
            config
                .clone()
                .with_rated_input_power(Power::new::<kilowatt>(-1.0))
                .is_err()
        );

        let config = config.with_oil("SAE 30", 80).with_input_gear_ratio(0.5).unwrap();
        assert_eq!(config.oil_grade(), "SAE 30");
        assert_eq!(config.oil_temperature(), 80);

        let pump = config.pump_speed(AngularVelocity::new::<revolution_per_minute>(2700.0));
        assert_relative_eq!(
            pump.get::<revolution_per_minute>(),
            1350.0,
            max_relative = 1e-12
        );
    }
}
