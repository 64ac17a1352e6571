use thiserror::Error;
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Pressure},
    pressure::bar,
};

use crate::support::constraint::{NonNegative, StrictlyPositive};

/// Steady operating point of the transmission.
///
/// Pressures are gauge pressures in the closed loop: `charge_pressure` on the
/// low-pressure side, `discharge_pressure` on the high-pressure side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatingPoint {
    pub pump_speed: AngularVelocity,
    pub charge_pressure: Pressure,
    pub discharge_pressure: Pressure,
}

/// An operating point the model cannot be evaluated at.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum OperatingPointError {
    #[error("pump speed must be strictly positive, got {0:?}")]
    PumpSpeed(AngularVelocity),

    #[error("charge pressure must be finite and non-negative, got {0:?}")]
    ChargePressure(Pressure),

    #[error("discharge pressure {discharge:?} must exceed charge pressure {charge:?}")]
    PressureOrder {
        charge: Pressure,
        discharge: Pressure,
    },
}

impl OperatingPoint {
    /// Creates an operating point from values in rpm and bar.
    #[must_use]
    pub fn from_rpm_bar(pump_speed: f64, charge_pressure: f64, discharge_pressure: f64) -> Self {
        Self {
            pump_speed: AngularVelocity::new::<revolution_per_minute>(pump_speed),
            charge_pressure: Pressure::new::<bar>(charge_pressure),
            discharge_pressure: Pressure::new::<bar>(discharge_pressure),
        }
    }

    /// Checks the preconditions of the model.
    ///
    /// # Errors
    ///
    /// Returns an [`OperatingPointError`] if the pump speed is not strictly
    /// positive and finite, the charge pressure is negative or not finite, or
    /// the discharge pressure does not exceed the charge pressure.
    pub fn validate(&self) -> Result<(), OperatingPointError> {
        if StrictlyPositive::new(self.pump_speed).is_err() || !self.pump_speed.is_finite() {
            return Err(OperatingPointError::PumpSpeed(self.pump_speed));
        }

        if NonNegative::new(self.charge_pressure).is_err() || !self.charge_pressure.is_finite() {
            return Err(OperatingPointError::ChargePressure(self.charge_pressure));
        }

        // Also rejects a NaN or infinite discharge pressure.
        if !(self.discharge_pressure > self.charge_pressure && self.discharge_pressure.is_finite())
        {
            return Err(OperatingPointError::PressureOrder {
                charge: self.charge_pressure,
                discharge: self.discharge_pressure,
            });
        }

        Ok(())
    }

    /// Pressure rise across the pump.
    #[must_use]
    pub fn pressure_differential(&self) -> Pressure {
        self.discharge_pressure - self.charge_pressure
    }

    pub(super) fn speed_rpm(&self) -> f64 {
        self.pump_speed.get::<revolution_per_minute>()
    }

    pub(super) fn charge_bar(&self) -> f64 {
        self.charge_pressure.get::<bar>()
    }

    pub(super) fn discharge_bar(&self) -> f64 {
        self.discharge_pressure.get::<bar>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_point() {
        assert!(OperatingPoint::from_rpm_bar(2025.0, 25.0, 472.0).validate().is_ok());
        assert!(OperatingPoint::from_rpm_bar(1.0, 0.0, 0.5).validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_speed() {
        for speed in [0.0, -100.0, f64::NAN, f64::INFINITY] {
            let err = OperatingPoint::from_rpm_bar(speed, 25.0, 472.0)
                .validate()
                .unwrap_err();
            assert!(matches!(err, OperatingPointError::PumpSpeed(_)));
        }
    }

    #[test]
    fn rejects_discharge_not_above_charge() {
        for discharge in [25.0, 10.0, f64::NAN, f64::INFINITY] {
            let err = OperatingPoint::from_rpm_bar(2025.0, 25.0, discharge)
                .validate()
                .unwrap_err();
            assert!(matches!(err, OperatingPointError::PressureOrder { .. }));
        }
    }

    #[test]
    fn rejects_negative_charge() {
        let err = OperatingPoint::from_rpm_bar(2025.0, -1.0, 472.0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, OperatingPointError::ChargePressure(_)));
    }
}
