//! Charge pump flow requirements.
//!
//! The charge pump makes up the leakage of both machines and supplies the
//! swashplate control actuator.

use std::f64::consts::PI;

use uom::si::{
    f64::{Length, Time, VolumeRate},
    length::meter,
    time::second,
    volume_rate::cubic_meter_per_second,
};

use super::LeakageFlows;

/// Swashplate control actuator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlActuator {
    pub piston_diameter: Length,
    pub stroke: Length,
    /// Time allowed to move the swashplate from full stroke to neutral.
    pub destroke_time: Time,
}

impl Default for ControlActuator {
    fn default() -> Self {
        Self {
            piston_diameter: Length::new::<meter>(72.08e-3),
            stroke: Length::new::<meter>(144.26e-3),
            destroke_time: Time::new::<second>(0.8),
        }
    }
}

impl ControlActuator {
    /// Flow needed to destroke the actuator within its destroke time.
    ///
    /// Destroking from full displacement to neutral moves the piston through
    /// half its stroke.
    #[must_use]
    pub fn required_flow(&self) -> VolumeRate {
        let d = self.piston_diameter.get::<meter>();
        let stroke = self.stroke.get::<meter>();
        let time = self.destroke_time.get::<second>();
        VolumeRate::new::<cubic_meter_per_second>(PI * d.powi(2) / 4.0 * stroke / 2.0 / time)
    }
}

/// Control flow of the standard actuator.
///
/// Independent of the machine configuration and the operating point.
#[must_use]
pub fn control_flow() -> VolumeRate {
    ControlActuator::default().required_flow()
}

/// Flow the charge pump must deliver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeFlow {
    /// Leakage make-up for pump and motor.
    pub continuous: VolumeRate,
    /// Control actuator demand.
    pub control: VolumeRate,
    /// Continuous flow plus control flow, needed while destroking.
    pub transient: VolumeRate,
}

impl ChargeFlow {
    /// Combines the leakage of one machine (the other is identical) with the control flow.
    #[must_use]
    pub fn new(leakage: &LeakageFlows, control: VolumeRate) -> Self {
        let continuous = leakage.total * 2.0;
        Self {
            continuous,
            control,
            transient: continuous + control,
        }
    }
}
