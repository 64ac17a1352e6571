use std::f64::consts::PI;

use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Power, Torque},
    power::kilowatt,
    torque::newton_meter,
};

use super::{Efficiencies, OperatingPoint};

/// Speed, torque and power at a shaft.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaftPower {
    pub speed: AngularVelocity,
    pub torque: Torque,
    pub power: Power,
}

/// Input (pump) and output (motor) shaft conditions of the transmission.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceResult {
    pub pump: ShaftPower,
    pub motor: ShaftPower,
    /// Pump minus motor, per quantity.
    pub delta: ShaftPower,
}

pub(super) fn performance(
    displacement_cc: f64,
    efficiencies: &Efficiencies,
    point: &OperatingPoint,
) -> PerformanceResult {
    let speed_pump = point.speed_rpm();
    let delta_p = point.discharge_bar() - point.charge_bar();

    let torque_pump =
        delta_p * 1e5 * displacement_cc * 1e-6 / (2.0 * PI * efficiencies.pump.mechanical / 100.0);
    let torque_motor = torque_pump * efficiencies.hst.mechanical / 100.0;
    let power_pump = torque_pump * speed_pump * PI / 30.0 * 1e-3;
    let power_motor = power_pump * efficiencies.hst.total / 100.0;
    let speed_motor = speed_pump * efficiencies.hst.volumetric / 100.0;

    let shaft = |speed: f64, torque: f64, power: f64| ShaftPower {
        speed: AngularVelocity::new::<revolution_per_minute>(speed),
        torque: Torque::new::<newton_meter>(torque),
        power: Power::new::<kilowatt>(power),
    };

    PerformanceResult {
        pump: shaft(speed_pump, torque_pump, power_pump),
        motor: shaft(speed_motor, torque_motor, power_motor),
        delta: shaft(
            speed_pump - speed_motor,
            torque_pump - torque_motor,
            power_pump - power_motor,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::models::hydraulic::hst::core::MachineEfficiency;

    fn efficiencies(vol: f64, mech: f64) -> Efficiencies {
        let machine = MachineEfficiency {
            volumetric: vol,
            mechanical: mech,
            total: vol * mech / 100.0,
        };
        let hst = MachineEfficiency {
            volumetric: vol * vol / 100.0,
            mechanical: mech * mech / 100.0,
            total: machine.total * machine.total / 100.0,
        };
        Efficiencies {
            pump: machine,
            motor: machine,
            hst,
        }
    }

    #[test]
    fn lossless_transmission() {
        let result = performance(
            440.0,
            &efficiencies(100.0, 100.0),
            &OperatingPoint::from_rpm_bar(2025.0, 25.0, 472.0),
        );

        // T = Δp·V/2π
        let torque = 447e5 * 440e-6 / (2.0 * PI);
        assert_relative_eq!(result.pump.torque.get::<newton_meter>(), torque, max_relative = 1e-12);
        assert_relative_eq!(
            result.motor.torque.get::<newton_meter>(),
            torque,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.motor.speed.get::<revolution_per_minute>(),
            2025.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(result.delta.power.get::<kilowatt>(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn delta_is_pump_minus_motor() {
        let result = performance(
            440.0,
            &efficiencies(95.0, 92.0),
            &OperatingPoint::from_rpm_bar(2025.0, 25.0, 472.0),
        );

        assert_relative_eq!(
            result.delta.torque.get::<newton_meter>(),
            (result.pump.torque - result.motor.torque).get::<newton_meter>(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            result.delta.speed.get::<revolution_per_minute>(),
            (result.pump.speed - result.motor.speed).get::<revolution_per_minute>(),
            max_relative = 1e-9
        );
        assert_relative_eq!(
            result.motor.power.get::<kilowatt>(),
            result.pump.power.get::<kilowatt>() * 0.95 * 0.92 * 0.95 * 0.92,
            max_relative = 1e-12
        );
    }
}
