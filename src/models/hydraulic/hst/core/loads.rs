use uom::si::{
    area::square_meter,
    f64::{Force, Torque},
    force::kilonewton,
};

use super::{GeometrySizes, OperatingPoint, porting::PistonSplit};

/// Axial (`x`) and transverse (`z`) components of a swashplate reaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceComponents {
    pub x: Force,
    pub z: Force,
}

/// Steady pressure-induced structural loads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loads {
    /// Radial load on the pump shaft.
    pub shaft_radial: Force,
    /// Swashplate reaction of the pistons on the high-pressure side.
    pub swashplate_high: ForceComponents,
    /// Swashplate reaction of the pistons on the low-pressure side.
    pub swashplate_low: ForceComponents,
    /// Motor bearing load from the high-pressure pistons.
    pub motor_bearing_high: Force,
    /// Motor bearing load from the low-pressure pistons.
    pub motor_bearing_low: Force,
    pub shaft_torque: Torque,
}

pub(super) fn loads(
    pistons: u32,
    swash_radians: f64,
    geometry: &GeometrySizes,
    point: &OperatingPoint,
    pump_torque: Torque,
) -> Loads {
    let split = PistonSplit::new(pistons);
    let (tan, cos) = (swash_radians.tan(), swash_radians.cos());
    let area = geometry.piston_area.get::<square_meter>();
    let (discharge, charge) = (point.discharge_bar(), point.charge_bar());

    let shaft_radial = split.pressure_sum(discharge, charge) * 1e5 * area * tan / 1e3;
    let high_x = split.high * discharge * 1e5 * area / 1e3;
    let low_x = split.low * charge * 1e5 * area / 1e3;
    let motor_high = split.high * discharge * 1e5 * area / cos / 1e3;
    let motor_low = split.low * charge * 1e5 * area / cos / 1e3;

    let kn = Force::new::<kilonewton>;
    Loads {
        shaft_radial: kn(shaft_radial),
        swashplate_high: ForceComponents {
            x: kn(high_x),
            z: kn(high_x * tan),
        },
        swashplate_low: ForceComponents {
            x: kn(low_x),
            z: kn(low_x * tan),
        },
        motor_bearing_high: kn(motor_high),
        motor_bearing_low: kn(motor_low),
        shaft_torque: pump_torque,
    }
}
