//! Volumetric, mechanical and total efficiencies.
//!
//! Volumetric losses come from leakage (both machines) and oil compression
//! (pump only). Mechanical losses follow an empirical friction model in the
//! duty parameter `μ·n / (β·Δp)`, with μ in mPa·s, n in rpm, β in degrees
//! and Δp in bar.
//!
//! All efficiencies are percentages. They are not clamped: extreme operating
//! points can push them outside [0, 100] %, which
//! [`Efficiencies::out_of_range`] reports.

use tracing::warn;
use uom::si::{
    dynamic_viscosity::millipascal_second, pressure::bar, volume_rate::cubic_meter_per_second,
};

use crate::support::oil::OilProperties;

use super::{FrictionCoefficients, LeakageFlows, OperatingPoint};

/// Efficiencies of one machine or of the whole transmission, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineEfficiency {
    pub volumetric: f64,
    pub mechanical: f64,
    pub total: f64,
}

/// Efficiencies of the pump, the motor and the transmission as a whole.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Efficiencies {
    pub pump: MachineEfficiency,
    pub motor: MachineEfficiency,
    pub hst: MachineEfficiency,
}

/// Which unit an efficiency belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Pump,
    Motor,
    Hst,
}

/// Which kind of efficiency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EfficiencyKind {
    Volumetric,
    Mechanical,
    Total,
}

/// An efficiency outside [0, 100] %.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutOfRange {
    pub unit: Unit,
    pub kind: EfficiencyKind,
    pub value: f64,
}

impl Efficiencies {
    /// Lists every efficiency that is not within [0, 100] % (including `NaN`).
    #[must_use]
    pub fn out_of_range(&self) -> Vec<OutOfRange> {
        [
            (Unit::Pump, &self.pump),
            (Unit::Motor, &self.motor),
            (Unit::Hst, &self.hst),
        ]
        .into_iter()
        .flat_map(|(unit, eff)| {
            [
                (EfficiencyKind::Volumetric, eff.volumetric),
                (EfficiencyKind::Mechanical, eff.mechanical),
                (EfficiencyKind::Total, eff.total),
            ]
            .into_iter()
            .filter(|&(_, value)| !(0.0..=100.0).contains(&value))
            .map(move |(kind, value)| OutOfRange { unit, kind, value })
        })
        .collect()
    }

    /// Returns `true` if every efficiency lies within [0, 100] %.
    #[must_use]
    pub fn is_physical(&self) -> bool {
        self.out_of_range().is_empty()
    }
}

/// Computes the efficiencies for one operating point.
///
/// The operating point must already be validated; in particular the discharge
/// pressure must exceed the charge pressure.
pub(super) fn efficiencies(
    displacement_cc: f64,
    swash_degrees: f64,
    leakage: &LeakageFlows,
    oil: &OilProperties,
    point: &OperatingPoint,
    friction: &FrictionCoefficients,
) -> Efficiencies {
    let speed = point.speed_rpm();
    let delta_p = point.discharge_bar() - point.charge_bar();
    let leak = leakage.total.get::<cubic_meter_per_second>();
    let theoretical_flow = speed * displacement_cc / 6e7;

    let vol_pump =
        (1.0 - delta_p / oil.bulk_modulus.get::<bar>() - leak / theoretical_flow) * 100.0;
    let vol_motor = (1.0 - leak / theoretical_flow) * 100.0;
    let vol_hst = vol_pump * vol_motor / 100.0;

    let mu = oil.dynamic_viscosity.get::<millipascal_second>();
    let load = swash_degrees * delta_p * 1e5 * 1e-5;
    let FrictionCoefficients {
        a,
        b_pump,
        b_motor,
        c_pump,
        c_motor,
        d,
    } = *friction;

    let mech_pump = mechanical(a, b_pump, c_pump, d, mu * speed, load);
    let mech_motor = mechanical(a, b_motor, c_motor, d, mu * speed * vol_hst / 100.0, load);
    let mech_hst = mech_pump * mech_motor / 100.0;

    let total_pump = vol_pump * mech_pump / 100.0;
    let total_motor = vol_motor * mech_motor / 100.0;
    let total_hst = total_pump * total_motor / 100.0;

    let result = Efficiencies {
        pump: MachineEfficiency {
            volumetric: vol_pump,
            mechanical: mech_pump,
            total: total_pump,
        },
        motor: MachineEfficiency {
            volumetric: vol_motor,
            mechanical: mech_motor,
            total: total_motor,
        },
        hst: MachineEfficiency {
            volumetric: vol_hst,
            mechanical: mech_hst,
            total: total_hst,
        },
    };

    for OutOfRange { unit, kind, value } in result.out_of_range() {
        warn!(?unit, ?kind, value, "efficiency outside [0, 100] %");
    }

    result
}

/// Empirical mechanical efficiency in percent.
///
/// `viscous_speed` is `μ·n` and `load` is `β·Δp`.
fn mechanical(a: f64, b: f64, c: f64, d: f64, viscous_speed: f64, load: f64) -> f64 {
    let duty = viscous_speed / load;
    (1.0 - a * (-b * duty).exp() - c * duty.sqrt() - d / load) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::f64::VolumeRate;

    use crate::models::hydraulic::hst::core::test_support::reference_oil;

    fn leakage_of(total: f64) -> LeakageFlows {
        let q = VolumeRate::new::<cubic_meter_per_second>(total);
        LeakageFlows {
            block: q,
            shoes: VolumeRate::new::<cubic_meter_per_second>(0.0),
            pistons: VolumeRate::new::<cubic_meter_per_second>(0.0),
            total: q,
        }
    }

    fn at(speed: f64, charge: f64, discharge: f64, leak: f64) -> Efficiencies {
        efficiencies(
            440.0,
            18.0,
            &leakage_of(leak),
            &reference_oil(),
            &OperatingPoint::from_rpm_bar(speed, charge, discharge),
            &FrictionCoefficients::default(),
        )
    }

    #[test]
    fn reference_efficiencies() {
        let eff = at(2025.0, 25.0, 472.0, 5.538_518_736_518_851e-4);

        assert_relative_eq!(eff.pump.volumetric, 93.290_357_753_185_96, max_relative = 1e-9);
        assert_relative_eq!(eff.motor.volumetric, 96.270_357_753_185_96, max_relative = 1e-9);
        assert_relative_eq!(eff.pump.mechanical, 97.340_136_119_672_45, max_relative = 1e-9);
        assert_relative_eq!(eff.motor.mechanical, 93.015_620_542_256_7, max_relative = 1e-9);
        assert_relative_eq!(eff.hst.total, 81.316_219_820_792_88, max_relative = 1e-9);
        assert!(eff.is_physical());
    }

    #[test]
    fn compressibility_only_affects_pump() {
        let eff = at(2025.0, 25.0, 472.0, 0.0);

        assert_relative_eq!(eff.motor.volumetric, 100.0);
        assert_relative_eq!(eff.pump.volumetric, (1.0 - 447.0 / 15_000.0) * 100.0);
    }

    #[test]
    fn low_pressure_differential_is_reported_not_clamped() {
        // β·Δp is small enough for the load term alone to exceed 100 %.
        let eff = at(100.0, 25.0, 30.0, 0.0);

        assert!(eff.pump.mechanical < 0.0);
        let report = eff.out_of_range();
        assert!(report.contains(&OutOfRange {
            unit: Unit::Pump,
            kind: EfficiencyKind::Mechanical,
            value: eff.pump.mechanical,
        }));
        assert!(!eff.is_physical());
    }

    proptest! {
        #[test]
        fn combined_efficiencies_are_products(
            speed in 100.0_f64..5000.0,
            charge in 10.0_f64..50.0,
            rise in 1.0_f64..950.0,
            leak in 0.0_f64..1e-4,
        ) {
            let eff = at(speed, charge, charge + rise, leak);

            prop_assert_eq!(eff.hst.volumetric, eff.pump.volumetric * eff.motor.volumetric / 100.0);
            prop_assert_eq!(eff.hst.mechanical, eff.pump.mechanical * eff.motor.mechanical / 100.0);
            prop_assert_eq!(eff.hst.total, eff.pump.total * eff.motor.total / 100.0);
            prop_assert_eq!(eff.pump.total, eff.pump.volumetric * eff.pump.mechanical / 100.0);
            prop_assert_eq!(eff.motor.total, eff.motor.volumetric * eff.motor.mechanical / 100.0);
        }
    }
}
