use uom::si::{
    angle::degree,
    diffusion_coefficient::centistokes,
    dynamic_viscosity::millipascal_second,
    f64::{Angle, DiffusionCoefficient, DynamicViscosity, MassDensity, Pressure, Volume},
    mass_density::kilogram_per_cubic_meter,
    pressure::bar,
    volume::cubic_centimeter,
};

use crate::support::oil::{OilProperties, OilTable};

use super::{MachineConfiguration, OperatingPoint};

/// 440 cc/rev, 18° swash, 9 pistons, `SAE 15W40` at 100 °C.
pub(crate) fn reference_config() -> MachineConfiguration {
    MachineConfiguration::new(
        Volume::new::<cubic_centimeter>(440.0),
        Angle::new::<degree>(18.0),
        9,
    )
    .unwrap()
}

/// `SAE 15W40` at 100 °C.
pub(crate) fn reference_oil() -> OilProperties {
    OilProperties::new(
        DynamicViscosity::new::<millipascal_second>(11.52),
        DiffusionCoefficient::new::<centistokes>(14.2),
        MassDensity::new::<kilogram_per_cubic_meter>(811.3),
        Pressure::new::<bar>(15_000.0),
    )
    .unwrap()
}

pub(crate) fn reference_oil_table() -> OilTable {
    OilTable::new().with_entry("SAE 15W40", 100, reference_oil())
}

/// 2025 rpm, 25 bar charge, 472 bar discharge.
pub(crate) fn reference_point() -> OperatingPoint {
    OperatingPoint::from_rpm_bar(2025.0, 25.0, 472.0)
}
