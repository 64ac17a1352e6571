//! Internal leakage through the lubricating films.
//!
//! Three laminar leakage paths are modeled, each driven by the mean piston
//! pressure `(Pd·⌈n/2⌉ + Pc·⌊n/2⌋)/n`:
//!
//! - radial flow across the two valve plate lands of the cylinder block,
//! - radial flow across the slipper shoe lands,
//! - annular flow along each piston, whose film length changes with the
//!   piston's position in its stroke.

use std::f64::consts::PI;

use uom::si::{
    dynamic_viscosity::millipascal_second, f64::VolumeRate, length::meter,
    volume_rate::cubic_meter_per_second,
};

use crate::support::oil::OilProperties;

use super::{
    Clearances, DegenerateGeometryError, GeometrySizes, OperatingPoint, porting::PistonSplit,
};

/// Leakage flow of one machine, by path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeakageFlows {
    /// Across both valve plate lands.
    pub block: VolumeRate,
    /// Across all slipper shoes.
    pub shoes: VolumeRate,
    /// Along all pistons.
    pub pistons: VolumeRate,
    pub total: VolumeRate,
}

/// Computes the leakage flows of one machine.
///
/// # Errors
///
/// Returns a [`DegenerateGeometryError`] if a sealing band has collapsed.
pub(super) fn leakage(
    pistons: u32,
    geometry: &GeometrySizes,
    oil: &OilProperties,
    point: &OperatingPoint,
    clearances: &Clearances,
) -> Result<LeakageFlows, DegenerateGeometryError> {
    let [ln_block_outer, ln_block_inner, ln_shoe] = geometry.check_bands()?;

    let n = f64::from(pistons);
    let mu = oil.dynamic_viscosity.get::<millipascal_second>() * 1e-3;
    let mean_pressure = PistonSplit::new(pistons)
        .pressure_sum(point.discharge_bar(), point.charge_bar())
        * 1e5
        / n;

    let h1 = clearances.block.get::<meter>();
    let h2 = clearances.shoe.get::<meter>();
    let h3 = clearances.piston.get::<meter>();

    let block = PI * h1.powi(3) * mean_pressure * (1.0 / ln_block_outer + 1.0 / ln_block_inner)
        / (6.0 * mu);

    let shoes = n * PI * h2.powi(3) * mean_pressure / (6.0 * mu * ln_shoe);

    let d = geometry.piston_diameter.get::<meter>();
    let engagement = geometry.min_engagement.get::<meter>();
    let stroke = geometry.stroke.get::<meter>();
    let eccentricity = 1.0 + 1.5 * clearances.eccentricity.powi(3);
    let along_pistons: f64 = (0..pistons)
        .map(|i| {
            let film_length = engagement + stroke * (PI * f64::from(i) / n).sin();
            PI * d * h3.powi(3) * mean_pressure * eccentricity / film_length / (12.0 * mu)
        })
        .sum();

    let flow = VolumeRate::new::<cubic_meter_per_second>;
    Ok(LeakageFlows {
        block: flow(block),
        shoes: flow(shoes),
        pistons: flow(along_pistons),
        total: flow(block + shoes + along_pistons),
    })
}
