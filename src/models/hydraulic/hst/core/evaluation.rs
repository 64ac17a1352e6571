use tracing::trace;
use uom::si::{f64::VolumeRate, volume_rate::cubic_meter_per_second};

use crate::support::oil::OilProperties;

use super::{
    ChargeFlow, Efficiencies, EvaluateError, GeometrySizes, LeakageFlows, Loads,
    MachineConfiguration, ModelCoefficients, OperatingPoint, PerformanceResult, control_flow,
    efficiency, leakage, loads, performance,
};

/// Results of evaluating the transmission at one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub operating_point: OperatingPoint,
    pub geometry: GeometrySizes,
    /// Leakage of one machine. Pump and motor are identical.
    pub leakage: LeakageFlows,
    pub efficiencies: Efficiencies,
    pub performance: PerformanceResult,
    /// Structural loads, if requested.
    pub loads: Option<Loads>,
    pub control_flow: VolumeRate,
    pub charge_flow: ChargeFlow,
}

/// Runs the stage chain for a prepared machine.
///
/// The operating point is validated before any stage runs.
pub(super) fn evaluate(
    config: &MachineConfiguration,
    coefficients: &ModelCoefficients,
    geometry: &GeometrySizes,
    oil: &OilProperties,
    point: &OperatingPoint,
    include_loads: bool,
) -> Result<Evaluation, EvaluateError> {
    point.validate()?;

    let leakage = leakage::leakage(
        config.pistons(),
        geometry,
        oil,
        point,
        &coefficients.clearances,
    )?;
    trace!(
        total = leakage.total.get::<cubic_meter_per_second>(),
        "leakage"
    );

    let efficiencies = efficiency::efficiencies(
        config.displacement_cc(),
        config.swash_degrees(),
        &leakage,
        oil,
        point,
        &coefficients.friction,
    );

    let performance = performance::performance(config.displacement_cc(), &efficiencies, point);

    let loads = include_loads.then(|| {
        loads::loads(
            config.pistons(),
            config.swash_radians(),
            geometry,
            point,
            performance.pump.torque,
        )
    });

    let control_flow = control_flow();

    Ok(Evaluation {
        operating_point: *point,
        geometry: *geometry,
        leakage,
        efficiencies,
        performance,
        loads,
        control_flow,
        charge_flow: ChargeFlow::new(&leakage, control_flow),
    })
}
