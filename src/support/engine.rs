//! Engine full-load curves.
//!
//! An HST is sized against the prime mover that drives it.
//! This module carries full-load curves (speed, torque, power) and the
//! governor pivot speed for a small catalog of reference engines.
//! The curves are reference data only; the HST model does not consume them.

use thiserror::Error;
use uom::si::{
    angular_velocity::revolution_per_minute,
    f64::{AngularVelocity, Power, Torque},
    power::kilowatt,
    torque::newton_meter,
};

/// Full-load curve of an engine.
///
/// The three curves are sampled at the same points, so index `i` of
/// [`speed`](Self::speed), [`torque`](Self::torque) and [`power`](Self::power)
/// describe the same operating point.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineCurve {
    speed: Vec<AngularVelocity>,
    torque: Vec<Torque>,
    power: Vec<Power>,
    pivot_speed: AngularVelocity,
}

/// Engine curve samples do not line up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("curve lengths differ: {speed} speeds, {torque} torques, {power} powers")]
pub struct CurveLengthMismatch {
    pub speed: usize,
    pub torque: usize,
    pub power: usize,
}

impl EngineCurve {
    /// Creates a curve from matched samples.
    ///
    /// # Errors
    ///
    /// Returns [`CurveLengthMismatch`] if the three curves have different lengths.
    pub fn new(
        speed: Vec<AngularVelocity>,
        torque: Vec<Torque>,
        power: Vec<Power>,
        pivot_speed: AngularVelocity,
    ) -> Result<Self, CurveLengthMismatch> {
        if speed.len() != torque.len() || speed.len() != power.len() {
            return Err(CurveLengthMismatch {
                speed: speed.len(),
                torque: torque.len(),
                power: power.len(),
            });
        }

        Ok(Self {
            speed,
            torque,
            power,
            pivot_speed,
        })
    }

    /// Creates a curve from samples in rpm, N·m and kW.
    ///
    /// # Errors
    ///
    /// Returns [`CurveLengthMismatch`] if the three slices have different lengths.
    pub fn from_rpm_nm_kw(
        speed: &[f64],
        torque: &[f64],
        power: &[f64],
        pivot_speed: f64,
    ) -> Result<Self, CurveLengthMismatch> {
        Self::new(
            speed
                .iter()
                .map(|&n| AngularVelocity::new::<revolution_per_minute>(n))
                .collect(),
            torque
                .iter()
                .map(|&t| Torque::new::<newton_meter>(t))
                .collect(),
            power.iter().map(|&p| Power::new::<kilowatt>(p)).collect(),
            AngularVelocity::new::<revolution_per_minute>(pivot_speed),
        )
    }

    #[must_use]
    pub fn speed(&self) -> &[AngularVelocity] {
        &self.speed
    }

    #[must_use]
    pub fn torque(&self) -> &[Torque] {
        &self.torque
    }

    #[must_use]
    pub fn power(&self) -> &[Power] {
        &self.power
    }

    /// Speed at which the governor starts to cut fuel.
    #[must_use]
    pub fn pivot_speed(&self) -> AngularVelocity {
        self.pivot_speed
    }

    /// Returns the sample with the highest power as `(speed, power)`.
    ///
    /// Returns `None` for an empty curve.
    #[must_use]
    pub fn peak_power(&self) -> Option<(AngularVelocity, Power)> {
        self.speed
            .iter()
            .zip(&self.power)
            .max_by(|(_, a), (_, b)| a.value.total_cmp(&b.value))
            .map(|(&n, &p)| (n, p))
    }
}

/// The catalog has no engine with the requested name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown engine {0:?}")]
pub struct EngineNotFound(pub String);

/// Resolves an engine name to its full-load curve.
pub trait EngineCatalog {
    /// Returns the curve for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineNotFound`] if the catalog has no such engine.
    fn engine(&self, name: &str) -> Result<EngineCurve, EngineNotFound>;
}

/// Built-in reference engines `engine_1` through `engine_4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinEngines;

impl BuiltinEngines {
    /// Names of the built-in engines.
    pub const NAMES: [&'static str; 4] = ["engine_1", "engine_2", "engine_3", "engine_4"];
}

impl EngineCatalog for BuiltinEngines {
    fn engine(&self, name: &str) -> Result<EngineCurve, EngineNotFound> {
        match name {
            "engine_1" => Ok(ENGINE_1.curve()),
            "engine_2" => Ok(ENGINE_2.curve()),
            "engine_3" => Ok(ENGINE_3.curve()),
            "engine_4" => Ok(ENGINE_4.curve()),
            _ => Err(EngineNotFound(name.to_owned())),
        }
    }
}

/// Full-load samples in rpm, N·m and kW.
///
/// The sample count is part of the type, so the three curves always line up.
struct EngineTable<const N: usize> {
    speed: [f64; N],
    torque: [f64; N],
    power: [f64; N],
    pivot_speed: f64,
}

impl<const N: usize> EngineTable<N> {
    fn curve(&self) -> EngineCurve {
        EngineCurve {
            speed: self
                .speed
                .map(AngularVelocity::new::<revolution_per_minute>)
                .to_vec(),
            torque: self.torque.map(Torque::new::<newton_meter>).to_vec(),
            power: self.power.map(Power::new::<kilowatt>).to_vec(),
            pivot_speed: AngularVelocity::new::<revolution_per_minute>(self.pivot_speed),
        }
    }
}

const ENGINE_1: EngineTable<21> = EngineTable {
    speed: [
        1000.0, 1100.0, 1200.0, 1300.0, 1400.0, 1500.0, 1600.0, 1700.0, 1800.0, 1900.0, 2000.0,
        2100.0, 2200.0, 2300.0, 2400.0, 2500.0, 2600.0, 2700.0, 2800.0, 2900.0, 3000.0,
    ],
    torque: [
        1350.0, 1450.0, 1550.0, 1650.0, 1800.0, 1975.0, 2200.0, 2450.0, 2750.0, 3100.0, 3100.0,
        3100.0, 3100.0, 3022.0, 2944.0, 2849.0, 2757.0, 2654.0, 2200.0, 1800.0, 0.0,
    ],
    power: [
        141.372, 167.028, 194.779, 224.624, 263.894, 310.232, 368.614, 436.158, 518.363, 616.799,
        649.262, 681.726, 714.189, 727.865, 739.908, 745.866, 750.652, 750.401, 645.074, 546.637,
        0.0,
    ],
    pivot_speed: 2700.0,
};

const ENGINE_2: EngineTable<19> = EngineTable {
    speed: [
        600.0, 700.0, 800.0, 900.0, 1000.0, 1100.0, 1200.0, 1300.0, 1400.0, 1500.0, 1600.0, 1700.0,
        1800.0, 1900.0, 2000.0, 2100.0, 2200.0, 2300.0, 2400.0,
    ],
    torque: [
        1000.0, 1100.0, 1450.0, 1750.0, 2100.0, 2400.0, 2600.0, 2950.0, 3100.0, 3300.0, 3400.0,
        3500.0, 3400.0, 3300.0, 3200.0, 3000.0, 2800.0, 2600.0, 0.0,
    ],
    power: [
        62.8319, 80.634, 121.475, 164.934, 219.911, 276.46, 326.726, 401.6, 454.484, 518.363,
        569.675, 623.083, 640.885, 656.593, 670.206, 659.734, 645.074, 626.224, 0.0,
    ],
    pivot_speed: 2200.0,
};

// The 2100 rpm torque is derived from the tabulated power (994 kW).
const ENGINE_3: EngineTable<15> = EngineTable {
    speed: [
        1800.0, 1900.0, 2000.0, 2100.0, 2200.0, 2300.0, 2400.0, 2500.0, 2600.0, 2700.0, 2800.0,
        2900.0, 3000.0, 3100.0, 3200.0,
    ],
    torque: [
        4270.0, 4458.0, 4558.0, 4520.0, 4439.0, 4350.0, 4250.0, 4144.0, 4033.0, 3891.0, 3703.0,
        3459.0, 3183.0, 2817.0, 871.0,
    ],
    power: [
        805.0, 887.0, 955.0, 994.0, 1023.0, 1048.0, 1068.0, 1085.0, 1098.0, 1100.0, 1086.0, 1050.0,
        1000.0, 914.0, 292.0,
    ],
    pivot_speed: 2700.0,
};

const ENGINE_4: EngineTable<21> = EngineTable {
    speed: [
        1000.0, 1100.0, 1200.0, 1300.0, 1400.0, 1500.0, 1600.0, 1700.0, 1800.0, 1900.0, 2000.0,
        2100.0, 2200.0, 2300.0, 2400.0, 2500.0, 2600.0, 2700.0, 2800.0, 2900.0, 3000.0,
    ],
    torque: [
        1750.0, 1850.0, 2000.0, 2200.0, 2500.0, 2850.0, 3250.0, 3675.0, 4125.0, 4600.0, 4600.0,
        4600.0, 4600.0, 4460.0, 4320.0, 4180.0, 4040.0, 3890.0, 3300.0, 2700.0, 0.0,
    ],
    power: [
        183.0, 213.0, 251.0, 299.0, 366.0, 448.0, 544.0, 654.0, 777.0, 915.0, 963.0, 1011.0, 1059.0,
        1074.0, 1085.0, 1094.0, 1099.0, 1099.0, 967.0, 820.0, 0.0,
    ],
    pivot_speed: 2700.0,
};
