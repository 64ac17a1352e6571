use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Power, Pressure},
    power::kilowatt,
    pressure::bar,
};

/// Solver configuration for the rated-power discharge pressure search.
#[derive(Debug, Clone, Copy)]
pub struct RatedPressureConfig {
    /// Maximum iteration count for the bisection solve.
    pub max_iters: usize,

    /// Lowest and highest discharge pressure searched.
    pub bracket: [Pressure; 2],

    /// Absolute tolerance for the discharge pressure search variable.
    pub pressure_tol: Pressure,

    /// Absolute tolerance for the power residual (pump - rated).
    pub power_tol: Power,
}

impl Default for RatedPressureConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            bracket: [Pressure::new::<bar>(100.0), Pressure::new::<bar>(1000.0)],
            pressure_tol: Pressure::new::<bar>(1e-9),
            power_tol: Power::new::<kilowatt>(1e-9),
        }
    }
}

impl RatedPressureConfig {
    /// Converts this configuration into a bisection solver configuration.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.pressure_tol.get::<bar>(),
            x_rel_tol: 0.0,
            residual_tol: self.power_tol.get::<kilowatt>(),
        }
    }

    pub(super) fn bracket_bar(&self) -> [f64; 2] {
        self.bracket.map(|p| p.get::<bar>())
    }
}
