/// Split of the pistons between the high- and low-pressure kidney ports.
///
/// With an odd piston count the high-pressure side holds the extra piston.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct PistonSplit {
    pub(super) high: f64,
    pub(super) low: f64,
}

impl PistonSplit {
    pub(super) fn new(pistons: u32) -> Self {
        Self {
            high: f64::from(pistons.div_ceil(2)),
            low: f64::from(pistons / 2),
        }
    }

    /// Sum of piston pressures in bar: `Pd·⌈n/2⌉ + Pc·⌊n/2⌋`.
    pub(super) fn pressure_sum(&self, discharge: f64, charge: f64) -> f64 {
        discharge * self.high + charge * self.low
    }
}
