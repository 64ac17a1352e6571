//! Calibration coefficients for the HST model.
//!
//! Every empirical constant the model uses lives here, grouped by the stage
//! that consumes it, so sensitivity studies only change values, not code.

use uom::si::{f64::Length, length::micrometer};

/// Design balance ratios that size the pumping group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignBalance {
    /// Piston diameter to pitch circle spacing ratio.
    pub k1: f64,
    /// Hydrostatic balance of the cylinder block against the valve plate.
    pub k2: f64,
    /// Kidney port area as a fraction of piston area.
    pub k3: f64,
    /// Hydrostatic balance of the slipper shoe.
    pub k4: f64,
    /// Shoe outer diameter as a fraction of the piston spacing on the pitch circle.
    pub k5: f64,
}

impl Default for DesignBalance {
    fn default() -> Self {
        Self {
            k1: 0.75,
            k2: 0.91,
            k3: 0.48,
            k4: 0.93,
            k5: 0.95,
        }
    }
}

/// Coefficients of the empirical mechanical efficiency model.
///
/// The `b` and `c` terms differ between the pump and the motor; `a` and `d`
/// are shared.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrictionCoefficients {
    pub a: f64,
    pub b_pump: f64,
    pub b_motor: f64,
    pub c_pump: f64,
    pub c_motor: f64,
    pub d: f64,
}

impl Default for FrictionCoefficients {
    fn default() -> Self {
        Self {
            a: 0.17,
            b_pump: 1.0,
            b_motor: 0.5,
            c_pump: 0.001,
            c_motor: 0.005,
            d: 125.0,
        }
    }
}

/// Lubricating film clearances of the three leakage paths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clearances {
    /// Cylinder block to valve plate.
    pub block: Length,
    /// Slipper shoe to swashplate.
    pub shoe: Length,
    /// Piston to bore.
    pub piston: Length,
    /// Piston-in-bore eccentricity ratio.
    pub eccentricity: f64,
}

impl Default for Clearances {
    fn default() -> Self {
        Self {
            block: Length::new::<micrometer>(20.0),
            shoe: Length::new::<micrometer>(20.0),
            piston: Length::new::<micrometer>(20.0),
            eccentricity: 1.0,
        }
    }
}

/// All calibration coefficients passed alongside an operating point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModelCoefficients {
    pub design: DesignBalance,
    pub friction: FrictionCoefficients,
    pub clearances: Clearances,
}
