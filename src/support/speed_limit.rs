//! Pump speed limits from a pretrained predictor.
//!
//! The maximum safe speed of an axial-piston pump grows with size in a way
//! that is captured empirically, by regression over catalog data.
//! This crate does not assume anything about how such a regression is stored:
//! it only needs a mean prediction and its uncertainty for a displacement,
//! supplied through [`SpeedLimitPredictor`].

use uom::si::f64::{AngularVelocity, Volume};

/// Mean speed limit and its one-sigma uncertainty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedLimitPrediction {
    pub mean: AngularVelocity,
    pub uncertainty: AngularVelocity,
}

/// Predicts the pump speed limit for a displacement.
pub trait SpeedLimitPredictor {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the predicted speed limit for a machine of `displacement` per revolution.
    ///
    /// # Errors
    ///
    /// Returns an error if the predictor cannot produce a prediction.
    fn predict(&self, displacement: Volume) -> Result<SpeedLimitPrediction, Self::Error>;
}

/// Low, nominal and high pump speed limits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedLimitBand {
    pub low: AngularVelocity,
    pub nominal: AngularVelocity,
    pub high: AngularVelocity,
}

impl SpeedLimitBand {
    /// Returns `true` if `speed` does not exceed the low limit.
    #[must_use]
    pub fn is_safe(&self, speed: AngularVelocity) -> bool {
        speed <= self.low
    }
}

/// Builds the speed limit band `mean ∓ uncertainty` for a displacement.
///
/// # Errors
///
/// Propagates the predictor's error.
pub fn speed_limit_band<P: SpeedLimitPredictor>(
    predictor: &P,
    displacement: Volume,
) -> Result<SpeedLimitBand, P::Error> {
    let SpeedLimitPrediction { mean, uncertainty } = predictor.predict(displacement)?;
    Ok(SpeedLimitBand {
        low: mean - uncertainty,
        nominal: mean,
        high: mean + uncertainty,
    })
}
