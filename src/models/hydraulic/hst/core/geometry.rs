//! Sizing of the pumping group.
//!
//! The main dimensions of an axial-piston machine follow from its displacement,
//! swash angle and piston count once a handful of design balance ratios are
//! fixed. All sizes are in metres.

use std::f64::consts::PI;

use thiserror::Error;
use tracing::debug;
use uom::si::{
    area::square_meter,
    f64::{Area, Length},
    length::meter,
};

use super::{DesignBalance, MachineConfiguration};

/// Radial band of a sealing land, bounded by an inner and an outer radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub inner: Length,
    pub outer: Length,
}

impl Band {
    /// Radial width of the band.
    #[must_use]
    pub fn width(&self) -> Length {
        self.outer - self.inner
    }

    /// Natural log of the outer to inner radius ratio.
    ///
    /// Radial flow across the band is inversely proportional to this value.
    #[must_use]
    pub fn log_ratio(&self) -> f64 {
        (self.outer.get::<meter>() / self.inner.get::<meter>()).ln()
    }
}

/// Identifies a sealing band of the pumping group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandKind {
    /// Valve plate land outside the kidney ports.
    BlockOuter,
    /// Valve plate land inside the kidney ports.
    BlockInner,
    /// Slipper shoe land.
    Shoe,
}

/// A sealing band has no usable radial width.
///
/// Raised instead of letting a zero log ratio turn into an infinite leakage.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{band:?} band is degenerate (ln(R/r) = {log_ratio})")]
pub struct DegenerateGeometryError {
    pub band: BandKind,
    pub log_ratio: f64,
}

/// Main dimensions of one axial-piston machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometrySizes {
    pub piston_diameter: Length,
    pub piston_area: Area,
    pub pitch_circle_diameter: Length,
    pub stroke: Length,
    pub min_engagement: Length,
    pub kidney_width: Length,
    pub kidney_area: Area,
    pub land_width: Length,
    pub block_outer: Band,
    pub block_inner: Band,
    pub shoe_area: Area,
    pub shoe: Band,
}

impl GeometrySizes {
    /// Sizes the pumping group of `config` with the given design balance.
    ///
    /// Sizing never fails for a valid configuration, but unusual design
    /// balances can collapse a sealing band. Use [`check_bands`](Self::check_bands)
    /// before relying on the bands.
    #[must_use]
    pub fn compute(config: &MachineConfiguration, design: &DesignBalance) -> Self {
        let DesignBalance { k1, k2, k3, k4, k5 } = *design;
        let n = f64::from(config.pistons());
        let swash = config.swash_radians();
        let (tan, cos) = (swash.tan(), swash.cos());

        let d = (4.0 * config.displacement_cc() * 1e-6 * k1 / (n.powi(2) * tan)).cbrt();
        let area_piston = PI * d.powi(2) / 4.0;
        let pcd = n * d / (PI * k1);
        let stroke = pcd * tan;
        let min_engagement = 1.4 * d;

        let kidney_area = k3 * area_piston;
        let kidney_width =
            2.0 * ((d.powi(2) + (PI - 4.0) * kidney_area).sqrt() - d) / (PI - 4.0);
        let land_width = k2 * n * area_piston / (PI * pcd) - kidney_width;

        let rbo = (pcd + kidney_width) / 2.0;
        let big_rbo = rbo + land_width;
        let big_rbi = (pcd - kidney_width) / 2.0;
        let rbi = big_rbi - land_width;

        let shoe_area = k4 * area_piston / cos;
        let big_rs = PI * pcd * k5 / (2.0 * n);
        let rs = (big_rs.powi(2) - shoe_area / PI).sqrt();

        debug!(
            piston_diameter = d,
            pitch_circle_diameter = pcd,
            stroke,
            land_width,
            "sized pumping group"
        );

        let m = Length::new::<meter>;
        let m2 = Area::new::<square_meter>;

        Self {
            piston_diameter: m(d),
            piston_area: m2(area_piston),
            pitch_circle_diameter: m(pcd),
            stroke: m(stroke),
            min_engagement: m(min_engagement),
            kidney_width: m(kidney_width),
            kidney_area: m2(kidney_area),
            land_width: m(land_width),
            block_outer: Band {
                inner: m(rbo),
                outer: m(big_rbo),
            },
            block_inner: Band {
                inner: m(rbi),
                outer: m(big_rbi),
            },
            shoe_area: m2(shoe_area),
            shoe: Band {
                inner: m(rs),
                outer: m(big_rs),
            },
        }
    }

    /// Returns the log ratios of the block outer, block inner and shoe bands.
    ///
    /// # Errors
    ///
    /// Returns a [`DegenerateGeometryError`] for the first band whose log ratio
    /// is not strictly positive and finite, including bands with equal radii.
    pub fn check_bands(&self) -> Result<[f64; 3], DegenerateGeometryError> {
        let bands = [
            (BandKind::BlockOuter, self.block_outer),
            (BandKind::BlockInner, self.block_inner),
            (BandKind::Shoe, self.shoe),
        ];

        let mut ratios = [0.0; 3];
        for (slot, (band, sizes)) in ratios.iter_mut().zip(bands) {
            let log_ratio = sizes.log_ratio();
            if !(log_ratio > 0.0 && log_ratio.is_finite()) {
                return Err(DegenerateGeometryError { band, log_ratio });
            }
            *slot = log_ratio;
        }

        Ok(ratios)
    }

    /// Returns `true` if any sealing band has collapsed.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.check_bands().is_err()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::{
        angle::degree,
        f64::{Angle, Volume},
        volume::cubic_centimeter,
    };

    use crate::models::hydraulic::hst::core::test_support::reference_config;

    #[test]
    fn reference_sizes() {
        let sizes = GeometrySizes::compute(&reference_config(), &DesignBalance::default());

        let expected = [
            (sizes.piston_diameter.get::<meter>(), 0.036_878_305_519_996_06),
            (sizes.piston_area.get::<square_meter>(), 0.001_068_148_899_120_988),
            (sizes.pitch_circle_diameter.get::<meter>(), 0.140_864_750_792_652_07),
            (sizes.stroke.get::<meter>(), 0.045_769_732_037_472_55),
            (sizes.min_engagement.get::<meter>(), 0.051_629_627_727_994_48),
            (sizes.kidney_width.get::<meter>(), 0.015_257_439_563_388_927),
            (sizes.land_width.get::<meter>(), 0.004_510_595_148_910_734),
            (sizes.block_outer.inner.get::<meter>(), 0.078_061_095_178_020_5),
            (sizes.block_outer.outer.get::<meter>(), 0.082_571_690_326_931_24),
            (sizes.block_inner.inner.get::<meter>(), 0.058_293_060_465_720_83),
            (sizes.block_inner.outer.get::<meter>(), 0.062_803_655_614_631_57),
            (sizes.shoe.inner.get::<meter>(), 0.014_595_897_749_177_833),
            (sizes.shoe.outer.get::<meter>(), 0.023_356_260_162_664_17),
        ];
        for (actual, expected) in expected {
            assert_relative_eq!(actual, expected, max_relative = 1e-9);
        }

        assert!(!sizes.is_degenerate());
    }

    #[test]
    fn collapsed_band_is_degenerate() {
        let mut sizes = GeometrySizes::compute(&reference_config(), &DesignBalance::default());
        sizes.block_outer.outer = sizes.block_outer.inner;

        let err = sizes.check_bands().unwrap_err();
        assert_eq!(err.band, BandKind::BlockOuter);
        assert_eq!(err.log_ratio, 0.0);
        assert!(sizes.is_degenerate());
    }

    #[test]
    fn land_consumed_by_kidney_is_degenerate() {
        let config = reference_config();
        let nominal = GeometrySizes::compute(&config, &DesignBalance::default());

        // Balance just short of the value at which the land exactly fills the kidney width.
        let n = f64::from(config.pistons());
        let k2 = nominal.kidney_width.get::<meter>()
            * PI
            * nominal.pitch_circle_diameter.get::<meter>()
            / (n * nominal.piston_area.get::<square_meter>());
        let design = DesignBalance {
            k2: k2 * (1.0 - 1e-9),
            ..DesignBalance::default()
        };

        let sizes = GeometrySizes::compute(&config, &design);
        assert!(sizes.land_width.get::<meter>() < 0.0);

        let err = sizes.check_bands().unwrap_err();
        assert_eq!(err.band, BandKind::BlockOuter);
    }

    #[test]
    fn oversized_shoe_is_degenerate() {
        let design = DesignBalance {
            k4: 5.0,
            ..DesignBalance::default()
        };
        let sizes = GeometrySizes::compute(&reference_config(), &design);
        let err = sizes.check_bands().unwrap_err();
        assert_eq!(err.band, BandKind::Shoe);
        assert!(err.log_ratio.is_nan());
    }

    proptest! {
        #[test]
        fn radii_are_ordered(
            displacement in 20.0_f64..1000.0,
            swash in 5.0_f64..45.0,
            pistons in 3_u32..16,
        ) {
            let config = MachineConfiguration::new(
                Volume::new::<cubic_centimeter>(displacement),
                Angle::new::<degree>(swash),
                pistons,
            )
            .unwrap();
            let sizes = GeometrySizes::compute(&config, &DesignBalance::default());

            prop_assert!(sizes.block_inner.inner < sizes.block_inner.outer);
            prop_assert!(sizes.block_outer.inner < sizes.block_outer.outer);
            prop_assert!(sizes.shoe.inner < sizes.shoe.outer);
            prop_assert!(sizes.stroke.get::<meter>() > 0.0);
            prop_assert!(sizes.piston_area.get::<square_meter>() > 0.0);
            prop_assert!(sizes.land_width.get::<meter>() > 0.0);
            prop_assert!(sizes.check_bands().is_ok());
        }
    }
}
