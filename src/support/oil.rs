//! Hydraulic oil properties.
//!
//! The HST model needs four properties of the working oil at its operating
//! temperature: dynamic and kinematic viscosity, density, and bulk modulus.
//! Tabulated oil data is published at discrete temperatures (usually every
//! 10 °C), so lookups are exact-key: a temperature missing from the table is
//! an error, never an interpolation.
//!
//! Callers load their tables once at startup and pass them to the model
//! through the [`OilPropertyLookup`] trait.
//! [`OilTable`] is the in-memory implementation provided by this crate.

use std::collections::BTreeMap;

use thiserror::Error;
use uom::si::f64::{DiffusionCoefficient, DynamicViscosity, MassDensity, Pressure};

use crate::support::constraint::{ConstraintError, StrictlyPositive};

/// Oil properties at a single temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OilProperties {
    pub dynamic_viscosity: DynamicViscosity,
    /// Kinematic viscosity, carried in the SI dimension of m²/s.
    pub kinematic_viscosity: DiffusionCoefficient,
    pub density: MassDensity,
    pub bulk_modulus: Pressure,
}

impl OilProperties {
    /// Validates and groups a set of oil properties.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidOilProperty`] naming the first property that is not
    /// strictly positive.
    pub fn new(
        dynamic_viscosity: DynamicViscosity,
        kinematic_viscosity: DiffusionCoefficient,
        density: MassDensity,
        bulk_modulus: Pressure,
    ) -> Result<Self, InvalidOilProperty> {
        let check = |property: &'static str, result: Result<(), ConstraintError>| {
            result.map_err(|source| InvalidOilProperty { property, source })
        };
        check("dynamic viscosity", StrictlyPositive::new(dynamic_viscosity).map(drop))?;
        check("kinematic viscosity", StrictlyPositive::new(kinematic_viscosity).map(drop))?;
        check("density", StrictlyPositive::new(density).map(drop))?;
        check("bulk modulus", StrictlyPositive::new(bulk_modulus).map(drop))?;

        Ok(Self {
            dynamic_viscosity,
            kinematic_viscosity,
            density,
            bulk_modulus,
        })
    }
}

/// An oil property failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid oil {property}: {source}")]
pub struct InvalidOilProperty {
    pub property: &'static str,
    #[source]
    pub source: ConstraintError,
}

/// No table entry matches the requested oil grade and temperature exactly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no data for oil {grade:?} at {temperature} °C")]
pub struct OilDataNotFound {
    pub grade: String,
    /// Requested temperature in °C.
    pub temperature: i32,
}

/// Resolves an oil grade and temperature to its properties.
pub trait OilPropertyLookup {
    /// Returns the properties of `grade` at exactly `temperature` °C.
    ///
    /// # Errors
    ///
    /// Returns [`OilDataNotFound`] if the grade or temperature is not tabulated.
    fn oil_properties(&self, grade: &str, temperature: i32)
    -> Result<OilProperties, OilDataNotFound>;
}

/// In-memory oil property table keyed by grade and temperature in °C.
///
/// # Example
///
/// ```
/// use hst_models::support::oil::{OilProperties, OilPropertyLookup, OilTable};
/// use uom::si::{
///     diffusion_coefficient::square_meter_per_second, dynamic_viscosity::pascal_second, f64::*,
///     mass_density::kilogram_per_cubic_meter, pressure::bar,
/// };
///
/// let props = OilProperties::new(
///     DynamicViscosity::new::<pascal_second>(0.01152),
///     DiffusionCoefficient::new::<square_meter_per_second>(14.2e-6),
///     MassDensity::new::<kilogram_per_cubic_meter>(811.3),
///     Pressure::new::<bar>(15_000.0),
/// )
/// .unwrap();
///
/// let table = OilTable::new().with_entry("SAE 15W40", 100, props);
/// assert!(table.oil_properties("SAE 15W40", 100).is_ok());
/// assert!(table.oil_properties("SAE 15W40", 95).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OilTable {
    entries: BTreeMap<(String, i32), OilProperties>,
}

impl OilTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the entry for `grade` at `temperature` °C.
    pub fn insert(
        &mut self,
        grade: impl Into<String>,
        temperature: i32,
        properties: OilProperties,
    ) {
        self.entries.insert((grade.into(), temperature), properties);
    }

    /// Builder form of [`OilTable::insert`].
    #[must_use]
    pub fn with_entry(
        mut self,
        grade: impl Into<String>,
        temperature: i32,
        properties: OilProperties,
    ) -> Self {
        self.insert(grade, temperature, properties);
        self
    }

    /// Returns the tabulated temperatures for `grade`, in ascending order.
    pub fn temperatures<'a>(&'a self, grade: &'a str) -> impl Iterator<Item = i32> + 'a {
        self.entries
            .keys()
            .filter(move |(g, _)| g == grade)
            .map(|&(_, t)| t)
    }

    /// Returns the number of entries across all grades.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OilPropertyLookup for OilTable {
    fn oil_properties(
        &self,
        grade: &str,
        temperature: i32,
    ) -> Result<OilProperties, OilDataNotFound> {
        self.entries
            .get(&(grade.to_owned(), temperature))
            .copied()
            .ok_or_else(|| OilDataNotFound {
                grade: grade.to_owned(),
                temperature,
            })
    }
}
