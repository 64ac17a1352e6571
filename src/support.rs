//! Supporting utilities used by the models.
//!
//! - [`constraint`]: numeric invariants checked at construction
//! - [`oil`]: oil property tables and the lookup interface
//! - [`engine`]: reference engine full-load curves
//! - [`speed_limit`]: pump speed limit prediction interface

pub mod constraint;
pub mod engine;
pub mod oil;
pub mod speed_limit;
