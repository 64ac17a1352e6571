//! # HST Models
//!
//! Steady-state performance models of hydrostatic transmissions, built as
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities and reference data interfaces used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Code that only one model needs stays in that model's internal `core`
//! module. It moves to [`support`] once another model, or a caller outside
//! this crate, has a use for it.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (sizing, evaluation, solver convergence,
//! and warnings for efficiencies outside 0–100 %). It never installs a
//! subscriber; applications choose how to collect them.

pub mod models;
pub mod support;
