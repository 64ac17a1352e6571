//! Public models.
//!
//! Models are organized into domain-specific submodules. Each model keeps its
//! computation in an internal `core` submodule and exposes a thin
//! [`twine_core::Model`] adapter on top of it.

pub mod hydraulic;
