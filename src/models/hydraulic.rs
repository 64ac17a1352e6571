//! Hydraulic power transmission models.

pub mod hst;
