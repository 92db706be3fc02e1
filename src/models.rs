//! Public wet-end models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are grouped by process area (currently `tanning`).
//!
//! # Model structure
//!
//! Each model lives in its own module with an internal `core` submodule holding
//! the computation and domain logic.
//! The model module re-exports the public types of its core and provides the
//! [`twine_core::Model`] adapter, which stays a thin delegate.

pub mod tanning;
