//! # Wet-End Models
//!
//! Process twin of the leather wet end, built as [Twine](https://github.com/isentropic-dev/twine)
//! models.
//!
//! Given the tanned baseline of a batch and its retannage, fatliquoring and
//! drying parameters, the twin predicts oil penetration, surface clagginess
//! (vapor-barrier index), drying complexity, snap risk and area yield.
//!
//! ## Crate layout
//!
//! - [`models`]: The wet-end model and its [`twine_core::Model`] adapter.
//! - [`support`]: Chemistry reference data, numeric constraints and unit helpers.
//!
//! ## Diagnostics
//!
//! The models log through the [`log`] facade: a `debug` record per simulation
//! and `trace` records per pipeline stage.
//! No logger is installed by this crate.

pub mod models;
pub mod support;
