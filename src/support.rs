//! Supporting utilities used by the wet-end models.
//!
//! These modules are public because callers assemble model inputs with them,
//! but their APIs are not yet stable.

pub mod chemistry;
pub mod constraint;
pub mod units;
