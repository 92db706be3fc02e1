//! Leather tanning models.
//!
//! Covers the wet end of the tannery: the tanned baseline of a batch and its
//! retannage, fatliquoring and drying.

pub mod wet_end;
