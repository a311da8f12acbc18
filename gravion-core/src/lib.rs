//! Shared building blocks for gravity-ion thermoelectric calculations.
//!
//! - [`constraint`]: type-level numeric invariants checked at construction.
//! - [`units`]: `uom` aliases for quantities the SI system does not name.

pub mod constraint;
pub mod units;
