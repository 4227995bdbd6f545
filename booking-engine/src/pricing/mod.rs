//! Room billing
//!
//! Turns a stay (nights, plan or special price, extras, discount, tax,
//! round-off, advance) into a reproducible invoice breakdown. Everything here
//! is pure: identical input always yields identical output.

mod discount;
mod invoice;
mod tax;

pub use discount::*;
pub use invoice::*;
pub use tax::*;
