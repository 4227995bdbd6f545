//! Data models
//!
//! Plain records consumed and produced by the booking engine.
//! Money is carried as `f64` at this layer; the engine converts to
//! `rust_decimal::Decimal` for arithmetic.

pub mod booking;
pub mod calendar;
pub mod invoice;
pub mod pricing;
pub mod stay;

// Re-exports
pub use booking::*;
pub use calendar::*;
pub use invoice::*;
pub use pricing::*;
pub use stay::*;
