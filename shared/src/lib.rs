//! Shared types for the booking engine
//!
//! Plain records exchanged between the pricing/calendar core and the
//! surrounding application (forms, persistence, presentation), plus the
//! unified error types.

pub mod error;
pub mod models;

// Re-exports
pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
