//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 4xxx: Booking / pricing input errors
//! - 5xxx: Calendar and block errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for compact serialization
/// and cross-language compatibility with the admin UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 4xxx: Booking / pricing ====================
    /// Check-out is before check-in
    InvalidStayDates = 4001,
    /// Money amount is not finite, negative, or too large
    InvalidAmount = 4002,
    /// Discount value is not usable for its mode
    InvalidDiscount = 4003,
    /// Tax rate outside [0, 100]
    InvalidTaxRate = 4004,
    /// Extra service applicable day outside the stay
    InvalidServiceDay = 4005,

    // ==================== 5xxx: Calendar / blocks ====================
    /// Block request selects no rooms
    EmptyRoomSelection = 5001,
    /// Block range is empty or inverted
    InvalidBlockRange = 5002,
    /// Calendar window has no days
    InvalidCalendarWindow = 5003,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9002,
    /// Input file could not be read
    IoError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Booking / pricing
            ErrorCode::InvalidStayDates => "Check-out must not be before check-in",
            ErrorCode::InvalidAmount => "Amount must be a finite, non-negative number",
            ErrorCode::InvalidDiscount => "Invalid discount",
            ErrorCode::InvalidTaxRate => "Tax rate must be between 0 and 100",
            ErrorCode::InvalidServiceDay => "Service day is outside the stay",

            // Calendar / blocks
            ErrorCode::EmptyRoomSelection => "No rooms selected",
            ErrorCode::InvalidBlockRange => "Block range is empty or inverted",
            ErrorCode::InvalidCalendarWindow => "Calendar window must contain at least one day",

            // System
            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
            ErrorCode::IoError => "I/O error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Booking / pricing
            4001 => Ok(ErrorCode::InvalidStayDates),
            4002 => Ok(ErrorCode::InvalidAmount),
            4003 => Ok(ErrorCode::InvalidDiscount),
            4004 => Ok(ErrorCode::InvalidTaxRate),
            4005 => Ok(ErrorCode::InvalidServiceDay),

            // Calendar / blocks
            5001 => Ok(ErrorCode::EmptyRoomSelection),
            5002 => Ok(ErrorCode::InvalidBlockRange),
            5003 => Ok(ErrorCode::InvalidCalendarWindow),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::ConfigError),
            9003 => Ok(ErrorCode::IoError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
