//! Unified error codes for the venue layout engine
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Permission errors
//! - 2xxx: Venue errors
//! - 3xxx: Area errors
//! - 4xxx: Booth errors
//! - 5xxx: Layout element errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
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
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,
    /// Value out of range
    ValueOutOfRange = 7,

    // ==================== 1xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 1001,

    // ==================== 2xxx: Venue ====================
    /// Venue not found
    VenueNotFound = 2001,
    /// Latitude/longitude out of range or set without its counterpart
    InvalidCoordinates = 2002,

    // ==================== 3xxx: Area ====================
    /// Venue area not found
    AreaNotFound = 3001,

    // ==================== 4xxx: Booth ====================
    /// Booth not found
    BoothNotFound = 4001,
    /// Booth number already used within the festival
    BoothNumberTaken = 4002,
    /// Vendor application not found
    ApplicationNotFound = 4003,

    // ==================== 5xxx: Layout ====================
    /// Layout element not found
    ElementNotFound = 5001,
    /// Layout element is locked against edits
    ElementLocked = 5002,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Serialization error
    SerializationError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::PermissionDenied => "Permission denied",

            Self::VenueNotFound => "Venue not found",
            Self::InvalidCoordinates => "Invalid coordinates",

            Self::AreaNotFound => "Venue area not found",

            Self::BoothNotFound => "Booth not found",
            Self::BoothNumberTaken => "Booth number already taken",
            Self::ApplicationNotFound => "Vendor application not found",

            Self::ElementNotFound => "Layout element not found",
            Self::ElementLocked => "Layout element is locked",

            Self::InternalError => "Internal error",
            Self::SerializationError => "Serialization error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into [`ErrorCode`]
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
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            6 => Self::RequiredField,
            7 => Self::ValueOutOfRange,

            1001 => Self::PermissionDenied,

            2001 => Self::VenueNotFound,
            2002 => Self::InvalidCoordinates,

            3001 => Self::AreaNotFound,

            4001 => Self::BoothNotFound,
            4002 => Self::BoothNumberTaken,
            4003 => Self::ApplicationNotFound,

            5001 => Self::ElementNotFound,
            5002 => Self::ElementLocked,

            9001 => Self::InternalError,
            9002 => Self::SerializationError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::PermissionDenied,
            ErrorCode::VenueNotFound,
            ErrorCode::BoothNumberTaken,
            ErrorCode::ElementLocked,
            ErrorCode::InternalError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert_eq!(ErrorCode::try_from(8888), Err(InvalidErrorCode(8888)));
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::ValidationFailed.to_string(), "E0002");
        assert_eq!(ErrorCode::BoothNotFound.to_string(), "E4001");
    }

    #[test]
    fn test_serialize_as_u16() {
        let json = serde_json::to_string(&ErrorCode::BoothNumberTaken).unwrap();
        assert_eq!(json, "4002");

        let code: ErrorCode = serde_json::from_str("5002").unwrap();
        assert_eq!(code, ErrorCode::ElementLocked);
    }
}
