//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Permission errors
/// - 2xxx: Venue errors
/// - 3xxx: Area errors
/// - 4xxx: Booth errors
/// - 5xxx: Layout element errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Permission errors (1xxx)
    Permission,
    /// Venue errors (2xxx)
    Venue,
    /// Area errors (3xxx)
    Area,
    /// Booth errors (4xxx)
    Booth,
    /// Layout element errors (5xxx)
    Layout,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Permission,
            2000..3000 => Self::Venue,
            3000..4000 => Self::Area,
            4000..5000 => Self::Booth,
            5000..6000 => Self::Layout,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Permission => "permission",
            Self::Venue => "venue",
            Self::Area => "area",
            Self::Booth => "booth",
            Self::Layout => "layout",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(7), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Venue);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Area);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Booth);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Layout);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::PermissionDenied.category(),
            ErrorCategory::Permission
        );
        assert_eq!(ErrorCode::VenueNotFound.category(), ErrorCategory::Venue);
        assert_eq!(ErrorCode::AreaNotFound.category(), ErrorCategory::Area);
        assert_eq!(ErrorCode::BoothNotFound.category(), ErrorCategory::Booth);
        assert_eq!(ErrorCode::ElementLocked.category(), ErrorCategory::Layout);
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Booth).unwrap();
        assert_eq!(json, "\"booth\"");

        let category: ErrorCategory = serde_json::from_str("\"layout\"").unwrap();
        assert_eq!(category, ErrorCategory::Layout);
    }
}
