//! Notification payloads emitted by the engine
//!
//! Delivery (LINE, mail, in-app) lives outside the engine; these types only
//! describe what happened and who should hear about it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Notification kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    /// A booth was assigned to a vendor application
    BoothAssigned,
    /// A booth assignment was removed
    BoothUnassigned,
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoothAssigned => write!(f, "booth_assigned"),
            Self::BoothUnassigned => write!(f, "booth_unassigned"),
        }
    }
}

/// An outbound notification, fire-and-forget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Recipient user
    pub recipient_id: i64,
    /// Acting user, absent for system-initiated changes
    pub sender_id: Option<i64>,
    /// Entity kind the notification refers to (e.g. "booth")
    pub subject_kind: String,
    pub subject_id: i64,
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
}
