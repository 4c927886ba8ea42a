//! Vendor Application Model (出店申請)
//!
//! Collaborator entity of the booth lifecycle. Application review itself
//! happens outside the layout engine; the engine only needs the approval
//! state and the applicant to notify.

use serde::{Deserialize, Serialize};

/// Vendor application review status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    UnderReview,
    Approved,
    Rejected,
    Cancelled,
}

/// Vendor application entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VendorApplication {
    pub id: i64,
    pub festival_id: i64,
    /// Applicant user, recipient of booth notifications
    pub user_id: i64,
    pub business_name: String,
    pub status: ApplicationStatus,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl VendorApplication {
    pub fn is_approved(&self) -> bool {
        self.status == ApplicationStatus::Approved
    }
}
