//! Booth assignment lifecycle
//!
//! Wraps the booth state machine with the store and the notification sink.
//! Preconditions are checked and applied under the store's entry guard, so
//! two concurrent attempts on the same booth cannot both succeed.
//!
//! Precondition failures are `Ok(false)`: nothing is mutated, nothing is
//! notified, and the caller branches on the boolean. Errors are reserved
//! for missing entities.

use std::sync::Arc;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::VendorApplication;
use shared::notification::{Notification, NotificationType};

use crate::notify::NotificationSink;
use crate::store::VenueStore;

pub struct BoothAssignmentService {
    store: Arc<VenueStore>,
    sink: Arc<dyn NotificationSink>,
}

impl BoothAssignmentService {
    pub fn new(store: Arc<VenueStore>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { store, sink }
    }

    /// Assign an available booth to an approved vendor application.
    ///
    /// On success the vendor is notified; `operator_id` becomes the
    /// notification sender.
    pub fn assign_booth(
        &self,
        booth_id: i64,
        application_id: i64,
        operator_id: Option<i64>,
    ) -> AppResult<bool> {
        let application = self
            .store
            .find_vendor_application(application_id)
            .ok_or_else(|| AppError::new(ErrorCode::ApplicationNotFound))?;

        let mut booth_label = String::new();
        let assigned = self.store.with_booth_mut(booth_id, |booth| {
            let ok = booth.assign_to_vendor(&application);
            if ok {
                booth_label = format!("{} ({})", booth.name, booth.booth_number);
            }
            ok
        })?;

        if assigned {
            tracing::info!(booth_id, application_id, "booth assigned");
            self.sink.notify(assignment_notice(
                &application,
                booth_id,
                operator_id,
                &booth_label,
            ));
        } else {
            tracing::debug!(booth_id, application_id, "assignment precondition failed");
        }
        Ok(assigned)
    }

    /// Release an assigned booth and notify the previously-assigned vendor
    pub fn unassign_booth(&self, booth_id: i64, operator_id: Option<i64>) -> AppResult<bool> {
        let mut previous_application: Option<i64> = None;
        let mut booth_label = String::new();

        let released = self.store.with_booth_mut(booth_id, |booth| {
            previous_application = booth.vendor_application_id;
            booth_label = format!("{} ({})", booth.name, booth.booth_number);
            booth.unassign_from_vendor()
        })?;

        if released {
            tracing::info!(booth_id, "booth unassigned");
            if let Some(application_id) = previous_application
                && let Some(application) = self.store.find_vendor_application(application_id)
            {
                self.sink.notify(removal_notice(
                    &application,
                    booth_id,
                    operator_id,
                    &booth_label,
                ));
            }
        }
        Ok(released)
    }

    /// Mark an assigned or reserved booth as occupied (vendor moved in)
    pub fn mark_occupied(&self, booth_id: i64) -> AppResult<bool> {
        self.store
            .with_booth_mut(booth_id, |booth| booth.mark_as_occupied())
    }

    /// Mark a vendor-free booth as available
    pub fn mark_available(&self, booth_id: i64) -> AppResult<bool> {
        self.store
            .with_booth_mut(booth_id, |booth| booth.mark_as_available())
    }
}

fn assignment_notice(
    application: &VendorApplication,
    booth_id: i64,
    operator_id: Option<i64>,
    booth_label: &str,
) -> Notification {
    Notification {
        recipient_id: application.user_id,
        sender_id: operator_id,
        subject_kind: "booth".to_string(),
        subject_id: booth_id,
        notification_type: NotificationType::BoothAssigned,
        title: "ブースが割り当てられました".to_string(),
        message: format!(
            "{}様のブース {} が確定しました。",
            application.business_name, booth_label
        ),
    }
}

fn removal_notice(
    application: &VendorApplication,
    booth_id: i64,
    operator_id: Option<i64>,
    booth_label: &str,
) -> Notification {
    Notification {
        recipient_id: application.user_id,
        sender_id: operator_id,
        subject_kind: "booth".to_string(),
        subject_id: booth_id,
        notification_type: NotificationType::BoothUnassigned,
        title: "ブースの割り当てが解除されました".to_string(),
        message: format!(
            "{}様のブース {} の割り当てが解除されました。",
            application.business_name, booth_label
        ),
    }
}
