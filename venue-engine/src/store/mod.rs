//! In-memory entity store
//!
//! The persistence boundary of the engine: create/read/update/delete keyed
//! by `i64` id, with cascade-delete (venue → areas + elements, area →
//! booths). Backed by `DashMap` so one store can be shared across request
//! threads; booth transitions run under the map's entry guard, which makes
//! the read-validate-write of an assignment atomic per booth.
//!
//! Validation runs before every write and reports all offending fields in
//! one error; nothing is applied on failure.

mod area;
mod booth;
mod element;
mod venue;

use std::sync::atomic::{AtomicI64, Ordering};

use dashmap::DashMap;

use shared::models::{Booth, LayoutElement, VendorApplication, Venue, VenueArea};

/// In-memory store for the venue layout engine
#[derive(Debug)]
pub struct VenueStore {
    venues: DashMap<i64, Venue>,
    areas: DashMap<i64, VenueArea>,
    booths: DashMap<i64, Booth>,
    elements: DashMap<i64, LayoutElement>,
    applications: DashMap<i64, VendorApplication>,
    next_id: AtomicI64,
}

impl Default for VenueStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VenueStore {
    pub fn new() -> Self {
        Self {
            venues: DashMap::new(),
            areas: DashMap::new(),
            booths: DashMap::new(),
            elements: DashMap::new(),
            applications: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    fn alloc_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }

    // ==================== Vendor applications ====================
    //
    // Applications are reviewed outside the engine; the store only mirrors
    // them so assignment can check approval and address notifications.

    /// Register (or refresh) a vendor application mirror
    pub fn put_vendor_application(&self, application: VendorApplication) {
        self.applications.insert(application.id, application);
    }

    pub fn find_vendor_application(&self, id: i64) -> Option<VendorApplication> {
        self.applications.get(&id).map(|a| a.clone())
    }
}
