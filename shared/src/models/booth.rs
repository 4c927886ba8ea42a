//! Booth Model (ブース)
//!
//! A booth is an assignable rectangular unit within a venue area, assigned
//! to at most one approved vendor application at a time. Status moves only
//! through the transition methods below; each returns `false` and leaves
//! the booth untouched when its precondition fails.

use serde::{Deserialize, Serialize};

use crate::geometry::{self, Bounds, Point};

use super::vendor_application::VendorApplication;
use super::venue_area::VenueArea;

/// Booth size class. Informational only; not validated against width/height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoothSize {
    #[default]
    Small,
    Medium,
    Large,
    ExtraLarge,
    Custom,
}

/// Booth lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoothStatus {
    #[default]
    Available,
    Reserved,
    Assigned,
    Occupied,
    Maintenance,
    Unavailable,
}

impl BoothStatus {
    /// Whether this status counts toward occupancy
    /// (anything past available/reserved)
    pub fn counts_as_occupied(&self) -> bool {
        !matches!(self, Self::Available | Self::Reserved)
    }
}

/// Booth entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booth {
    pub id: i64,
    /// Owning area
    pub venue_area_id: i64,
    /// Denormalized owning festival, used for booth number uniqueness
    pub festival_id: i64,
    /// Present iff status is assigned or occupied
    pub vendor_application_id: Option<i64>,
    pub name: String,
    /// `<2-digit area ordinal>-<3-digit booth ordinal>`, unique per festival
    pub booth_number: String,
    pub size: BoothSize,
    pub width: f64,
    pub height: f64,
    pub x_position: f64,
    pub y_position: f64,
    /// Stored for forward compatibility; booth geometry ignores it and
    /// treats every booth as axis-aligned.
    pub rotation: Option<f64>,
    pub status: BoothStatus,
    pub power_required: bool,
    pub water_required: bool,
    pub special_requirements: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Booth {
    // ==================== Status queries ====================

    pub fn is_available(&self) -> bool {
        self.status == BoothStatus::Available
    }

    /// Assigned in the strict sense: status is assigned AND a vendor
    /// application is linked
    pub fn is_assigned(&self) -> bool {
        self.status == BoothStatus::Assigned && self.vendor_application_id.is_some()
    }

    // ==================== Transitions ====================

    /// Assign this booth to an approved vendor application.
    ///
    /// Requires status available and an approved application. Returns
    /// `false` without mutating otherwise.
    pub fn assign_to_vendor(&mut self, application: &VendorApplication) -> bool {
        if !self.is_available() || !application.is_approved() {
            return false;
        }
        self.vendor_application_id = Some(application.id);
        self.status = BoothStatus::Assigned;
        true
    }

    /// Release this booth from its vendor, returning it to available.
    ///
    /// Requires `is_assigned()`. Returns `false` without mutating otherwise;
    /// a second call after a successful one is therefore a no-op.
    pub fn unassign_from_vendor(&mut self) -> bool {
        if !self.is_assigned() {
            return false;
        }
        self.vendor_application_id = None;
        self.status = BoothStatus::Available;
        true
    }

    /// Mark an assigned or reserved booth as occupied (vendor moved in)
    pub fn mark_as_occupied(&mut self) -> bool {
        if !matches!(self.status, BoothStatus::Assigned | BoothStatus::Reserved) {
            return false;
        }
        self.status = BoothStatus::Occupied;
        true
    }

    /// Mark this booth as available.
    ///
    /// Refused while a vendor application is linked; use
    /// [`Booth::unassign_from_vendor`] to clear vendor and status together.
    pub fn mark_as_available(&mut self) -> bool {
        if self.vendor_application_id.is_some() {
            return false;
        }
        self.status = BoothStatus::Available;
        true
    }

    // ==================== Geometry ====================

    pub fn total_area(&self) -> f64 {
        geometry::rect_area(self.width, self.height)
    }

    pub fn center_point(&self) -> Point {
        geometry::center(self.x_position, self.y_position, self.width, self.height)
    }

    /// Axis-aligned corners. The stored rotation is ignored.
    pub fn corners(&self) -> [Point; 4] {
        geometry::corners(self.x_position, self.y_position, self.width, self.height, 0.0)
    }

    /// Axis-aligned bounds. The stored rotation is ignored.
    pub fn bounding_box(&self) -> Bounds {
        geometry::bounding_box(self.x_position, self.y_position, self.width, self.height, 0.0)
    }

    /// Inclusive overlap against another booth: booths sharing an edge
    /// count as overlapping. Self-comparison is never an overlap.
    pub fn overlaps_with(&self, other: &Booth) -> bool {
        if self.id == other.id {
            return false;
        }
        geometry::overlaps_inclusive(&self.bounding_box(), &other.bounding_box())
    }

    /// Center-to-center distance, rounded to 2 decimal places
    pub fn distance_to(&self, other: &Booth) -> f64 {
        geometry::distance(self.center_point(), other.center_point())
    }

    /// Whether this booth lies fully inside the area's axis-aligned bounds
    pub fn fits_within_area(&self, area: &VenueArea) -> bool {
        area.bounding_box().contains(&self.bounding_box())
    }

    // ==================== Presentation ====================

    /// Human-readable summary of power/water/special requirements
    pub fn requirements_summary(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if self.power_required {
            parts.push("電源供給".to_string());
        }
        if self.water_required {
            parts.push("給水設備".to_string());
        }
        if let Some(req) = &self.special_requirements
            && !req.trim().is_empty()
        {
            parts.push(req.trim().to_string());
        }
        if parts.is_empty() {
            "特別な要件なし".to_string()
        } else {
            parts.join("、")
        }
    }
}

/// Create booth payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoothCreate {
    pub venue_area_id: i64,
    pub festival_id: i64,
    pub name: String,
    pub booth_number: String,
    #[serde(default)]
    pub size: BoothSize,
    pub width: f64,
    pub height: f64,
    pub x_position: f64,
    pub y_position: f64,
    pub rotation: Option<f64>,
    #[serde(default)]
    pub power_required: bool,
    #[serde(default)]
    pub water_required: bool,
    pub special_requirements: Option<String>,
}

/// Update booth payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoothUpdate {
    pub name: Option<String>,
    pub booth_number: Option<String>,
    pub size: Option<BoothSize>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x_position: Option<f64>,
    pub y_position: Option<f64>,
    pub rotation: Option<f64>,
    pub status: Option<BoothStatus>,
    pub power_required: Option<bool>,
    pub water_required: Option<bool>,
    pub special_requirements: Option<String>,
}
