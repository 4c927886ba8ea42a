//! Venue Area Model (エリア)

use serde::{Deserialize, Serialize};

use crate::geometry::{self, Bounds, Point};

use super::booth::Booth;

/// Designated zone type within a venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AreaType {
    VendorArea,
    FoodCourt,
    Stage,
    Seating,
    PerformanceArea,
    Entrance,
    Parking,
    Restroom,
    FirstAid,
    Storage,
    StaffArea,
    VipArea,
}

/// Venue area entity - a rectangular zone within a venue that contains booths
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueArea {
    pub id: i64,
    /// Owning venue
    pub venue_id: i64,
    pub name: String,
    pub area_type: AreaType,
    pub width: f64,
    pub height: f64,
    pub x_position: f64,
    pub y_position: f64,
    /// Degrees clockwise, `[0, 360)`; absent means unrotated
    pub rotation: Option<f64>,
    /// Visitor/booth capacity of the zone
    pub capacity: Option<i32>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl VenueArea {
    pub fn total_area(&self) -> f64 {
        geometry::rect_area(self.width, self.height)
    }

    pub fn center_point(&self) -> Point {
        geometry::center(self.x_position, self.y_position, self.width, self.height)
    }

    pub fn bounding_box(&self) -> Bounds {
        geometry::bounding_box(
            self.x_position,
            self.y_position,
            self.width,
            self.height,
            self.rotation.unwrap_or(0.0),
        )
    }

    /// Inclusive overlap against another area: zones sharing an edge count
    /// as overlapping. Self-comparison is never an overlap.
    pub fn overlaps_with(&self, other: &VenueArea) -> bool {
        if self.id == other.id {
            return false;
        }
        geometry::overlaps_inclusive(&self.bounding_box(), &other.bounding_box())
    }

    /// Center-to-center distance, rounded to 2 decimal places
    pub fn distance_to(&self, other: &VenueArea) -> f64 {
        geometry::distance(self.center_point(), other.center_point())
    }

    /// Booths of this area counting toward occupancy
    /// (status outside available/reserved)
    pub fn occupied_booths_count(&self, booths: &[Booth]) -> usize {
        booths
            .iter()
            .filter(|b| b.venue_area_id == self.id && b.status.counts_as_occupied())
            .count()
    }

    /// Booths of this area with status available
    pub fn available_booths_count(&self, booths: &[Booth]) -> usize {
        booths
            .iter()
            .filter(|b| b.venue_area_id == self.id && b.is_available())
            .count()
    }

    /// Occupied percentage over this area's booths, rounded to 2 decimal
    /// places. 0 when the area has no booths.
    pub fn occupancy_rate(&self, booths: &[Booth]) -> f64 {
        let mine: Vec<&Booth> = booths
            .iter()
            .filter(|b| b.venue_area_id == self.id)
            .collect();
        if mine.is_empty() {
            return 0.0;
        }
        let occupied = mine.iter().filter(|b| b.status.counts_as_occupied()).count();
        geometry::round2(occupied as f64 / mine.len() as f64 * 100.0)
    }
}

/// Create venue area payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueAreaCreate {
    pub venue_id: i64,
    pub name: String,
    pub area_type: AreaType,
    pub width: f64,
    pub height: f64,
    pub x_position: f64,
    pub y_position: f64,
    pub rotation: Option<f64>,
    pub capacity: Option<i32>,
}

/// Update venue area payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueAreaUpdate {
    pub name: Option<String>,
    pub area_type: Option<AreaType>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x_position: Option<f64>,
    pub y_position: Option<f64>,
    pub rotation: Option<f64>,
    pub capacity: Option<i32>,
}
