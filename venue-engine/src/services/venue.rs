//! Venue aggregation service
//!
//! Venue-wide rollups across areas, booths, and layout elements, plus the
//! destructive batch renumbering of booths.

use std::sync::Arc;

use shared::error::{AppError, AppResult, ErrorCode};
use shared::geometry::{self, Bounds};
use shared::models::layout_element;

use crate::store::VenueStore;

pub struct VenueService {
    store: Arc<VenueStore>,
}

impl VenueService {
    pub fn new(store: Arc<VenueStore>) -> Self {
        Self { store }
    }

    // ==================== Capacity & occupancy ====================

    /// Sum of the venue's area capacities
    pub fn total_booth_capacity(&self, venue_id: i64) -> AppResult<i32> {
        self.require_venue(venue_id)?;
        Ok(self
            .store
            .list_areas(venue_id)
            .iter()
            .map(|a| a.capacity.unwrap_or(0))
            .sum())
    }

    /// Venue-wide count of booths counting toward occupancy
    pub fn occupied_booths_count(&self, venue_id: i64) -> AppResult<usize> {
        self.require_venue(venue_id)?;
        Ok(self
            .store
            .list_booths_in_venue(venue_id)
            .iter()
            .filter(|b| b.status.counts_as_occupied())
            .count())
    }

    /// Venue-wide count of available booths
    pub fn available_booths_count(&self, venue_id: i64) -> AppResult<usize> {
        self.require_venue(venue_id)?;
        Ok(self
            .store
            .list_booths_in_venue(venue_id)
            .iter()
            .filter(|b| b.is_available())
            .count())
    }

    /// Venue-wide occupancy percentage, rounded to 2 decimal places.
    /// 0 when the venue has no booths.
    pub fn occupancy_rate(&self, venue_id: i64) -> AppResult<f64> {
        self.require_venue(venue_id)?;
        let booths = self.store.list_booths_in_venue(venue_id);
        if booths.is_empty() {
            return Ok(0.0);
        }
        let occupied = booths
            .iter()
            .filter(|b| b.status.counts_as_occupied())
            .count();
        Ok(geometry::round2(
            occupied as f64 / booths.len() as f64 * 100.0,
        ))
    }

    // ==================== Layout rollups ====================

    /// Bounds over the venue's visible layout elements; all-zero for an
    /// empty map
    pub fn layout_bounds(&self, venue_id: i64) -> AppResult<Bounds> {
        self.require_venue(venue_id)?;
        Ok(layout_element::visible_bounds(
            &self.store.list_elements(venue_id),
        ))
    }

    /// Area of the layout bounds; 0 for an empty map
    pub fn total_layout_area(&self, venue_id: i64) -> AppResult<f64> {
        Ok(self.layout_bounds(venue_id)?.area())
    }

    // ==================== Booth numbering ====================

    /// Renumber every booth in the venue as
    /// `<2-digit area ordinal>-<3-digit booth ordinal>`, walking areas and
    /// booths in stored order.
    ///
    /// Destructive and idempotent: existing numbers are overwritten, and a
    /// second pass over unchanged data assigns the same numbers. Returns
    /// the number of booths renumbered.
    pub fn generate_booth_numbers(&self, venue_id: i64) -> AppResult<usize> {
        self.require_venue(venue_id)?;

        let mut renumbered = 0;
        for (area_index, area) in self.store.list_areas(venue_id).iter().enumerate() {
            for (booth_index, booth) in self.store.list_booths(area.id).iter().enumerate() {
                let number = format!("{:02}-{:03}", area_index + 1, booth_index + 1);
                self.store.write_booth_number(booth.id, number)?;
                renumbered += 1;
            }
        }
        tracing::info!(venue_id, renumbered, "booth numbers regenerated");
        Ok(renumbered)
    }

    fn require_venue(&self, venue_id: i64) -> AppResult<()> {
        if self.store.find_venue(venue_id).is_none() {
            return Err(AppError::new(ErrorCode::VenueNotFound));
        }
        Ok(())
    }
}
