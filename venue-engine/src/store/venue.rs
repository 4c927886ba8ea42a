//! Venue store operations

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Venue, VenueCreate, VenueUpdate};

use crate::utils::validation;

use super::VenueStore;

impl VenueStore {
    pub fn create_venue(&self, data: VenueCreate) -> AppResult<Venue> {
        let now = Self::now();
        let venue = Venue {
            id: self.alloc_id(),
            festival_id: data.festival_id,
            name: data.name,
            capacity: data.capacity,
            facility_type: data.facility_type,
            latitude: data.latitude,
            longitude: data.longitude,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };
        validation::validate_venue(&venue)?;
        self.venues.insert(venue.id, venue.clone());
        tracing::debug!(venue_id = venue.id, name = %venue.name, "venue created");
        Ok(venue)
    }

    pub fn find_venue(&self, id: i64) -> Option<Venue> {
        self.venues.get(&id).map(|v| v.clone())
    }

    pub fn list_venues(&self) -> Vec<Venue> {
        let mut venues: Vec<Venue> = self.venues.iter().map(|e| e.value().clone()).collect();
        venues.sort_by_key(|v| v.id);
        venues
    }

    pub fn update_venue(&self, id: i64, data: VenueUpdate) -> AppResult<Venue> {
        let current = self
            .find_venue(id)
            .ok_or_else(|| AppError::new(ErrorCode::VenueNotFound))?;

        let updated = Venue {
            id: current.id,
            festival_id: current.festival_id,
            name: data.name.unwrap_or(current.name),
            capacity: data.capacity.unwrap_or(current.capacity),
            facility_type: data.facility_type.unwrap_or(current.facility_type),
            latitude: data.latitude.or(current.latitude),
            longitude: data.longitude.or(current.longitude),
            created_at: current.created_at,
            updated_at: Some(Self::now()),
        };
        validation::validate_venue(&updated)?;

        match self.venues.get_mut(&id) {
            Some(mut entry) => {
                *entry = updated.clone();
                Ok(updated)
            }
            None => Err(AppError::new(ErrorCode::VenueNotFound)),
        }
    }

    /// Delete a venue, cascading to its areas, their booths, and its
    /// layout elements
    pub fn delete_venue(&self, id: i64) -> AppResult<bool> {
        if self.venues.remove(&id).is_none() {
            return Err(AppError::new(ErrorCode::VenueNotFound));
        }

        let area_ids: Vec<i64> = self
            .areas
            .iter()
            .filter(|e| e.value().venue_id == id)
            .map(|e| *e.key())
            .collect();

        self.booths
            .retain(|_, booth| !area_ids.contains(&booth.venue_area_id));
        self.areas.retain(|_, area| area.venue_id != id);
        self.elements.retain(|_, element| element.venue_id != id);

        tracing::debug!(venue_id = id, cascaded_areas = area_ids.len(), "venue deleted");
        Ok(true)
    }
}
