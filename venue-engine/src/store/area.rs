//! Venue area store operations

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{VenueArea, VenueAreaCreate, VenueAreaUpdate};

use crate::utils::validation;

use super::VenueStore;

impl VenueStore {
    pub fn create_area(&self, data: VenueAreaCreate) -> AppResult<VenueArea> {
        if !self.venues.contains_key(&data.venue_id) {
            return Err(AppError::new(ErrorCode::VenueNotFound));
        }

        let now = Self::now();
        let area = VenueArea {
            id: self.alloc_id(),
            venue_id: data.venue_id,
            name: data.name,
            area_type: data.area_type,
            width: data.width,
            height: data.height,
            x_position: data.x_position,
            y_position: data.y_position,
            rotation: data.rotation,
            capacity: data.capacity,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };
        validation::validate_area(&area)?;
        self.areas.insert(area.id, area.clone());
        tracing::debug!(area_id = area.id, venue_id = area.venue_id, "area created");
        Ok(area)
    }

    pub fn find_area(&self, id: i64) -> Option<VenueArea> {
        self.areas.get(&id).map(|a| a.clone())
    }

    /// Areas of a venue in stored order
    pub fn list_areas(&self, venue_id: i64) -> Vec<VenueArea> {
        let mut areas: Vec<VenueArea> = self
            .areas
            .iter()
            .filter(|e| e.value().venue_id == venue_id)
            .map(|e| e.value().clone())
            .collect();
        areas.sort_by_key(|a| a.id);
        areas
    }

    pub fn update_area(&self, id: i64, data: VenueAreaUpdate) -> AppResult<VenueArea> {
        let current = self
            .find_area(id)
            .ok_or_else(|| AppError::new(ErrorCode::AreaNotFound))?;

        let updated = VenueArea {
            id: current.id,
            venue_id: current.venue_id,
            name: data.name.unwrap_or(current.name),
            area_type: data.area_type.unwrap_or(current.area_type),
            width: data.width.unwrap_or(current.width),
            height: data.height.unwrap_or(current.height),
            x_position: data.x_position.unwrap_or(current.x_position),
            y_position: data.y_position.unwrap_or(current.y_position),
            rotation: data.rotation.or(current.rotation),
            capacity: data.capacity.or(current.capacity),
            created_at: current.created_at,
            updated_at: Some(Self::now()),
        };
        validation::validate_area(&updated)?;

        match self.areas.get_mut(&id) {
            Some(mut entry) => {
                *entry = updated.clone();
                Ok(updated)
            }
            None => Err(AppError::new(ErrorCode::AreaNotFound)),
        }
    }

    /// Delete an area, cascading to its booths
    pub fn delete_area(&self, id: i64) -> AppResult<bool> {
        if self.areas.remove(&id).is_none() {
            return Err(AppError::new(ErrorCode::AreaNotFound));
        }
        self.booths.retain(|_, booth| booth.venue_area_id != id);
        tracing::debug!(area_id = id, "area deleted");
        Ok(true)
    }
}
