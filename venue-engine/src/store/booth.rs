//! Booth store operations

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Booth, BoothCreate, BoothStatus, BoothUpdate};

use crate::utils::validation;

use super::VenueStore;

impl VenueStore {
    pub fn create_booth(&self, data: BoothCreate) -> AppResult<Booth> {
        if !self.areas.contains_key(&data.venue_area_id) {
            return Err(AppError::new(ErrorCode::AreaNotFound));
        }
        if self.booth_number_taken(data.festival_id, &data.booth_number, None) {
            return Err(AppError::new(ErrorCode::BoothNumberTaken)
                .with_detail("booth_number", data.booth_number.clone()));
        }

        let now = Self::now();
        let booth = Booth {
            id: self.alloc_id(),
            venue_area_id: data.venue_area_id,
            festival_id: data.festival_id,
            vendor_application_id: None,
            name: data.name,
            booth_number: data.booth_number,
            size: data.size,
            width: data.width,
            height: data.height,
            x_position: data.x_position,
            y_position: data.y_position,
            rotation: data.rotation,
            status: BoothStatus::Available,
            power_required: data.power_required,
            water_required: data.water_required,
            special_requirements: data.special_requirements,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };
        validation::validate_booth(&booth)?;
        self.booths.insert(booth.id, booth.clone());
        tracing::debug!(
            booth_id = booth.id,
            booth_number = %booth.booth_number,
            "booth created"
        );
        Ok(booth)
    }

    pub fn find_booth(&self, id: i64) -> Option<Booth> {
        self.booths.get(&id).map(|b| b.clone())
    }

    /// Booths of an area in stored order
    pub fn list_booths(&self, venue_area_id: i64) -> Vec<Booth> {
        let mut booths: Vec<Booth> = self
            .booths
            .iter()
            .filter(|e| e.value().venue_area_id == venue_area_id)
            .map(|e| e.value().clone())
            .collect();
        booths.sort_by_key(|b| b.id);
        booths
    }

    /// All booths across a venue's areas, in stored order
    pub fn list_booths_in_venue(&self, venue_id: i64) -> Vec<Booth> {
        let area_ids: Vec<i64> = self
            .areas
            .iter()
            .filter(|e| e.value().venue_id == venue_id)
            .map(|e| *e.key())
            .collect();

        let mut booths: Vec<Booth> = self
            .booths
            .iter()
            .filter(|e| area_ids.contains(&e.value().venue_area_id))
            .map(|e| e.value().clone())
            .collect();
        booths.sort_by_key(|b| b.id);
        booths
    }

    pub fn update_booth(&self, id: i64, data: BoothUpdate) -> AppResult<Booth> {
        let current = self
            .find_booth(id)
            .ok_or_else(|| AppError::new(ErrorCode::BoothNotFound))?;

        if let Some(number) = &data.booth_number
            && self.booth_number_taken(current.festival_id, number, Some(id))
        {
            return Err(AppError::new(ErrorCode::BoothNumberTaken)
                .with_detail("booth_number", number.clone()));
        }

        let updated = Booth {
            id: current.id,
            venue_area_id: current.venue_area_id,
            festival_id: current.festival_id,
            vendor_application_id: current.vendor_application_id,
            name: data.name.unwrap_or(current.name),
            booth_number: data.booth_number.unwrap_or(current.booth_number),
            size: data.size.unwrap_or(current.size),
            width: data.width.unwrap_or(current.width),
            height: data.height.unwrap_or(current.height),
            x_position: data.x_position.unwrap_or(current.x_position),
            y_position: data.y_position.unwrap_or(current.y_position),
            rotation: data.rotation.or(current.rotation),
            status: data.status.unwrap_or(current.status),
            power_required: data.power_required.unwrap_or(current.power_required),
            water_required: data.water_required.unwrap_or(current.water_required),
            special_requirements: data
                .special_requirements
                .or(current.special_requirements),
            created_at: current.created_at,
            updated_at: Some(Self::now()),
        };
        validation::validate_booth(&updated)?;

        match self.booths.get_mut(&id) {
            Some(mut entry) => {
                *entry = updated.clone();
                Ok(updated)
            }
            None => Err(AppError::new(ErrorCode::BoothNotFound)),
        }
    }

    pub fn delete_booth(&self, id: i64) -> AppResult<bool> {
        if self.booths.remove(&id).is_none() {
            return Err(AppError::new(ErrorCode::BoothNotFound));
        }
        Ok(true)
    }

    /// Run a transition closure under the booth's entry guard.
    ///
    /// The guard spans the whole read-validate-write, so two concurrent
    /// transitions on the same booth serialize; `updated_at` is stamped
    /// only when the closure reports a change.
    pub fn with_booth_mut(
        &self,
        id: i64,
        f: impl FnOnce(&mut Booth) -> bool,
    ) -> AppResult<bool> {
        let mut entry = self
            .booths
            .get_mut(&id)
            .ok_or_else(|| AppError::new(ErrorCode::BoothNotFound))?;

        let changed = f(entry.value_mut());
        if changed {
            entry.value_mut().updated_at = Some(Self::now());
        }
        Ok(changed)
    }

    /// Overwrite a booth number without the per-festival uniqueness scan.
    ///
    /// Only the batch renumbering uses this; it rewrites every number in a
    /// venue, so mid-pass collisions with not-yet-renumbered booths are
    /// expected.
    pub(crate) fn write_booth_number(&self, id: i64, number: String) -> AppResult<()> {
        let mut entry = self
            .booths
            .get_mut(&id)
            .ok_or_else(|| AppError::new(ErrorCode::BoothNotFound))?;
        entry.value_mut().booth_number = number;
        entry.value_mut().updated_at = Some(Self::now());
        Ok(())
    }

    fn booth_number_taken(&self, festival_id: i64, number: &str, exclude: Option<i64>) -> bool {
        self.booths.iter().any(|e| {
            let b = e.value();
            b.festival_id == festival_id
                && b.booth_number == number
                && Some(b.id) != exclude
        })
    }
}
