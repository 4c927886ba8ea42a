//! Write-time validation
//!
//! Centralized text length constants and entity validators. The store runs
//! these before writing; a failure reports every offending field at once
//! and no state is applied.

use shared::error::{AppError, AppResult};
use shared::models::{Booth, LayoutElement, Venue, VenueArea};

// ── Limits ──────────────────────────────────────────────────────────

/// Entity names: venue, area, booth, layout element
pub const MAX_NAME_LEN: usize = 200;

/// Notes and free-form requirement text
pub const MAX_TEXT_LEN: usize = 500;

/// Display color strings (hex codes and editor presets)
pub const MAX_COLOR_LEN: usize = 32;

/// Booth number strings
pub const MAX_BOOTH_NUMBER_LEN: usize = 16;

// ── Field error accumulator ─────────────────────────────────────────

/// Collects field-level failures so a write reports them all at once
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: Vec<(&'static str, String)>,
}

impl FieldErrors {
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push((field, message.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> AppResult<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation_fields(self.errors))
        }
    }
}

// ── Shared field checks ─────────────────────────────────────────────

fn check_required_text(errs: &mut FieldErrors, field: &'static str, value: &str, max_len: usize) {
    if value.trim().is_empty() {
        errs.push(field, "must not be empty");
    } else if value.len() > max_len {
        errs.push(
            field,
            format!("is too long ({} chars, max {max_len})", value.len()),
        );
    }
}

fn check_optional_text(
    errs: &mut FieldErrors,
    field: &'static str,
    value: Option<&str>,
    max_len: usize,
) {
    if let Some(v) = value
        && v.len() > max_len
    {
        errs.push(
            field,
            format!("is too long ({} chars, max {max_len})", v.len()),
        );
    }
}

fn check_dimensions(errs: &mut FieldErrors, width: f64, height: f64) {
    if !width.is_finite() || width <= 0.0 {
        errs.push("width", "must be greater than 0");
    }
    if !height.is_finite() || height <= 0.0 {
        errs.push("height", "must be greater than 0");
    }
}

fn check_rotation(errs: &mut FieldErrors, rotation: Option<f64>) {
    if let Some(deg) = rotation
        && !(0.0..=360.0).contains(&deg)
    {
        errs.push("rotation", "must be between 0 and 360");
    }
}

// ── Entity validators ───────────────────────────────────────────────

pub fn validate_venue(venue: &Venue) -> AppResult<()> {
    let mut errs = FieldErrors::default();
    check_required_text(&mut errs, "name", &venue.name, MAX_NAME_LEN);
    if venue.capacity <= 0 {
        errs.push("capacity", "must be greater than 0");
    }
    match (venue.latitude, venue.longitude) {
        (Some(lat), Some(lon)) => {
            if !(-90.0..=90.0).contains(&lat) {
                errs.push("latitude", "must be between -90 and 90");
            }
            if !(-180.0..=180.0).contains(&lon) {
                errs.push("longitude", "must be between -180 and 180");
            }
        }
        (None, None) => {}
        _ => errs.push("coordinates", "latitude and longitude must be set together"),
    }
    errs.into_result()
}

pub fn validate_area(area: &VenueArea) -> AppResult<()> {
    let mut errs = FieldErrors::default();
    check_required_text(&mut errs, "name", &area.name, MAX_NAME_LEN);
    check_dimensions(&mut errs, area.width, area.height);
    check_rotation(&mut errs, area.rotation);
    if let Some(capacity) = area.capacity
        && capacity < 0
    {
        errs.push("capacity", "must not be negative");
    }
    errs.into_result()
}

pub fn validate_booth(booth: &Booth) -> AppResult<()> {
    let mut errs = FieldErrors::default();
    check_required_text(&mut errs, "name", &booth.name, MAX_NAME_LEN);
    check_required_text(
        &mut errs,
        "booth_number",
        &booth.booth_number,
        MAX_BOOTH_NUMBER_LEN,
    );
    check_dimensions(&mut errs, booth.width, booth.height);
    check_rotation(&mut errs, booth.rotation);
    check_optional_text(
        &mut errs,
        "special_requirements",
        booth.special_requirements.as_deref(),
        MAX_TEXT_LEN,
    );
    errs.into_result()
}

pub fn validate_element(element: &LayoutElement) -> AppResult<()> {
    let mut errs = FieldErrors::default();
    check_required_text(&mut errs, "name", &element.name, MAX_NAME_LEN);
    check_dimensions(&mut errs, element.width, element.height);
    check_rotation(&mut errs, element.rotation);
    check_optional_text(&mut errs, "color", element.color.as_deref(), MAX_COLOR_LEN);
    if element.layer < 0 {
        errs.push("layer", "must not be negative");
    }
    errs.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{AreaType, FacilityType};

    fn venue() -> Venue {
        Venue {
            id: 1,
            festival_id: 1,
            name: "公園会場".to_string(),
            capacity: 500,
            facility_type: FacilityType::Park,
            latitude: None,
            longitude: None,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_validate_venue_reports_all_fields() {
        let mut v = venue();
        v.name = "".to_string();
        v.capacity = 0;
        v.latitude = Some(99.0);
        v.longitude = Some(500.0);

        let err = validate_venue(&v).unwrap_err();
        let details = err.details.unwrap();
        assert_eq!(details.len(), 4);
        assert!(details.contains_key("name"));
        assert!(details.contains_key("capacity"));
        assert!(details.contains_key("latitude"));
        assert!(details.contains_key("longitude"));
    }

    #[test]
    fn test_validate_venue_coordinates_pair() {
        let mut v = venue();
        v.latitude = Some(35.0);
        let err = validate_venue(&v).unwrap_err();
        assert!(err.details.unwrap().contains_key("coordinates"));

        v.longitude = Some(139.0);
        assert!(validate_venue(&v).is_ok());
    }

    #[test]
    fn test_validate_area_geometry() {
        let mut area = VenueArea {
            id: 1,
            venue_id: 1,
            name: "出店エリア".to_string(),
            area_type: AreaType::VendorArea,
            width: 0.0,
            height: -5.0,
            x_position: -10.0,
            y_position: 0.0,
            rotation: Some(400.0),
            capacity: Some(-1),
            created_at: None,
            updated_at: None,
        };
        let err = validate_area(&area).unwrap_err();
        let details = err.details.unwrap();
        assert_eq!(details.len(), 4);

        area.width = 30.0;
        area.height = 20.0;
        area.rotation = Some(90.0);
        area.capacity = Some(0);
        // Negative positions are fine; only sizes must be positive.
        assert!(validate_area(&area).is_ok());
    }
}
