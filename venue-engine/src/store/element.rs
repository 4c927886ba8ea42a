//! Layout element store operations

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{LayoutElement, LayoutElementCreate, LayoutElementUpdate};

use crate::utils::validation;

use super::VenueStore;

impl VenueStore {
    pub fn create_element(&self, data: LayoutElementCreate) -> AppResult<LayoutElement> {
        if !self.venues.contains_key(&data.venue_id) {
            return Err(AppError::new(ErrorCode::VenueNotFound));
        }

        let now = Self::now();
        let element = LayoutElement {
            id: self.alloc_id(),
            venue_id: data.venue_id,
            element_type: data.element_type,
            name: data.name,
            x_position: data.x_position,
            y_position: data.y_position,
            width: data.width,
            height: data.height,
            rotation: data.rotation,
            color: data.color,
            layer: data.layer,
            locked: data.locked,
            visible: data.visible,
            properties: data.properties,
            created_at: Some(now.clone()),
            updated_at: Some(now),
        };
        validation::validate_element(&element)?;
        self.elements.insert(element.id, element.clone());
        tracing::debug!(
            element_id = element.id,
            venue_id = element.venue_id,
            "layout element created"
        );
        Ok(element)
    }

    pub fn find_element(&self, id: i64) -> Option<LayoutElement> {
        self.elements.get(&id).map(|e| e.clone())
    }

    /// Elements of a venue in stored order
    pub fn list_elements(&self, venue_id: i64) -> Vec<LayoutElement> {
        let mut elements: Vec<LayoutElement> = self
            .elements
            .iter()
            .filter(|e| e.value().venue_id == venue_id)
            .map(|e| e.value().clone())
            .collect();
        elements.sort_by_key(|e| e.id);
        elements
    }

    pub fn update_element(&self, id: i64, data: LayoutElementUpdate) -> AppResult<LayoutElement> {
        let current = self
            .find_element(id)
            .ok_or_else(|| AppError::new(ErrorCode::ElementNotFound))?;

        let updated = LayoutElement {
            id: current.id,
            venue_id: current.venue_id,
            element_type: data.element_type.unwrap_or(current.element_type),
            name: data.name.unwrap_or(current.name),
            x_position: data.x_position.unwrap_or(current.x_position),
            y_position: data.y_position.unwrap_or(current.y_position),
            width: data.width.unwrap_or(current.width),
            height: data.height.unwrap_or(current.height),
            rotation: data.rotation.or(current.rotation),
            color: data.color.or(current.color),
            layer: data.layer.unwrap_or(current.layer),
            locked: data.locked.unwrap_or(current.locked),
            visible: data.visible.unwrap_or(current.visible),
            properties: data.properties.or(current.properties),
            created_at: current.created_at,
            updated_at: Some(Self::now()),
        };
        validation::validate_element(&updated)?;

        match self.elements.get_mut(&id) {
            Some(mut entry) => {
                *entry = updated.clone();
                Ok(updated)
            }
            None => Err(AppError::new(ErrorCode::ElementNotFound)),
        }
    }

    pub fn delete_element(&self, id: i64) -> AppResult<bool> {
        if self.elements.remove(&id).is_none() {
            return Err(AppError::new(ErrorCode::ElementNotFound));
        }
        Ok(true)
    }
}
