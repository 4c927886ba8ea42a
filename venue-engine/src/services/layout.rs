//! Layout editing service
//!
//! Editing operations that need sibling context or authorization: moving,
//! resizing, rotating, z-order changes, cloning, property updates, and the
//! default-layout seeding. Mutations check the element's `locked` flag
//! first, then the venue-level policy; `locked` wins regardless of the
//! actor's permissions.

use std::sync::Arc;

use serde_json::{Map, Value};

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{LayoutElement, LayoutElementCreate, LayoutElementUpdate};

use crate::config::LayoutConfig;
use crate::permissions::{Actor, FestivalPolicy};
use crate::store::VenueStore;

pub struct LayoutService {
    store: Arc<VenueStore>,
    policy: Arc<dyn FestivalPolicy>,
    config: LayoutConfig,
}

impl LayoutService {
    pub fn new(store: Arc<VenueStore>, policy: Arc<dyn FestivalPolicy>) -> Self {
        Self::with_config(store, policy, LayoutConfig::default())
    }

    pub fn with_config(
        store: Arc<VenueStore>,
        policy: Arc<dyn FestivalPolicy>,
        config: LayoutConfig,
    ) -> Self {
        Self {
            store,
            policy,
            config,
        }
    }

    // ==================== Authorization queries ====================

    /// Whether an actor may modify a layout element. A locked element is
    /// unmodifiable regardless of permissions.
    pub fn can_modify_element(&self, actor: &Actor, element_id: i64) -> AppResult<bool> {
        let element = self.require_element(element_id)?;
        if element.locked {
            return Ok(false);
        }
        self.venue_permitted(actor, element.venue_id)
    }

    /// Whether an actor may modify an area; delegates entirely to the
    /// owning venue's policy
    pub fn can_modify_area(&self, actor: &Actor, area_id: i64) -> AppResult<bool> {
        let area = self
            .store
            .find_area(area_id)
            .ok_or_else(|| AppError::new(ErrorCode::AreaNotFound))?;
        self.venue_permitted(actor, area.venue_id)
    }

    /// Whether an actor may modify a booth; delegates to the festival
    /// policy through the booth's denormalized festival link
    pub fn can_modify_booth(&self, actor: &Actor, booth_id: i64) -> AppResult<bool> {
        let booth = self
            .store
            .find_booth(booth_id)
            .ok_or_else(|| AppError::new(ErrorCode::BoothNotFound))?;
        Ok(self.policy.can_manage_festival(actor, booth.festival_id))
    }

    /// Whether a booth lies fully inside its owning area's bounds.
    ///
    /// Fails closed: a booth whose area is missing never fits.
    pub fn booth_fits_within_area(&self, booth_id: i64) -> AppResult<bool> {
        let booth = self
            .store
            .find_booth(booth_id)
            .ok_or_else(|| AppError::new(ErrorCode::BoothNotFound))?;
        Ok(match self.store.find_area(booth.venue_area_id) {
            Some(area) => booth.fits_within_area(&area),
            None => false,
        })
    }

    // ==================== Element mutations ====================

    pub fn move_element(
        &self,
        actor: &Actor,
        element_id: i64,
        x: f64,
        y: f64,
    ) -> AppResult<LayoutElement> {
        self.authorize_edit(actor, element_id)?;
        self.store.update_element(
            element_id,
            LayoutElementUpdate {
                x_position: Some(x),
                y_position: Some(y),
                ..Default::default()
            },
        )
    }

    pub fn resize_element(
        &self,
        actor: &Actor,
        element_id: i64,
        width: f64,
        height: f64,
    ) -> AppResult<LayoutElement> {
        self.authorize_edit(actor, element_id)?;
        self.store.update_element(
            element_id,
            LayoutElementUpdate {
                width: Some(width),
                height: Some(height),
                ..Default::default()
            },
        )
    }

    /// Rotate an element; any input angle is normalized into `[0, 360)`
    pub fn rotate_element(
        &self,
        actor: &Actor,
        element_id: i64,
        degrees: f64,
    ) -> AppResult<LayoutElement> {
        self.authorize_edit(actor, element_id)?;
        let mut element = self.require_element(element_id)?;
        element.rotate_to(degrees);
        self.store.update_element(
            element_id,
            LayoutElementUpdate {
                rotation: element.rotation,
                ..Default::default()
            },
        )
    }

    pub fn toggle_visibility(&self, actor: &Actor, element_id: i64) -> AppResult<LayoutElement> {
        self.authorize_edit(actor, element_id)?;
        let element = self.require_element(element_id)?;
        self.store.update_element(
            element_id,
            LayoutElementUpdate {
                visible: Some(!element.visible),
                ..Default::default()
            },
        )
    }

    /// Toggle the lock flag. Allowed on locked elements; it is the only way
    /// to unlock one.
    pub fn toggle_lock(&self, actor: &Actor, element_id: i64) -> AppResult<LayoutElement> {
        let element = self.require_element(element_id)?;
        if !self.venue_permitted(actor, element.venue_id)? {
            return Err(AppError::new(ErrorCode::PermissionDenied));
        }
        self.store.update_element(
            element_id,
            LayoutElementUpdate {
                locked: Some(!element.locked),
                ..Default::default()
            },
        )
    }

    /// Replace the element's opaque properties bag
    pub fn update_properties(
        &self,
        actor: &Actor,
        element_id: i64,
        properties: &Map<String, Value>,
    ) -> AppResult<LayoutElement> {
        self.authorize_edit(actor, element_id)?;
        let encoded = serde_json::to_string(properties)?;
        self.store.update_element(
            element_id,
            LayoutElementUpdate {
                properties: Some(encoded),
                ..Default::default()
            },
        )
    }

    // ==================== Z-order ====================

    /// Raise an element above every sibling. The sibling maximum is read at
    /// call time, never cached.
    pub fn bring_to_front(&self, actor: &Actor, element_id: i64) -> AppResult<LayoutElement> {
        self.authorize_edit(actor, element_id)?;
        let element = self.require_element(element_id)?;
        let top = self.top_layer(element.venue_id);
        self.store.update_element(
            element_id,
            LayoutElementUpdate {
                layer: Some(top + 1),
                ..Default::default()
            },
        )
    }

    /// Lower an element below every sibling, clamped at layer 0
    pub fn send_to_back(&self, actor: &Actor, element_id: i64) -> AppResult<LayoutElement> {
        self.authorize_edit(actor, element_id)?;
        let element = self.require_element(element_id)?;
        let bottom = self
            .store
            .list_elements(element.venue_id)
            .iter()
            .map(|e| e.layer)
            .min()
            .unwrap_or(0);
        self.store.update_element(
            element_id,
            LayoutElementUpdate {
                layer: Some((bottom - 1).max(0)),
                ..Default::default()
            },
        )
    }

    // ==================== Cloning ====================

    /// Duplicate an element, offset on both axes, on a new top layer.
    ///
    /// The copy gets a fresh identity and layer; everything else is carried
    /// over. Without an explicit name the source name gains a copy suffix.
    pub fn clone_element(
        &self,
        actor: &Actor,
        element_id: i64,
        new_name: Option<String>,
    ) -> AppResult<LayoutElement> {
        let source = self.require_element(element_id)?;
        if !self.venue_permitted(actor, source.venue_id)? {
            return Err(AppError::new(ErrorCode::PermissionDenied));
        }

        let name =
            new_name.unwrap_or_else(|| format!("{}{}", source.name, self.config.copy_suffix));
        let top = self.top_layer(source.venue_id);

        self.store.create_element(LayoutElementCreate {
            venue_id: source.venue_id,
            element_type: source.element_type,
            name,
            x_position: source.x_position + self.config.clone_offset,
            y_position: source.y_position + self.config.clone_offset,
            width: source.width,
            height: source.height,
            rotation: source.rotation,
            color: source.color,
            layer: top + 1,
            locked: source.locked,
            visible: source.visible,
            properties: source.properties,
        })
    }

    // ==================== Default layout ====================

    /// Seed the venue map with its default elements (main entrance, main
    /// stage, restroom). Idempotent: an element whose type and name already
    /// exist is not seeded again.
    pub fn apply_default_layout(
        &self,
        actor: &Actor,
        venue_id: i64,
    ) -> AppResult<Vec<LayoutElement>> {
        let venue = self
            .store
            .find_venue(venue_id)
            .ok_or_else(|| AppError::new(ErrorCode::VenueNotFound))?;
        if !self.policy.can_manage_venue(actor, &venue) {
            return Err(AppError::new(ErrorCode::PermissionDenied));
        }

        let existing = self.store.list_elements(venue_id);
        let mut seeded = Vec::new();
        for default in &self.config.default_elements {
            let present = existing
                .iter()
                .any(|e| e.element_type == default.element_type && e.name == default.name);
            if present {
                continue;
            }
            seeded.push(self.store.create_element(LayoutElementCreate {
                venue_id,
                element_type: default.element_type,
                name: default.name.to_string(),
                x_position: default.x_position,
                y_position: default.y_position,
                width: default.width,
                height: default.height,
                rotation: None,
                color: Some(default.color.to_string()),
                layer: 0,
                locked: false,
                visible: true,
                properties: None,
            })?);
        }
        tracing::debug!(venue_id, seeded = seeded.len(), "default layout applied");
        Ok(seeded)
    }

    // ==================== Internals ====================

    fn require_element(&self, element_id: i64) -> AppResult<LayoutElement> {
        self.store
            .find_element(element_id)
            .ok_or_else(|| AppError::new(ErrorCode::ElementNotFound))
    }

    fn venue_permitted(&self, actor: &Actor, venue_id: i64) -> AppResult<bool> {
        let venue = self
            .store
            .find_venue(venue_id)
            .ok_or_else(|| AppError::new(ErrorCode::VenueNotFound))?;
        Ok(self.policy.can_manage_venue(actor, &venue))
    }

    /// Authorization gate for element edits: locked wins over any role
    fn authorize_edit(&self, actor: &Actor, element_id: i64) -> AppResult<()> {
        let element = self.require_element(element_id)?;
        if element.locked {
            return Err(AppError::new(ErrorCode::ElementLocked));
        }
        if !self.venue_permitted(actor, element.venue_id)? {
            return Err(AppError::new(ErrorCode::PermissionDenied));
        }
        Ok(())
    }

    fn top_layer(&self, venue_id: i64) -> i32 {
        self.store
            .list_elements(venue_id)
            .iter()
            .map(|e| e.layer)
            .max()
            .unwrap_or(0)
    }
}
