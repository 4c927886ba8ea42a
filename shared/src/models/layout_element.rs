//! Layout Element Model (レイアウト要素)
//!
//! A placed, rotatable, layered object on the venue map: stages, gates,
//! decorations. Unlike booths, elements carry no assignment state; they
//! exist for the venue map editor.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::geometry::{self, Bounds, Point};

/// Element type placed on the venue map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementType {
    // Structural
    Stage,
    Entrance,
    Exit,
    Gate,
    Fence,
    Barrier,
    Path,
    Road,
    Tent,
    Canopy,
    // Functional
    Restroom,
    FirstAidPost,
    InfoDesk,
    FoodStall,
    TicketBooth,
    Seating,
    Bench,
    Table,
    Parking,
    PowerSource,
    WaterStation,
    TrashBin,
    RecyclingStation,
    Speaker,
    Light,
    // Decorative
    Sign,
    Banner,
    Flag,
    Garden,
    Custom,
}

/// Broad grouping used by the map editor's palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    Structural,
    Functional,
    Decorative,
}

impl ElementType {
    pub fn category(&self) -> ElementCategory {
        match self {
            Self::Stage
            | Self::Entrance
            | Self::Exit
            | Self::Gate
            | Self::Fence
            | Self::Barrier
            | Self::Path
            | Self::Road
            | Self::Tent
            | Self::Canopy => ElementCategory::Structural,
            Self::Restroom
            | Self::FirstAidPost
            | Self::InfoDesk
            | Self::FoodStall
            | Self::TicketBooth
            | Self::Seating
            | Self::Bench
            | Self::Table
            | Self::Parking
            | Self::PowerSource
            | Self::WaterStation
            | Self::TrashBin
            | Self::RecyclingStation
            | Self::Speaker
            | Self::Light => ElementCategory::Functional,
            Self::Sign | Self::Banner | Self::Flag | Self::Garden | Self::Custom => {
                ElementCategory::Decorative
            }
        }
    }
}

/// Layout element entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutElement {
    pub id: i64,
    /// Owning venue
    pub venue_id: i64,
    pub element_type: ElementType,
    pub name: String,
    pub x_position: f64,
    pub y_position: f64,
    pub width: f64,
    pub height: f64,
    /// Degrees clockwise, `[0, 360)`; absent means unrotated
    pub rotation: Option<f64>,
    /// Display color (hex string, editor-defined)
    pub color: Option<String>,
    /// Z-order; higher draws on top
    pub layer: i32,
    /// Locked elements refuse edits regardless of actor permissions
    pub locked: bool,
    pub visible: bool,
    /// Opaque editor metadata, JSON-encoded
    pub properties: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl LayoutElement {
    // ==================== Mutations ====================

    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x_position = x;
        self.y_position = y;
    }

    /// Resize; rejects non-positive dimensions without partial state
    pub fn resize_to(&mut self, width: f64, height: f64) -> bool {
        if width <= 0.0 || height <= 0.0 {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    /// Rotate, normalizing into `[0, 360)`: -10 is stored as 350
    pub fn rotate_to(&mut self, deg: f64) {
        self.rotation = Some(geometry::normalize_rotation(deg));
    }

    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    pub fn toggle_lock(&mut self) {
        self.locked = !self.locked;
    }

    // ==================== Properties bag ====================

    /// Parsed properties bag. Missing or malformed JSON yields an empty map.
    pub fn properties(&self) -> Map<String, Value> {
        self.properties
            .as_deref()
            .and_then(|raw| serde_json::from_str::<Map<String, Value>>(raw).ok())
            .unwrap_or_default()
    }

    /// Replace the properties bag
    pub fn set_properties(&mut self, props: &Map<String, Value>) {
        self.properties = serde_json::to_string(props).ok();
    }

    // ==================== Geometry ====================

    pub fn total_area(&self) -> f64 {
        geometry::rect_area(self.width, self.height)
    }

    pub fn center_point(&self) -> Point {
        geometry::center(self.x_position, self.y_position, self.width, self.height)
    }

    pub fn corners(&self) -> [Point; 4] {
        geometry::corners(
            self.x_position,
            self.y_position,
            self.width,
            self.height,
            self.rotation.unwrap_or(0.0),
        )
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

    /// Strict overlap against another element: elements sharing only an
    /// edge do not overlap. Hidden elements and self-comparison never
    /// overlap.
    pub fn overlaps_with(&self, other: &LayoutElement) -> bool {
        if self.id == other.id || !self.visible || !other.visible {
            return false;
        }
        geometry::overlaps_strict(&self.bounding_box(), &other.bounding_box())
    }

    /// Center-to-center distance, rounded to 2 decimal places
    pub fn distance_to(&self, other: &LayoutElement) -> f64 {
        geometry::distance(self.center_point(), other.center_point())
    }
}

/// Axis-aligned bounds over the visible elements
///
/// All-zero bounds when no element is visible, so an empty venue map never
/// errors.
pub fn visible_bounds(elements: &[LayoutElement]) -> Bounds {
    let mut iter = elements.iter().filter(|e| e.visible);
    let Some(first) = iter.next() else {
        return Bounds::ZERO;
    };

    let mut bounds = first.bounding_box();
    for element in iter {
        let b = element.bounding_box();
        bounds.min_x = bounds.min_x.min(b.min_x);
        bounds.min_y = bounds.min_y.min(b.min_y);
        bounds.max_x = bounds.max_x.max(b.max_x);
        bounds.max_y = bounds.max_y.max(b.max_y);
    }
    bounds
}

/// Create layout element payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutElementCreate {
    pub venue_id: i64,
    pub element_type: ElementType,
    pub name: String,
    pub x_position: f64,
    pub y_position: f64,
    pub width: f64,
    pub height: f64,
    pub rotation: Option<f64>,
    pub color: Option<String>,
    #[serde(default)]
    pub layer: i32,
    #[serde(default)]
    pub locked: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
    pub properties: Option<String>,
}

fn default_visible() -> bool {
    true
}

/// Update layout element payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutElementUpdate {
    pub element_type: Option<ElementType>,
    pub name: Option<String>,
    pub x_position: Option<f64>,
    pub y_position: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub color: Option<String>,
    pub layer: Option<i32>,
    pub locked: Option<bool>,
    pub visible: Option<bool>,
    pub properties: Option<String>,
}
