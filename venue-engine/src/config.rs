//! Engine configuration
//!
//! Knobs of the layout services. Defaults mirror the layout editor's
//! built-in values; callers override them at service construction.

use shared::models::ElementType;

/// A layout element seeded by `apply_default_layout`
#[derive(Debug, Clone)]
pub struct DefaultElement {
    pub name: &'static str,
    pub element_type: ElementType,
    pub x_position: f64,
    pub y_position: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

/// Configuration of the layout services
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Offset applied to both axes when cloning an element
    pub clone_offset: f64,
    /// Suffix appended to a cloned element's name when no explicit name
    /// is given
    pub copy_suffix: &'static str,
    /// Elements seeded into a fresh venue map
    pub default_elements: Vec<DefaultElement>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            clone_offset: 20.0,
            copy_suffix: " (コピー)",
            default_elements: vec![
                DefaultElement {
                    name: "メインエントランス",
                    element_type: ElementType::Entrance,
                    x_position: 50.0,
                    y_position: 400.0,
                    width: 100.0,
                    height: 40.0,
                    color: "#4A90D9",
                },
                DefaultElement {
                    name: "メインステージ",
                    element_type: ElementType::Stage,
                    x_position: 150.0,
                    y_position: 50.0,
                    width: 200.0,
                    height: 100.0,
                    color: "#8B4513",
                },
                DefaultElement {
                    name: "お手洗い",
                    element_type: ElementType::Restroom,
                    x_position: 400.0,
                    y_position: 400.0,
                    width: 60.0,
                    height: 40.0,
                    color: "#7ED321",
                },
            ],
        }
    }
}
