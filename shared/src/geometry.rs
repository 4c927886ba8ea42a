//! 2D geometry primitives for venue layout
//!
//! All coordinates use the layout editor's top-left origin convention:
//! x increases rightward, y increases downward, and rotation is measured
//! clockwise in degrees about the rectangle center.
//!
//! Two overlap tests exist on purpose: layout elements use the strict
//! (boundary-exclusive) test, booths and areas the inclusive one. See
//! DESIGN.md for the open question behind the split.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers (Haversine)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A 2D point in layout coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounds of a (possibly rotated) rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// All-zero bounds, used for venues with no visible elements
    pub const ZERO: Self = Self {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 0.0,
        max_y: 0.0,
    };

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Whether `other` lies fully inside these bounds. Touching edges count
    /// as contained.
    pub fn contains(&self, other: &Bounds) -> bool {
        other.min_x >= self.min_x
            && other.min_y >= self.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }
}

/// Round to 2 decimal places, the display precision of the layout editor
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Normalize a rotation in degrees into `[0, 360)`
///
/// Negative inputs wrap: -10 becomes 350, 370 becomes 10.
pub fn normalize_rotation(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Center of a rectangle given its top-left corner and size
pub fn center(x: f64, y: f64, width: f64, height: f64) -> Point {
    Point::new(x + width / 2.0, y + height / 2.0)
}

/// Rectangle area
pub fn rect_area(width: f64, height: f64) -> f64 {
    width * height
}

/// World-space corners of a rectangle rotated clockwise about its center
///
/// Returned in top-left, top-right, bottom-right, bottom-left order for the
/// unrotated case. Rotation 0 short-circuits to the axis-aligned corners so
/// unrotated rectangles accumulate no trigonometric error.
pub fn corners(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> [Point; 4] {
    let rotation = normalize_rotation(rotation);
    if rotation == 0.0 {
        return [
            Point::new(x, y),
            Point::new(x + width, y),
            Point::new(x + width, y + height),
            Point::new(x, y + height),
        ];
    }

    let c = center(x, y, width, height);
    let (sin, cos) = rotation.to_radians().sin_cos();
    let half_w = width / 2.0;
    let half_h = height / 2.0;

    // The standard rotation matrix turns clockwise under a y-down axis.
    [
        (-half_w, -half_h),
        (half_w, -half_h),
        (half_w, half_h),
        (-half_w, half_h),
    ]
    .map(|(dx, dy)| Point::new(c.x + dx * cos - dy * sin, c.y + dx * sin + dy * cos))
}

/// Axis-aligned bounding box of a possibly rotated rectangle
pub fn bounding_box(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Bounds {
    if normalize_rotation(rotation) == 0.0 {
        return Bounds {
            min_x: x,
            min_y: y,
            max_x: x + width,
            max_y: y + height,
        };
    }

    let pts = corners(x, y, width, height, rotation);
    let mut bounds = Bounds {
        min_x: f64::INFINITY,
        min_y: f64::INFINITY,
        max_x: f64::NEG_INFINITY,
        max_y: f64::NEG_INFINITY,
    };
    for p in pts {
        bounds.min_x = bounds.min_x.min(p.x);
        bounds.min_y = bounds.min_y.min(p.y);
        bounds.max_x = bounds.max_x.max(p.x);
        bounds.max_y = bounds.max_y.max(p.y);
    }
    bounds
}

/// Strict rectangle overlap: rectangles sharing only an edge do NOT overlap
///
/// Used by layout elements, which may legitimately touch.
pub fn overlaps_strict(a: &Bounds, b: &Bounds) -> bool {
    !(a.max_x <= b.min_x || b.max_x <= a.min_x || a.max_y <= b.min_y || b.max_y <= a.min_y)
}

/// Inclusive rectangle overlap: rectangles sharing an edge DO overlap
///
/// Used by booths and areas, which must not touch.
pub fn overlaps_inclusive(a: &Bounds, b: &Bounds) -> bool {
    !(a.max_x < b.min_x || b.max_x < a.min_x || a.max_y < b.min_y || b.max_y < a.min_y)
}

/// Euclidean distance between two points, rounded to 2 decimal places
pub fn distance(a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    round2((dx * dx + dy * dy).sqrt())
}

/// Great-circle distance between two geocoded points in kilometers
/// (Haversine), rounded to 2 decimal places
pub fn great_circle_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    round2(EARTH_RADIUS_KM * c)
}
