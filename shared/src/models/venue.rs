//! Venue Model (会場)

use serde::{Deserialize, Serialize};

use crate::geometry;

/// Facility type of a venue site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FacilityType {
    Indoor,
    Outdoor,
    Mixed,
    Pavilion,
    Arena,
    Stadium,
    Park,
    ConventionCenter,
}

/// Venue entity - top-level physical site owned by a festival
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    /// Owning festival
    pub festival_id: i64,
    pub name: String,
    /// Maximum visitor capacity
    pub capacity: i32,
    pub facility_type: FacilityType,
    /// Geocoded location; both set or both absent
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Venue {
    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }

    /// Great-circle distance to another venue in km, when both are geocoded
    pub fn distance_from(&self, other: &Venue) -> Option<f64> {
        let (lat1, lon1) = self.coordinates()?;
        let (lat2, lon2) = other.coordinates()?;
        Some(geometry::great_circle_km(lat1, lon1, lat2, lon2))
    }
}

/// Create venue payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueCreate {
    pub festival_id: i64,
    pub name: String,
    pub capacity: i32,
    pub facility_type: FacilityType,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Update venue payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VenueUpdate {
    pub name: Option<String>,
    pub capacity: Option<i32>,
    pub facility_type: Option<FacilityType>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(lat: Option<f64>, lon: Option<f64>) -> Venue {
        Venue {
            id: 1,
            festival_id: 1,
            name: "会場A".to_string(),
            capacity: 500,
            facility_type: FacilityType::Park,
            latitude: lat,
            longitude: lon,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_coordinates_both_or_neither() {
        assert!(venue(Some(35.0), Some(139.0)).has_coordinates());
        assert!(!venue(Some(35.0), None).has_coordinates());
        assert!(!venue(None, None).has_coordinates());
        assert_eq!(venue(Some(35.0), None).coordinates(), None);
    }

    #[test]
    fn test_distance_from_requires_geocoding() {
        let tokyo = venue(Some(35.681236), Some(139.767125));
        let osaka = venue(Some(34.702485), Some(135.495951));
        let nowhere = venue(None, None);

        let km = tokyo.distance_from(&osaka).unwrap();
        assert!((km - 403.0).abs() < 5.0, "distance was {}", km);
        assert_eq!(tokyo.distance_from(&nowhere), None);
        assert_eq!(nowhere.distance_from(&osaka), None);
    }
}
