//! Venue-wide aggregation, renumbering, and cascade-delete tests

use std::sync::Arc;

use shared::geometry::Bounds;
use shared::models::{
    ApplicationStatus, AreaType, Booth, BoothCreate, BoothSize, ElementType, FacilityType,
    LayoutElementCreate, LayoutElementUpdate, VendorApplication, VenueArea, VenueAreaCreate,
    VenueCreate, VenueUpdate,
};
use shared::ErrorCode;
use venue_engine::{BoothAssignmentService, MemorySink, VenueService, VenueStore};

fn setup() -> (Arc<VenueStore>, VenueService, i64) {
    let store = Arc::new(VenueStore::new());
    let service = VenueService::new(store.clone());
    let venue = store
        .create_venue(VenueCreate {
            festival_id: 1,
            name: "中央公園会場".to_string(),
            capacity: 500,
            facility_type: FacilityType::Park,
            latitude: None,
            longitude: None,
        })
        .unwrap();
    (store, service, venue.id)
}

fn add_area(store: &VenueStore, venue_id: i64, name: &str, capacity: Option<i32>) -> VenueArea {
    store
        .create_area(VenueAreaCreate {
            venue_id,
            name: name.to_string(),
            area_type: AreaType::VendorArea,
            width: 100.0,
            height: 60.0,
            x_position: 0.0,
            y_position: 0.0,
            rotation: None,
            capacity,
        })
        .unwrap()
}

fn add_booth(store: &VenueStore, area: &VenueArea, number: &str) -> Booth {
    store
        .create_booth(BoothCreate {
            venue_area_id: area.id,
            festival_id: 1,
            name: format!("ブース{number}"),
            booth_number: number.to_string(),
            size: BoothSize::Small,
            width: 3.0,
            height: 3.0,
            x_position: 1.0,
            y_position: 1.0,
            rotation: None,
            power_required: false,
            water_required: false,
            special_requirements: None,
        })
        .unwrap()
}

#[test]
fn test_occupancy_rate_forty_percent_scenario() {
    // Venue capacity 500, one vendor area with 10 booths, 4 assigned.
    let (store, service, venue_id) = setup();
    let area = add_area(&store, venue_id, "出店エリア", Some(20));

    let booths: Vec<Booth> = (1..=10)
        .map(|i| add_booth(&store, &area, &format!("N-{i:03}")))
        .collect();

    let sink = Arc::new(MemorySink::new());
    let assignment = BoothAssignmentService::new(store.clone(), sink);
    for (offset, booth) in booths.iter().take(4).enumerate() {
        let application = VendorApplication {
            id: 50 + offset as i64,
            festival_id: 1,
            user_id: 200 + offset as i64,
            business_name: format!("出店者{offset}"),
            status: ApplicationStatus::Approved,
            created_at: None,
            updated_at: None,
        };
        store.put_vendor_application(application.clone());
        assert!(assignment.assign_booth(booth.id, application.id, None).unwrap());
    }

    assert_eq!(service.occupancy_rate(venue_id).unwrap(), 40.0);
    assert_eq!(service.occupied_booths_count(venue_id).unwrap(), 4);
    assert_eq!(service.available_booths_count(venue_id).unwrap(), 6);

    // The area-level view agrees with the venue-level rollup.
    let area = store.find_area(area.id).unwrap();
    let all = store.list_booths(area.id);
    assert_eq!(area.occupancy_rate(&all), 40.0);
}

#[test]
fn test_occupancy_rate_zero_booths() {
    let (store, service, venue_id) = setup();
    add_area(&store, venue_id, "出店エリア", Some(20));

    assert_eq!(service.occupancy_rate(venue_id).unwrap(), 0.0);
    assert_eq!(service.occupied_booths_count(venue_id).unwrap(), 0);
}

#[test]
fn test_total_booth_capacity_sums_areas() {
    let (store, service, venue_id) = setup();
    add_area(&store, venue_id, "出店エリアA", Some(20));
    add_area(&store, venue_id, "出店エリアB", Some(15));
    add_area(&store, venue_id, "ステージ前", None);

    assert_eq!(service.total_booth_capacity(venue_id).unwrap(), 35);
}

#[test]
fn test_layout_bounds_empty_venue_is_zero() {
    let (_store, service, venue_id) = setup();
    assert_eq!(service.layout_bounds(venue_id).unwrap(), Bounds::ZERO);
    assert_eq!(service.total_layout_area(venue_id).unwrap(), 0.0);
}

#[test]
fn test_layout_bounds_skip_hidden_elements() {
    let (store, service, venue_id) = setup();
    store
        .create_element(LayoutElementCreate {
            venue_id,
            element_type: ElementType::Stage,
            name: "ステージ".to_string(),
            x_position: 0.0,
            y_position: 0.0,
            width: 10.0,
            height: 10.0,
            rotation: None,
            color: None,
            layer: 0,
            locked: false,
            visible: true,
            properties: None,
        })
        .unwrap();
    let far = store
        .create_element(LayoutElementCreate {
            venue_id,
            element_type: ElementType::Restroom,
            name: "お手洗い".to_string(),
            x_position: 90.0,
            y_position: 40.0,
            width: 10.0,
            height: 10.0,
            rotation: None,
            color: None,
            layer: 0,
            locked: false,
            visible: true,
            properties: None,
        })
        .unwrap();

    let bounds = service.layout_bounds(venue_id).unwrap();
    assert_eq!((bounds.max_x, bounds.max_y), (100.0, 50.0));
    assert_eq!(service.total_layout_area(venue_id).unwrap(), 5000.0);

    store
        .update_element(
            far.id,
            LayoutElementUpdate {
                visible: Some(false),
                ..Default::default()
            },
        )
        .unwrap();
    let bounds = service.layout_bounds(venue_id).unwrap();
    assert_eq!((bounds.max_x, bounds.max_y), (10.0, 10.0));
}

#[test]
fn test_generate_booth_numbers_is_ordered_and_idempotent() {
    let (store, service, venue_id) = setup();
    let first = add_area(&store, venue_id, "出店エリアA", None);
    let second = add_area(&store, venue_id, "出店エリアB", None);

    add_booth(&store, &first, "X-001");
    add_booth(&store, &first, "X-002");
    add_booth(&store, &first, "X-003");
    add_booth(&store, &second, "Y-001");
    add_booth(&store, &second, "Y-002");

    assert_eq!(service.generate_booth_numbers(venue_id).unwrap(), 5);

    let numbers: Vec<String> = store
        .list_booths_in_venue(venue_id)
        .iter()
        .map(|b| b.booth_number.clone())
        .collect();
    assert_eq!(
        numbers,
        vec!["01-001", "01-002", "01-003", "02-001", "02-002"]
    );

    // Renumbering again over unchanged data assigns the same numbers.
    assert_eq!(service.generate_booth_numbers(venue_id).unwrap(), 5);
    let again: Vec<String> = store
        .list_booths_in_venue(venue_id)
        .iter()
        .map(|b| b.booth_number.clone())
        .collect();
    assert_eq!(again, numbers);
}

#[test]
fn test_booth_number_unique_per_festival() {
    let (store, _service, venue_id) = setup();
    let area = add_area(&store, venue_id, "出店エリア", None);
    add_booth(&store, &area, "01-001");

    let err = store
        .create_booth(BoothCreate {
            venue_area_id: area.id,
            festival_id: 1,
            name: "ブース重複".to_string(),
            booth_number: "01-001".to_string(),
            size: BoothSize::Small,
            width: 3.0,
            height: 3.0,
            x_position: 5.0,
            y_position: 5.0,
            rotation: None,
            power_required: false,
            water_required: false,
            special_requirements: None,
        })
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::BoothNumberTaken);
}

#[test]
fn test_delete_venue_cascades_to_grandchildren() {
    let (store, _service, venue_id) = setup();
    let area = add_area(&store, venue_id, "出店エリア", None);
    let booth = add_booth(&store, &area, "01-001");
    let element = store
        .create_element(LayoutElementCreate {
            venue_id,
            element_type: ElementType::Entrance,
            name: "入口".to_string(),
            x_position: 0.0,
            y_position: 0.0,
            width: 10.0,
            height: 5.0,
            rotation: None,
            color: None,
            layer: 0,
            locked: false,
            visible: true,
            properties: None,
        })
        .unwrap();

    assert!(store.delete_venue(venue_id).unwrap());
    assert!(store.find_venue(venue_id).is_none());
    assert!(store.find_area(area.id).is_none());
    assert!(store.find_booth(booth.id).is_none());
    assert!(store.find_element(element.id).is_none());
}

#[test]
fn test_partial_update_keeps_unspecified_fields() {
    let (store, _service, venue_id) = setup();

    let updated = store
        .update_venue(
            venue_id,
            VenueUpdate {
                name: Some("移転後会場".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.name, "移転後会場");
    assert_eq!(updated.capacity, 500);
    assert_eq!(updated.facility_type, FacilityType::Park);
}

#[test]
fn test_aggregations_require_existing_venue() {
    let (_store, service, _venue_id) = setup();
    let err = service.occupancy_rate(9999).unwrap_err();
    assert_eq!(err.code, ErrorCode::VenueNotFound);
}
