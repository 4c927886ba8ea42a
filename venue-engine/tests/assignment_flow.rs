//! Booth assignment lifecycle tests

use std::sync::Arc;

use shared::models::{
    ApplicationStatus, AreaType, Booth, BoothCreate, BoothSize, BoothStatus, BoothUpdate,
    FacilityType, VendorApplication, VenueArea, VenueAreaCreate, VenueCreate,
};
use shared::notification::NotificationType;
use venue_engine::{BoothAssignmentService, MemorySink, VenueStore};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn setup() -> (Arc<VenueStore>, Arc<MemorySink>, BoothAssignmentService, Booth) {
    init_tracing();
    let store = Arc::new(VenueStore::new());
    let sink = Arc::new(MemorySink::new());
    let service = BoothAssignmentService::new(store.clone(), sink.clone());

    let venue = store
        .create_venue(VenueCreate {
            festival_id: 1,
            name: "夏祭り会場".to_string(),
            capacity: 500,
            facility_type: FacilityType::Park,
            latitude: None,
            longitude: None,
        })
        .unwrap();
    let area = add_area(&store, venue.id);
    let booth = add_booth(&store, &area, "01-001");

    (store, sink, service, booth)
}

fn add_area(store: &VenueStore, venue_id: i64) -> VenueArea {
    store
        .create_area(VenueAreaCreate {
            venue_id,
            name: "出店エリア".to_string(),
            area_type: AreaType::VendorArea,
            width: 100.0,
            height: 60.0,
            x_position: 0.0,
            y_position: 0.0,
            rotation: None,
            capacity: Some(20),
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

fn register_application(store: &VenueStore, id: i64, status: ApplicationStatus) -> VendorApplication {
    let application = VendorApplication {
        id,
        festival_id: 1,
        user_id: 100 + id,
        business_name: format!("出店者{id}"),
        status,
        created_at: None,
        updated_at: None,
    };
    store.put_vendor_application(application.clone());
    application
}

#[test]
fn test_assign_success_sets_vendor_and_notifies() {
    let (store, sink, service, booth) = setup();
    let application = register_application(&store, 7, ApplicationStatus::Approved);

    assert!(service.assign_booth(booth.id, application.id, Some(1)).unwrap());

    let booth = store.find_booth(booth.id).unwrap();
    assert_eq!(booth.status, BoothStatus::Assigned);
    assert_eq!(booth.vendor_application_id, Some(application.id));
    assert!(booth.is_assigned());

    let sent = sink.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].notification_type, NotificationType::BoothAssigned);
    assert_eq!(sent[0].recipient_id, application.user_id);
    assert_eq!(sent[0].sender_id, Some(1));
    assert_eq!(sent[0].subject_id, booth.id);
}

#[test]
fn test_assign_unapproved_application_fails_silently() {
    let (store, sink, service, booth) = setup();
    let application = register_application(&store, 7, ApplicationStatus::Pending);

    assert!(!service.assign_booth(booth.id, application.id, None).unwrap());

    let booth = store.find_booth(booth.id).unwrap();
    assert_eq!(booth.status, BoothStatus::Available);
    assert_eq!(booth.vendor_application_id, None);
    assert!(sink.sent().is_empty());
}

#[test]
fn test_assign_occupied_booth_never_succeeds() {
    let (store, sink, service, booth) = setup();
    let application = register_application(&store, 7, ApplicationStatus::Approved);

    // Direct admin status write, outside the documented transitions.
    store
        .update_booth(
            booth.id,
            BoothUpdate {
                status: Some(BoothStatus::Occupied),
                ..Default::default()
            },
        )
        .unwrap();

    assert!(!service.assign_booth(booth.id, application.id, None).unwrap());
    let booth = store.find_booth(booth.id).unwrap();
    assert_eq!(booth.status, BoothStatus::Occupied);
    assert_eq!(booth.vendor_application_id, None);
    assert!(sink.sent().is_empty());
}

#[test]
fn test_unassign_notifies_then_second_call_fails() {
    let (store, sink, service, booth) = setup();
    let application = register_application(&store, 7, ApplicationStatus::Approved);

    assert!(service.assign_booth(booth.id, application.id, None).unwrap());
    assert!(service.unassign_booth(booth.id, Some(2)).unwrap());

    let released = store.find_booth(booth.id).unwrap();
    assert_eq!(released.status, BoothStatus::Available);
    assert_eq!(released.vendor_application_id, None);

    let sent = sink.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].notification_type, NotificationType::BoothUnassigned);
    assert_eq!(sent[1].recipient_id, application.user_id);

    // Failure is idempotent: nothing further is mutated or notified.
    assert!(!service.unassign_booth(booth.id, Some(2)).unwrap());
    assert_eq!(sink.sent().len(), 2);
}

#[test]
fn test_occupied_booth_frees_only_through_unassign() {
    let (store, _sink, service, booth) = setup();
    let application = register_application(&store, 7, ApplicationStatus::Approved);

    assert!(service.assign_booth(booth.id, application.id, None).unwrap());
    assert!(service.mark_occupied(booth.id).unwrap());
    assert_eq!(
        store.find_booth(booth.id).unwrap().status,
        BoothStatus::Occupied
    );

    // The vendor link blocks mark_available.
    assert!(!service.mark_available(booth.id).unwrap());
    assert_eq!(
        store.find_booth(booth.id).unwrap().status,
        BoothStatus::Occupied
    );
}

#[test]
fn test_assign_missing_application_is_an_error() {
    let (_store, sink, service, booth) = setup();
    let err = service.assign_booth(booth.id, 999, None).unwrap_err();
    assert_eq!(err.code, shared::ErrorCode::ApplicationNotFound);
    assert!(sink.sent().is_empty());
}

#[test]
fn test_concurrent_assignment_has_one_winner() {
    let (store, sink, service, booth) = setup();
    let first = register_application(&store, 7, ApplicationStatus::Approved);
    let second = register_application(&store, 8, ApplicationStatus::Approved);

    let service = Arc::new(service);
    let booth_id = booth.id;

    let handles: Vec<_> = [first.id, second.id]
        .into_iter()
        .map(|application_id| {
            let service = service.clone();
            std::thread::spawn(move || service.assign_booth(booth_id, application_id, None).unwrap())
        })
        .collect();

    let outcomes: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outcomes.iter().filter(|won| **won).count(), 1);
    assert_eq!(sink.sent().len(), 1);

    let booth = store.find_booth(booth_id).unwrap();
    assert!(booth.is_assigned());
}
