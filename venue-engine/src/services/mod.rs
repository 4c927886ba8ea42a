//! Engine services
//!
//! Store-coordinated operations on the venue layout: booth lifecycle,
//! layout editing, and venue-wide aggregation.

mod assignment;
mod layout;
mod venue;

pub use assignment::BoothAssignmentService;
pub use layout::LayoutService;
pub use venue::VenueService;
