//! Venue layout engine
//!
//! Service layer over the shared venue models: an in-memory entity store
//! with cascade-delete, the booth assignment lifecycle, layout editing
//! (z-order, cloning, default seeding, renumbering), and venue-wide
//! aggregation. Invoked in-process by controller-layer code; no wire
//! protocol is owned here.

pub mod config;
pub mod notify;
pub mod permissions;
pub mod services;
pub mod store;
pub mod utils;

// Re-exports
pub use config::LayoutConfig;
pub use notify::{LogSink, MemorySink, NotificationSink};
pub use permissions::{Actor, ActorRole, FestivalPolicy, RolePolicy};
pub use services::{BoothAssignmentService, LayoutService, VenueService};
pub use store::VenueStore;
