//! Data models
//!
//! Venue layout entities shared between the engine and its callers.
//! All IDs are `i64`; timestamps are RFC 3339 strings stamped by the store.

pub mod booth;
pub mod layout_element;
pub mod vendor_application;
pub mod venue;
pub mod venue_area;

// Re-exports
pub use booth::*;
pub use layout_element::*;
pub use vendor_application::*;
pub use venue::*;
pub use venue_area::*;
