//! Shared types for the Matsuri festival platform
//!
//! Common types used across the venue layout engine: entity models,
//! 2D geometry primitives, error types, and notification payloads.

pub mod error;
pub mod geometry;
pub mod models;
pub mod notification;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use notification::{Notification, NotificationType};
