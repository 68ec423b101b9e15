//! Data models for formrelay
//!
//! This module contains the domain models used throughout the crate:
//! captured form snapshots, validation rules and verdicts, the normalized
//! booking request, the service catalogue, and notification payloads.

pub mod notification;
pub mod request;
pub mod service;
pub mod snapshot;
pub mod validation;

// Re-export commonly used types
pub use notification::{Notification, NotificationKind};
pub use request::ContactRequest;
pub use service::{ServiceKind, Turnaround};
pub use snapshot::{FormField, FormSnapshot};
pub use validation::{validate, validate_submission, FieldVerdict};
