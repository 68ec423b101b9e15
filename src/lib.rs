//! formrelay Library
//!
//! Rendering-agnostic core of a courier booking form: field validation, the
//! submission lifecycle state machine, and the single-slot notification sink
//! that surfaces outcomes. The rendering layer feeds raw values in through
//! the controller's handlers and receives typed [`submit::UiEvent`]s back;
//! the backend send operation is injected behind [`submit::FormSender`].

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod quote;
pub mod submit;
pub mod test_utils;

// Re-export commonly used types at the crate root
pub use config::Config;
pub use error::{Error, Result};

// Re-export model types
pub use models::{
    ContactRequest, FieldVerdict, FormField, FormSnapshot, Notification, NotificationKind,
    ServiceKind,
};

// Re-export submission lifecycle types
pub use submit::{
    FormSender, NotificationSink, StubSender, SubmissionController, SubmissionState, UiEvent,
};
