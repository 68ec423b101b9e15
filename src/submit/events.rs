//! Typed events emitted toward the rendering layer
//!
//! The core never touches a rendering technology; everything the renderer
//! needs to do is expressed as one of these events, delivered over a
//! channel. Events arrive in the order they were produced.

use serde::Serialize;
use uuid::Uuid;

use super::SubmissionState;
use crate::models::{FieldVerdict, Notification};

/// An instruction or state change for whatever renders the form
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum UiEvent {
    /// A field was checked on blur; annotate it with the verdict
    FieldValidated {
        /// Declared field name
        field: String,
        /// Validation outcome, with the inline message when invalid
        verdict: FieldVerdict,
    },

    /// The user edited an errored field; clear its annotation without
    /// re-validating until the next blur or submit
    FieldErrorCleared {
        /// Declared field name
        field: String,
    },

    /// The submission lifecycle advanced
    ///
    /// `Submitting` implies the submit affordance is locked and relabeled
    /// busy; every other state unlocks it and restores the original label.
    SubmissionStateChanged {
        /// New lifecycle state
        state: SubmissionState,
    },

    /// Clear all field values and validity annotations
    FormReset,

    /// Display a notification, replacing any visible one
    NotificationRaised {
        /// The notification to display
        notification: Notification,
    },

    /// Remove the notification with this id from display
    NotificationCleared {
        /// Identity of the removed notification
        id: Uuid,
    },
}
