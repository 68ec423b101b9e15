//! Submission subsystem for the booking form
//!
//! This module provides:
//! - The submission lifecycle state machine and its controller
//! - Typed UI events emitted toward the rendering layer
//! - The injected send capability, with a stub for simulated latency
//! - The single-slot notification sink with auto-dismiss

pub mod controller;
pub mod events;
pub mod notify;
pub mod sender;

pub use controller::SubmissionController;
pub use events::UiEvent;
pub use notify::NotificationSink;
pub use sender::{FormSender, SendError, StubSender};

use serde::{Deserialize, Serialize};

/// Lifecycle states of a form submission
///
/// A submission starts `Idle`, moves to `Submitting` only once aggregate
/// validation passes, settles in `Succeeded` or `Failed`, and returns to
/// `Idle` once the user has been notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionState {
    /// No submission in flight; the form accepts a submit
    Idle,
    /// The send operation is in flight; further submits are rejected
    Submitting,
    /// The send operation completed
    Succeeded,
    /// The send operation failed; field values are preserved for retry
    Failed,
}

impl SubmissionState {
    /// Whether a new submission may start from this state
    ///
    /// The guard lives here, in the state machine, rather than in any UI
    /// affordance lock.
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }

    /// String representation for logging
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
