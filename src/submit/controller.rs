//! Submission lifecycle controller
//!
//! The controller owns the form's interaction lifecycle: field checks on
//! blur, the submit-time validation gate, the Submitting/Succeeded/Failed
//! transitions around the injected send operation, and the notifications
//! that surface each outcome. The resubmit guard lives in the state machine
//! itself; a disabled button in the renderer is presentation, not
//! protection.

use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn, Instrument};
use uuid::Uuid;

use super::events::UiEvent;
use super::notify::NotificationSink;
use super::sender::{FormSender, StubSender};
use super::SubmissionState;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::Timer;
use crate::models::{validation, ContactRequest, FieldVerdict, FormSnapshot, NotificationKind};

/// Drives a booking form's submission lifecycle
///
/// Clones share the same lifecycle state, so concurrent handles observe one
/// state machine.
#[derive(Clone)]
pub struct SubmissionController {
    sender: Arc<dyn FormSender>,
    sink: NotificationSink,
    events: UnboundedSender<UiEvent>,
    state: Arc<Mutex<SubmissionState>>,
}

impl SubmissionController {
    /// Create a controller over an injected sender and notification sink
    pub fn new(
        sender: Arc<dyn FormSender>,
        sink: NotificationSink,
        events: UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            sender,
            sink,
            events,
            state: Arc::new(Mutex::new(SubmissionState::Idle)),
        }
    }

    /// Wire up a controller with the stub sender and a fresh event channel
    pub fn from_config(config: &Config) -> (Self, UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let sink = NotificationSink::new(config.notifications.dismiss_delay(), tx.clone());
        let sender = Arc::new(StubSender::new(config.form.submit_delay()));
        (Self::new(sender, sink, tx), rx)
    }

    /// Current lifecycle state
    pub fn state(&self) -> SubmissionState {
        *self.state.lock().expect("submission state lock poisoned")
    }

    /// The notification sink this controller reports through
    pub fn sink(&self) -> &NotificationSink {
        &self.sink
    }

    /// Validate a single field on blur and emit the verdict
    pub fn on_field_blur(&self, field: &str, value: &str) -> FieldVerdict {
        let verdict = validation::validate(field, value);
        if let Some(message) = verdict.message() {
            debug!(field, message, "Field failed validation");
        }
        self.emit(UiEvent::FieldValidated {
            field: field.to_string(),
            verdict: verdict.clone(),
        });
        verdict
    }

    /// Clear a field's error annotation after the user edits it
    ///
    /// No re-validation happens until the next blur or submit.
    pub fn on_field_input(&self, field: &str) {
        self.emit(UiEvent::FieldErrorCleared {
            field: field.to_string(),
        });
    }

    /// Forward a manual notification dismissal from the UI
    pub fn on_notification_dismissed(&self, id: Uuid) -> bool {
        self.sink.dismiss(id)
    }

    /// Run the submission lifecycle for a captured snapshot
    ///
    /// Rejected outright while a submission is in flight. A snapshot that
    /// fails aggregate validation stays `Idle` and raises exactly one Error
    /// notification. A valid snapshot transitions through `Submitting` to
    /// `Succeeded` (resetting the form) or `Failed` (preserving field values
    /// for retry), then back to `Idle`.
    pub async fn submit(&self, snapshot: FormSnapshot) -> Result<()> {
        if !self.state().accepts_submit() {
            warn!(state = %self.state(), "Submit rejected while submission in flight");
            return Err(Error::SubmissionInProgress);
        }

        let request = match ContactRequest::try_from(&snapshot) {
            Ok(request) => request,
            Err(err) => {
                let message = match &err {
                    Error::Validation(message) => message.clone(),
                    other => other.to_string(),
                };
                info!(message = %message, "Submission rejected by validation");
                self.sink.notify(message, NotificationKind::Error);
                return Err(err);
            }
        };

        self.begin_submitting()?;
        info!(service = %request.service, "Submitting booking request");

        let span = crate::submission_span!(request.service);
        let timer = Timer::start("send");
        let outcome = self.sender.send(&request).instrument(span.clone()).await;
        timer.stop();

        match outcome {
            Ok(()) => {
                span.record("outcome", "success");
                self.set_state(SubmissionState::Succeeded);
                self.emit(UiEvent::FormReset);
                self.sink.notify(
                    "Thank you! Your message has been sent successfully. We'll contact you soon.",
                    NotificationKind::Success,
                );
                self.set_state(SubmissionState::Idle);
                Ok(())
            }
            Err(err) => {
                span.record("outcome", "failed");
                warn!(error = %err, "Send operation failed");
                self.set_state(SubmissionState::Failed);
                // Field values are kept so the user can retry without retyping
                self.sink.notify(err.to_string(), NotificationKind::Error);
                self.set_state(SubmissionState::Idle);
                Err(err.into())
            }
        }
    }

    /// Atomically claim the `Submitting` state
    fn begin_submitting(&self) -> Result<()> {
        {
            let mut state = self.state.lock().expect("submission state lock poisoned");
            if !state.accepts_submit() {
                return Err(Error::SubmissionInProgress);
            }
            *state = SubmissionState::Submitting;
        }
        self.emit(UiEvent::SubmissionStateChanged {
            state: SubmissionState::Submitting,
        });
        Ok(())
    }

    fn set_state(&self, new_state: SubmissionState) {
        {
            let mut state = self.state.lock().expect("submission state lock poisoned");
            *state = new_state;
        }
        self.emit(UiEvent::SubmissionStateChanged { state: new_state });
    }

    fn emit(&self, event: UiEvent) {
        if self.events.send(event).is_err() {
            debug!("UI event receiver dropped");
        }
    }
}
