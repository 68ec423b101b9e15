//! Single-slot notification sink
//!
//! At most one notification is visible at any instant: raising a new one
//! synchronously clears whatever is showing, then displays the new one and
//! schedules its auto-dismiss. A manual dismissal cancels the pending timer.
//! The visible slot is owned by the sink instance, not a global.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

use super::events::UiEvent;
use crate::models::{Notification, NotificationKind};

/// The visible notification and its pending dismiss timer
#[derive(Debug, Default)]
struct SinkState {
    current: Option<Notification>,
    dismiss_timer: Option<JoinHandle<()>>,
}

/// Process-wide feedback channel for the form
///
/// Clones share the same slot, so every handle observes the same single
/// visible notification.
#[derive(Debug, Clone)]
pub struct NotificationSink {
    state: Arc<Mutex<SinkState>>,
    events: UnboundedSender<UiEvent>,
    dismiss_delay: Duration,
}

impl NotificationSink {
    /// Create a sink emitting display commands on the given channel
    pub fn new(dismiss_delay: Duration, events: UnboundedSender<UiEvent>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SinkState::default())),
            events,
            dismiss_delay,
        }
    }

    /// Raise a notification, replacing any visible one
    ///
    /// The previous notification is cleared synchronously before the new one
    /// is displayed. Auto-dismiss fires after the configured delay unless
    /// the notification is dismissed or replaced first.
    pub fn notify(&self, text: impl Into<String>, kind: NotificationKind) -> Notification {
        let notification = Notification::new(text, kind);

        let mut state = self.state.lock().expect("notification sink lock poisoned");
        self.clear_slot(&mut state);

        state.current = Some(notification.clone());
        self.emit(UiEvent::NotificationRaised {
            notification: notification.clone(),
        });

        let sink = self.clone();
        let id = notification.id;
        let delay = self.dismiss_delay;
        state.dismiss_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            sink.dismiss(id);
        }));

        notification
    }

    /// Dismiss the notification with `id` if it is still visible
    ///
    /// Cancels the pending auto-dismiss timer. Returns false when the id no
    /// longer matches the visible slot (already replaced or dismissed).
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut state = self.state.lock().expect("notification sink lock poisoned");
        match &state.current {
            Some(current) if current.id == id => {
                self.clear_slot(&mut state);
                true
            }
            _ => false,
        }
    }

    /// The currently visible notification, if any
    pub fn current(&self) -> Option<Notification> {
        self.state
            .lock()
            .expect("notification sink lock poisoned")
            .current
            .clone()
    }

    /// Clear the slot and cancel its timer, emitting the removal command
    fn clear_slot(&self, state: &mut SinkState) {
        if let Some(timer) = state.dismiss_timer.take() {
            timer.abort();
        }
        if let Some(old) = state.current.take() {
            self.emit(UiEvent::NotificationCleared { id: old.id });
        }
    }

    fn emit(&self, event: UiEvent) {
        if self.events.send(event).is_err() {
            debug!("UI event receiver dropped");
        }
    }
}
