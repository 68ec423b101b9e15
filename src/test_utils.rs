//! Test utilities for formrelay
//!
//! This module provides mock implementations and helpers for testing the
//! submission lifecycle without a real backend.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::models::{ContactRequest, FormSnapshot};
use crate::submit::sender::{FormSender, SendError, SendResult};
use crate::submit::UiEvent;

/// Mock implementation of FormSender for testing
///
/// Records every delivered request, can be configured to fail the next send,
/// and can simulate in-flight latency.
#[derive(Debug, Clone, Default)]
pub struct MockSender {
    sent: Arc<Mutex<Vec<ContactRequest>>>,
    fail_next: Arc<Mutex<Option<SendError>>>,
    delay: Arc<Mutex<Duration>>,
}

impl MockSender {
    /// Create a new mock sender that succeeds instantly
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the mock to fail the next send with the given error
    pub fn fail_next_send(&self, error: SendError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    /// Simulate latency on every send
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = delay;
    }

    /// Requests delivered so far
    pub fn sent(&self) -> Vec<ContactRequest> {
        self.sent.lock().unwrap().clone()
    }

    /// Forget recorded requests
    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

#[async_trait]
impl FormSender for MockSender {
    async fn send(&self, request: &ContactRequest) -> SendResult<()> {
        let delay = *self.delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.fail_next.lock().unwrap().take() {
            return Err(error);
        }

        self.sent.lock().unwrap().push(request.clone());
        Ok(())
    }
}

/// Build a fully valid snapshot covering every form field
pub fn valid_snapshot() -> FormSnapshot {
    FormSnapshot::new()
        .with("name", "Jane Doe")
        .with("email", "jane@example.com")
        .with("phone", "0412 345 678")
        .with("service", "flower-delivery")
        .with("pickup", "12 Rose Street, Carlton")
        .with("delivery", "7 Daisy Avenue, Fitzroy North")
        .with("message", "Leave with the concierge")
}

/// Drain all currently queued UI events from a receiver
pub fn drain_events(rx: &mut UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
