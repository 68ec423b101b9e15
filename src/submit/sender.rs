//! Send operation abstraction
//!
//! This module defines the injected backend capability that delivers a
//! booking request, along with the stub implementation that simulates
//! network latency and always succeeds. A real implementation can replace
//! the stub without touching the state machine.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::models::ContactRequest;

/// Result type for send operations
pub type SendResult<T> = Result<T, SendError>;

/// Errors from the backend send operation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SendError {
    /// The backend could not be reached
    #[error("Connection error: {0}")]
    Connection(String),

    /// The backend rejected the request
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// The operation timed out
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

impl SendError {
    /// Check if the error is worth retrying with the same request
    pub fn is_retryable(&self) -> bool {
        matches!(self, SendError::Connection(_) | SendError::Timeout(_))
    }
}

/// Convert send errors to application errors
impl From<SendError> for crate::error::Error {
    fn from(err: SendError) -> Self {
        crate::error::Error::submission(err.to_string())
    }
}

/// Backend capability that delivers a booking request
#[async_trait]
pub trait FormSender: Send + Sync {
    /// Deliver the request, resolving once the backend has settled
    async fn send(&self, request: &ContactRequest) -> SendResult<()>;
}

/// Stub sender that always succeeds after a fixed delay
///
/// Stands in for a real backend; the delay simulates network latency so the
/// `Submitting` state is observable. There is no cancellation: once started,
/// the send always completes.
#[derive(Debug, Clone)]
pub struct StubSender {
    delay: Duration,
}

impl StubSender {
    /// Create a stub sender with the given simulated latency
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl FormSender for StubSender {
    async fn send(&self, request: &ContactRequest) -> SendResult<()> {
        tokio::time::sleep(self.delay).await;
        debug!(
            name = %request.name,
            service = %request.service,
            "Stub send completed"
        );
        Ok(())
    }
}
