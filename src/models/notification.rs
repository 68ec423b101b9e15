//! User-facing notification payloads
//!
//! A notification is a transient feedback message with a severity kind. The
//! sink in `crate::submit::notify` guarantees at most one is alive at a time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// Neutral informational message
    Info,
    /// A successful outcome
    Success,
    /// A failure the user should act on
    Error,
}

impl NotificationKind {
    /// String representation, as used in rendering hooks
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A transient feedback message shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Unique identity, used to match dismissals against the visible slot
    pub id: Uuid,

    /// Message text
    pub text: String,

    /// Severity kind
    pub kind: NotificationKind,

    /// When the notification was raised
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a new notification stamped with the current time
    pub fn new(text: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            kind,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let notification = Notification::new("Saved", NotificationKind::Success);
        assert_eq!(notification.text, "Saved");
        assert_eq!(notification.kind, NotificationKind::Success);
    }

    #[test]
    fn test_notifications_have_distinct_ids() {
        let a = Notification::new("one", NotificationKind::Info);
        let b = Notification::new("two", NotificationKind::Info);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NotificationKind::Info.to_string(), "info");
        assert_eq!(NotificationKind::Success.to_string(), "success");
        assert_eq!(NotificationKind::Error.to_string(), "error");
    }

    #[test]
    fn test_notification_serialization() {
        let notification = Notification::new("Sent", NotificationKind::Success);
        let json = serde_json::to_string(&notification).unwrap();
        assert!(json.contains("\"kind\":\"success\""));

        let deserialized: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, notification);
    }
}
