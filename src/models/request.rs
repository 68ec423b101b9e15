//! Normalized booking request
//!
//! This module defines the request structure handed to the send operation
//! after a snapshot has passed submit-time validation: trimmed identity
//! fields, a whitespace-free phone number, and the optional free-form fields
//! reduced to `None` when blank.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::service::ServiceKind;
use super::snapshot::{FormField, FormSnapshot};
use super::validation::{email_format, phone_format, validate_submission};
use crate::error::Error;

/// A booking request ready for the send operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ContactRequest {
    /// Customer name, trimmed
    #[validate(length(min = 2))]
    pub name: String,

    /// Contact email, trimmed
    #[validate(custom(function = "email_format"))]
    pub email: String,

    /// Contact phone with internal whitespace stripped
    #[validate(custom(function = "phone_format"))]
    pub phone: String,

    /// Selected service slug, as submitted
    ///
    /// Kept raw; an unrecognised slug still submits, matching the form.
    pub service: String,

    /// Pickup address, if given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup: Option<String>,

    /// Delivery address, if given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery: Option<String>,

    /// Requested delivery date, if given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Free-form message, if given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactRequest {
    /// Resolve the selected service against the catalogue
    pub fn service_kind(&self) -> Option<ServiceKind> {
        ServiceKind::from_slug(&self.service)
    }
}

/// Reduce an optional field to `None` when blank
fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Build a normalized request from a captured snapshot
///
/// Re-runs submit-time aggregate validation, so a request can only exist for
/// a snapshot that would be accepted.
impl TryFrom<&FormSnapshot> for ContactRequest {
    type Error = Error;

    fn try_from(snapshot: &FormSnapshot) -> Result<Self, Self::Error> {
        validate_submission(snapshot).map_err(Error::validation)?;

        let phone: String = snapshot
            .get(FormField::Phone.as_str())
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        Ok(ContactRequest {
            name: snapshot.get(FormField::Name.as_str()).trim().to_string(),
            email: snapshot.get(FormField::Email.as_str()).trim().to_string(),
            phone,
            service: snapshot.get(FormField::Service.as_str()).trim().to_string(),
            pickup: optional(snapshot.get(FormField::Pickup.as_str())),
            delivery: optional(snapshot.get(FormField::Delivery.as_str())),
            date: optional(snapshot.get("date")),
            message: optional(snapshot.get("message")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_snapshot() -> FormSnapshot {
        FormSnapshot::new()
            .with("name", "  Jane Doe  ")
            .with("email", "jane@example.com")
            .with("phone", "0412 345 678")
            .with("service", "flower-delivery")
            .with("pickup", "12 Rose Street, Carlton")
            .with("delivery", "7 Daisy Avenue, Fitzroy North")
            .with("message", "Ring the doorbell twice")
    }

    #[test]
    fn test_try_from_normalizes_fields() {
        let request = ContactRequest::try_from(&valid_snapshot()).unwrap();

        assert_eq!(request.name, "Jane Doe");
        assert_eq!(request.phone, "0412345678");
        assert_eq!(request.service_kind(), Some(ServiceKind::FlowerDelivery));
        assert_eq!(request.pickup.as_deref(), Some("12 Rose Street, Carlton"));
        assert_eq!(request.date, None);
        assert_eq!(request.message.as_deref(), Some("Ring the doorbell twice"));
    }

    #[test]
    fn test_try_from_rejects_missing_required_field() {
        let snapshot = FormSnapshot::new()
            .with("name", "Jane Doe")
            .with("phone", "0412345678")
            .with("service", "flower-delivery");

        let err = ContactRequest::try_from(&snapshot).unwrap_err();
        assert!(err.is_user_correctable());
        assert!(err.to_string().contains("Please fill in all required fields"));
    }

    #[test]
    fn test_try_from_rejects_bad_phone() {
        let snapshot = valid_snapshot().with("phone", "0123456789");
        assert!(ContactRequest::try_from(&snapshot).is_err());
    }

    #[test]
    fn test_unrecognised_service_still_submits() {
        let snapshot = valid_snapshot().with("service", "drone-delivery");
        let request = ContactRequest::try_from(&snapshot).unwrap();
        assert_eq!(request.service, "drone-delivery");
        assert_eq!(request.service_kind(), None);
    }

    #[test]
    fn test_validator_derive_accepts_normalized_request() {
        let request = ContactRequest::try_from(&valid_snapshot()).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validator_derive_rejects_tampered_request() {
        let mut request = ContactRequest::try_from(&valid_snapshot()).unwrap();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_json_omits_absent_optionals() {
        let snapshot = FormSnapshot::new()
            .with("name", "Jane Doe")
            .with("email", "jane@example.com")
            .with("phone", "0412345678")
            .with("service", "document-courier");

        let request = ContactRequest::try_from(&snapshot).unwrap();
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("pickup"));
        assert!(!json.contains("message"));
        assert!(json.contains("\"service\":\"document-courier\""));
    }
}
