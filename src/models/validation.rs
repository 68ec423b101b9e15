//! Field validation rules for the booking form
//!
//! This module provides the pure validation functions behind both blur-time
//! field checks and submit-time aggregate validation. Rules are stateless and
//! deterministic; calling them has no side effects.
//!
//! Blur-time checks produce a precise per-field message. Submit-time
//! validation first runs a presence-only gate over the required fields and
//! short-circuits to one generic message before any format checks run. The
//! two tiers intentionally disagree in precision.

use regex::Regex;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::sync::OnceLock;
use validator::ValidationError;

use super::snapshot::{FormField, FormSnapshot};

// Lazy static regex patterns
static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
static PHONE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Get or initialize the email regex pattern
fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex pattern")
    })
}

/// Get or initialize the phone regex pattern
///
/// Accepts Australian numbers: an optional `+61` or a leading `0`, then a
/// digit 2-9, then eight more digits.
fn phone_regex() -> &'static Regex {
    PHONE_REGEX
        .get_or_init(|| Regex::new(r"^(\+61|0)[2-9]\d{8}$").expect("Invalid phone regex pattern"))
}

/// Outcome of checking a single field
///
/// A message is present exactly when the field is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldVerdict {
    /// The value passed its field rule
    Valid,
    /// The value failed, with the message to show next to the field
    Invalid {
        /// User-facing error message
        message: &'static str,
    },
}

impl FieldVerdict {
    fn invalid(message: &'static str) -> Self {
        FieldVerdict::Invalid { message }
    }

    /// Check whether the field passed
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldVerdict::Valid)
    }

    /// The error message, if the field failed
    pub fn message(&self) -> Option<&'static str> {
        match self {
            FieldVerdict::Valid => None,
            FieldVerdict::Invalid { message } => Some(message),
        }
    }
}

impl Serialize for FieldVerdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldVerdict", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// Validate the name field
pub fn validate_name(value: &str) -> FieldVerdict {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        FieldVerdict::invalid("Name is required")
    } else if trimmed.chars().count() < 2 {
        FieldVerdict::invalid("Name must be at least 2 characters")
    } else {
        FieldVerdict::Valid
    }
}

/// Validate the email field
pub fn validate_email(value: &str) -> FieldVerdict {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        FieldVerdict::invalid("Email is required")
    } else if !email_regex().is_match(trimmed) {
        FieldVerdict::invalid("Please enter a valid email address")
    } else {
        FieldVerdict::Valid
    }
}

/// Validate the phone field
///
/// Internal whitespace is stripped before the format check, so both
/// `0412 345 678` and `0412345678` pass.
pub fn validate_phone(value: &str) -> FieldVerdict {
    let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if stripped.is_empty() {
        FieldVerdict::invalid("Phone number is required")
    } else if !phone_regex().is_match(&stripped) {
        FieldVerdict::invalid("Please enter a valid Australian phone number")
    } else {
        FieldVerdict::Valid
    }
}

/// Validate the service selection
pub fn validate_service(value: &str) -> FieldVerdict {
    if value.trim().is_empty() {
        FieldVerdict::invalid("Please select a service")
    } else {
        FieldVerdict::Valid
    }
}

/// Validate a pickup or delivery address
pub fn validate_address(value: &str) -> FieldVerdict {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        FieldVerdict::invalid("Address is required")
    } else if trimmed.chars().count() < 10 {
        FieldVerdict::invalid("Please enter a complete address")
    } else {
        FieldVerdict::Valid
    }
}

/// Validate a single field by its declared name
///
/// Field names with no rule always validate.
pub fn validate(field_name: &str, raw_value: &str) -> FieldVerdict {
    match FormField::from_name(field_name) {
        Some(FormField::Name) => validate_name(raw_value),
        Some(FormField::Email) => validate_email(raw_value),
        Some(FormField::Phone) => validate_phone(raw_value),
        Some(FormField::Service) => validate_service(raw_value),
        Some(FormField::Pickup) | Some(FormField::Delivery) => validate_address(raw_value),
        None => FieldVerdict::Valid,
    }
}

/// Submit-time aggregate validation
///
/// Runs the presence-only gate over the required fields first; any blank
/// field short-circuits to the single generic message. Only then do the
/// email and phone format checks run. Address and name-length rules do not
/// apply here; they fire on blur only.
pub fn validate_submission(snapshot: &FormSnapshot) -> Result<(), &'static str> {
    for field in FormField::REQUIRED {
        if snapshot.is_blank(field.as_str()) {
            return Err("Please fill in all required fields");
        }
    }

    if let FieldVerdict::Invalid { message } = validate_email(snapshot.get(FormField::Email.as_str()))
    {
        return Err(message);
    }

    if let FieldVerdict::Invalid { message } = validate_phone(snapshot.get(FormField::Phone.as_str()))
    {
        return Err(message);
    }

    Ok(())
}

/// Validate email shape for the validator crate
pub fn email_format(value: &str) -> Result<(), ValidationError> {
    if email_regex().is_match(value.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_email"))
    }
}

/// Validate phone shape for the validator crate
pub fn phone_format(value: &str) -> Result<(), ValidationError> {
    let stripped: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if phone_regex().is_match(&stripped) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_phone"))
    }
}

/// Format a phone number for display
///
/// Once ten digits are present, mobiles render as `0412 345 678` and
/// landlines as `(02) 1234 5678`; extra digits are appended untouched.
/// Shorter input is returned digits-only.
pub fn format_phone(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 10 {
        return digits;
    }

    if digits.starts_with("04") {
        format!(
            "{} {} {}{}",
            &digits[..4],
            &digits[4..7],
            &digits[7..10],
            &digits[10..]
        )
    } else if digits.starts_with('0') {
        format!(
            "({}) {} {}{}",
            &digits[..2],
            &digits[2..6],
            &digits[6..10],
            &digits[10..]
        )
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("Jane Doe").is_valid());
        assert!(validate_name("Jo").is_valid());

        assert_eq!(validate_name("").message(), Some("Name is required"));
        assert_eq!(validate_name("   ").message(), Some("Name is required"));
        assert_eq!(
            validate_name("J").message(),
            Some("Name must be at least 2 characters")
        );
        assert_eq!(
            validate_name(" J ").message(),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_valid());
        assert!(validate_email("jane.doe@example.com.au").is_valid());

        assert_eq!(validate_email("").message(), Some("Email is required"));
        assert_eq!(
            validate_email("a@b").message(),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            validate_email("a b@c.com").message(),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            validate_email("a@b@c.com").message(),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn test_validate_phone() {
        assert!(validate_phone("0412345678").is_valid());
        assert!(validate_phone("0412 345 678").is_valid());
        assert!(validate_phone("+61412345678").is_valid());
        assert!(validate_phone("0298765432").is_valid());

        assert_eq!(
            validate_phone("").message(),
            Some("Phone number is required")
        );
        // Digit after the leading 0 must be 2-9
        assert_eq!(
            validate_phone("0123456789").message(),
            Some("Please enter a valid Australian phone number")
        );
        assert_eq!(
            validate_phone("041234567").message(),
            Some("Please enter a valid Australian phone number")
        );
        assert_eq!(
            validate_phone("04123456789").message(),
            Some("Please enter a valid Australian phone number")
        );
    }

    #[test]
    fn test_validate_service() {
        assert!(validate_service("flower-delivery").is_valid());
        assert_eq!(
            validate_service("").message(),
            Some("Please select a service")
        );
    }

    #[test]
    fn test_validate_address() {
        assert!(validate_address("12 Rose Street, Carlton").is_valid());

        assert_eq!(validate_address("").message(), Some("Address is required"));
        assert_eq!(
            validate_address("12 Rose").message(),
            Some("Please enter a complete address")
        );
    }

    #[test]
    fn test_validate_dispatch() {
        assert!(!validate("name", "").is_valid());
        assert!(!validate("email", "a@b").is_valid());
        assert!(!validate("phone", "12345").is_valid());
        assert!(!validate("service", "").is_valid());
        assert!(!validate("pickup", "short").is_valid());
        assert!(!validate("delivery", "").is_valid());
    }

    #[test]
    fn test_validate_unknown_field_always_valid() {
        assert!(validate("message", "").is_valid());
        assert!(validate("date", "whatever").is_valid());
        assert!(validate("not-a-field", "").is_valid());
    }

    #[test]
    fn test_required_messages() {
        assert_eq!(validate("name", "").message(), Some("Name is required"));
        assert_eq!(validate("email", "").message(), Some("Email is required"));
        assert_eq!(
            validate("phone", "").message(),
            Some("Phone number is required")
        );
        assert_eq!(
            validate("service", "").message(),
            Some("Please select a service")
        );
        assert_eq!(
            validate("pickup", "").message(),
            Some("Address is required")
        );
        assert_eq!(
            validate("delivery", "").message(),
            Some("Address is required")
        );
    }

    #[test]
    fn test_submission_presence_gate_is_generic() {
        let snapshot = FormSnapshot::new()
            .with("name", "Jane Doe")
            .with("phone", "0412345678")
            .with("service", "flower-delivery");

        // Missing email trips the presence gate, not the email format rule
        assert_eq!(
            validate_submission(&snapshot),
            Err("Please fill in all required fields")
        );
    }

    #[test]
    fn test_submission_format_checks_after_gate() {
        let snapshot = FormSnapshot::new()
            .with("name", "Jane Doe")
            .with("email", "not-an-email")
            .with("phone", "0412345678")
            .with("service", "flower-delivery");

        assert_eq!(
            validate_submission(&snapshot),
            Err("Please enter a valid email address")
        );

        let snapshot = FormSnapshot::new()
            .with("name", "Jane Doe")
            .with("email", "jane@example.com")
            .with("phone", "1234")
            .with("service", "flower-delivery");

        assert_eq!(
            validate_submission(&snapshot),
            Err("Please enter a valid Australian phone number")
        );
    }

    #[test]
    fn test_submission_ignores_blur_only_rules() {
        // A one-character name and a short pickup address pass at submit
        // time; only presence and email/phone formats are checked here.
        let snapshot = FormSnapshot::new()
            .with("name", "J")
            .with("email", "jane@example.com")
            .with("phone", "0412345678")
            .with("service", "flower-delivery")
            .with("pickup", "short");

        assert_eq!(validate_submission(&snapshot), Ok(()));
    }

    #[test]
    fn test_validator_crate_wrappers() {
        assert!(email_format("jane@example.com").is_ok());
        assert!(email_format("nope").is_err());
        assert!(phone_format("0412 345 678").is_ok());
        assert!(phone_format("0123456789").is_err());
    }

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("0412345678"), "0412 345 678");
        assert_eq!(format_phone("0298765432"), "(02) 9876 5432");
        assert_eq!(format_phone("0412 345 678"), "0412 345 678");
        // Short input stays digits-only
        assert_eq!(format_phone("0412"), "0412");
        // Non-local numbers are left unformatted
        assert_eq!(format_phone("+61412345678"), "61412345678");
    }

    #[test]
    fn test_field_verdict_serialization() {
        let valid = serde_json::to_value(FieldVerdict::Valid).unwrap();
        assert_eq!(valid["valid"], true);
        assert!(valid["message"].is_null());

        let invalid = serde_json::to_value(validate_name("")).unwrap();
        assert_eq!(invalid["valid"], false);
        assert_eq!(invalid["message"], "Name is required");
    }
}
