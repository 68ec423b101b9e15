//! Form snapshot types
//!
//! This module defines the raw form data captured from the rendering layer
//! at submit time, before any validation or normalization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named fields of the booking form that carry a validation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    /// Customer name
    Name,
    /// Contact email address
    Email,
    /// Contact phone number
    Phone,
    /// Requested courier service
    Service,
    /// Pickup address
    Pickup,
    /// Delivery address
    Delivery,
}

impl FormField {
    /// Fields that must be present for a submission to proceed
    pub const REQUIRED: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Service,
    ];

    /// Resolve a form field from its declared name
    ///
    /// Returns `None` for field names with no validation rule (for example
    /// the free-form `message` field).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FormField::Name),
            "email" => Some(FormField::Email),
            "phone" => Some(FormField::Phone),
            "service" => Some(FormField::Service),
            "pickup" => Some(FormField::Pickup),
            "delivery" => Some(FormField::Delivery),
            _ => None,
        }
    }

    /// The declared field name as it appears on the form
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Service => "service",
            FormField::Pickup => "pickup",
            FormField::Delivery => "delivery",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw field values captured from the form at submit time
///
/// Keys are the form's declared field names. A missing key reads as an empty
/// string, matching a control the user never filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSnapshot {
    #[serde(flatten)]
    fields: BTreeMap<String, String>,
}

impl FormSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Set a field value, consuming and returning the snapshot
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Get a field's raw value, or an empty string if absent
    pub fn get(&self, field: &str) -> &str {
        self.fields.get(field).map(String::as_str).unwrap_or("")
    }

    /// Check whether a field is blank (absent or empty)
    ///
    /// Blank means the raw value is the empty string; whitespace-only input
    /// counts as filled here, matching the submit-time presence gate.
    pub fn is_blank(&self, field: &str) -> bool {
        self.get(field).is_empty()
    }

    /// Iterate over the captured field names and values
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of captured fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the snapshot has no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
