//! Courier service catalogue
//!
//! Service kinds offered on the booking form, with the per-service pricing
//! and turnaround parameters the estimators draw on.

use serde::{Deserialize, Serialize};

/// Service kinds supported by the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    /// Same-day flower delivery
    FlowerDelivery,
    /// Careful cake transport
    CakeTransport,
    /// Document courier runs
    DocumentCourier,
    /// Fragile item delivery
    FragileDelivery,
    /// Personal shopping and drop-off
    PersonalShopping,
    /// Express emergency delivery
    ExpressEmergency,
}

/// Turnaround parameters for a service
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turnaround {
    /// Minimum hours from booking to delivery
    pub min_hours: f64,
    /// Maximum hours from booking to delivery
    pub max_hours: f64,
    /// Whether the service can be fulfilled the same day
    pub same_day: bool,
}

impl ServiceKind {
    /// All service kinds, in form display order
    pub const ALL: [ServiceKind; 6] = [
        ServiceKind::FlowerDelivery,
        ServiceKind::CakeTransport,
        ServiceKind::DocumentCourier,
        ServiceKind::FragileDelivery,
        ServiceKind::PersonalShopping,
        ServiceKind::ExpressEmergency,
    ];

    /// Parse a service from its form slug
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "flower-delivery" => Some(ServiceKind::FlowerDelivery),
            "cake-transport" => Some(ServiceKind::CakeTransport),
            "document-courier" => Some(ServiceKind::DocumentCourier),
            "fragile-delivery" => Some(ServiceKind::FragileDelivery),
            "personal-shopping" => Some(ServiceKind::PersonalShopping),
            "express-emergency" => Some(ServiceKind::ExpressEmergency),
            _ => None,
        }
    }

    /// The slug used as the form's option value
    pub fn as_slug(&self) -> &'static str {
        match self {
            ServiceKind::FlowerDelivery => "flower-delivery",
            ServiceKind::CakeTransport => "cake-transport",
            ServiceKind::DocumentCourier => "document-courier",
            ServiceKind::FragileDelivery => "fragile-delivery",
            ServiceKind::PersonalShopping => "personal-shopping",
            ServiceKind::ExpressEmergency => "express-emergency",
        }
    }

    /// Base charge in cents, before any distance surcharge
    pub fn base_price_cents(&self) -> i64 {
        match self {
            ServiceKind::FlowerDelivery => 2500,
            ServiceKind::CakeTransport => 3000,
            ServiceKind::DocumentCourier => 2000,
            ServiceKind::FragileDelivery => 3500,
            ServiceKind::PersonalShopping => 4000,
            ServiceKind::ExpressEmergency => 5000,
        }
    }

    /// Turnaround window for the service
    pub fn turnaround(&self) -> Turnaround {
        match self {
            ServiceKind::FlowerDelivery => Turnaround {
                min_hours: 2.0,
                max_hours: 4.0,
                same_day: true,
            },
            ServiceKind::CakeTransport => Turnaround {
                min_hours: 4.0,
                max_hours: 6.0,
                same_day: false,
            },
            ServiceKind::DocumentCourier => Turnaround {
                min_hours: 1.0,
                max_hours: 2.0,
                same_day: true,
            },
            ServiceKind::FragileDelivery => Turnaround {
                min_hours: 3.0,
                max_hours: 5.0,
                same_day: true,
            },
            ServiceKind::PersonalShopping => Turnaround {
                min_hours: 6.0,
                max_hours: 8.0,
                same_day: false,
            },
            ServiceKind::ExpressEmergency => Turnaround {
                min_hours: 0.5,
                max_hours: 1.0,
                same_day: true,
            },
        }
    }

    /// Guidance shown under the form when the service is selected
    pub fn guidance(&self) -> &'static str {
        match self {
            ServiceKind::FlowerDelivery => {
                "Please specify flower type and any special care instructions in the message field."
            }
            ServiceKind::CakeTransport => {
                "Please include cake size, tiers, and any special handling requirements."
            }
            ServiceKind::DocumentCourier => {
                "Please specify document type and any security requirements."
            }
            ServiceKind::FragileDelivery => {
                "Please describe the fragile items and any special packaging needs."
            }
            ServiceKind::PersonalShopping => {
                "Please provide shopping list and payment method preferences."
            }
            ServiceKind::ExpressEmergency => {
                "Please explain the urgency and any time constraints."
            }
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_slug())
    }
}
