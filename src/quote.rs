//! Price and delivery-window estimation
//!
//! Placeholder estimators behind the booking form: a base price per service
//! with a per-kilometre surcharge, and a turnaround window derived from the
//! service catalogue. Neither is a real quoting algorithm; distance comes
//! from an injected source so a routing backend can replace the placeholder.

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use rand::Rng;
use serde::Serialize;

use crate::models::ServiceKind;

/// Distance covered by the base price, in kilometres
const INCLUDED_DISTANCE_KM: f64 = 10.0;

/// Surcharge per kilometre past the included distance, in cents
const PER_KM_CENTS: i64 = 200;

/// Fallback base price for an unrecognised service, in cents
const DEFAULT_BASE_CENTS: i64 = 2500;

/// Source of route distance estimates
pub trait DistanceSource {
    /// Estimated distance between two addresses, in kilometres
    fn distance_km(&self, pickup: &str, delivery: &str) -> f64;
}

/// Placeholder distance source drawing uniformly from 5-25 km
#[derive(Debug, Default, Clone)]
pub struct RandomRoute;

impl DistanceSource for RandomRoute {
    fn distance_km(&self, _pickup: &str, _delivery: &str) -> f64 {
        rand::thread_rng().gen_range(5.0..25.0)
    }
}

/// An estimated price for a booking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    /// Base charge for the service, in cents
    pub base_cents: i64,
    /// Route distance the quote was computed for, in kilometres
    pub distance_km: f64,
    /// Distance surcharge, in cents
    pub surcharge_cents: i64,
    /// Total estimated price, in cents
    pub total_cents: i64,
}

impl PriceQuote {
    /// Total price in dollars
    pub fn total_dollars(&self) -> f64 {
        self.total_cents as f64 / 100.0
    }
}

/// Quote a service over a given route distance
///
/// An unrecognised service falls back to the default base price rather than
/// failing; the form accepts any non-empty selection.
pub fn quote_price(service: Option<ServiceKind>, distance_km: f64) -> PriceQuote {
    let base_cents = service
        .map(|kind| kind.base_price_cents())
        .unwrap_or(DEFAULT_BASE_CENTS);

    let billable_km = (distance_km - INCLUDED_DISTANCE_KM).max(0.0);
    let surcharge_cents = (billable_km * PER_KM_CENTS as f64).round() as i64;

    PriceQuote {
        base_cents,
        distance_km,
        surcharge_cents,
        total_cents: base_cents + surcharge_cents,
    }
}

/// Estimated delivery window for a booking
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeliveryWindow {
    /// A future booking, delivered at the requested time
    Scheduled {
        /// Requested delivery time
        at: DateTime<Utc>,
    },
    /// An ASAP booking, delivered within the service's turnaround
    Window {
        /// Earliest expected delivery
        earliest: DateTime<Utc>,
        /// Latest expected delivery
        latest: DateTime<Utc>,
    },
}

/// Estimate when a booking would be delivered
///
/// A requested time in the future yields a scheduled window; otherwise the
/// window is `now` plus the service's minimum-to-maximum turnaround.
pub fn estimate_delivery(
    service: ServiceKind,
    now: DateTime<Utc>,
    requested: Option<DateTime<Utc>>,
) -> DeliveryWindow {
    if let Some(at) = requested {
        if at > now {
            return DeliveryWindow::Scheduled { at };
        }
    }

    let turnaround = service.turnaround();
    DeliveryWindow::Window {
        earliest: now + hours(turnaround.min_hours),
        latest: now + hours(turnaround.max_hours),
    }
}

fn hours(value: f64) -> ChronoDuration {
    ChronoDuration::minutes((value * 60.0).round() as i64)
}
